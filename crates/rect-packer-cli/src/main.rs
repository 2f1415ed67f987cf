use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rect_packer_core::config::{CandidateMode, PackOrder, SolverKind};
use rect_packer_core::generator::{KorfBenchmark, PrpGenerator};
use rect_packer_core::optimal_container::search_optimal_container;
use rect_packer_core::solver::{BottomLeftSolver, KorfDfsSolver, PrpDfsSolver, Solver};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rect-packer",
    about = "Exact solvers for 2D orthogonal rectangle packing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true, help_heading = "Logging/UX")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run Korf's minimum-enclosing-container benchmark for a list of N values
    Korf(KorfArgs),
    /// Generate a perfect-rectangle-packing instance and solve it
    Prp(PrpArgs),
}

#[derive(Parser, Debug, Clone)]
struct KorfArgs {
    /// Sizes N to benchmark (unit squares 1..N)
    #[arg(long, value_delimiter = ',', default_value = "5,8,11")]
    sizes: Vec<usize>,
    /// Solver to run: korf-dfs (default) or bottom-left
    #[arg(long, default_value = "korf-dfs", value_parser = ["korf-dfs", "bottom-left"])]
    solver: String,
    /// Render the winning placement as an ASCII grid
    #[arg(long, default_value_t = false)]
    ascii: bool,
}

#[derive(Parser, Debug, Clone)]
struct PrpArgs {
    /// Container width
    #[arg(long, default_value_t = 20)]
    width: u32,
    /// Container height
    #[arg(long, default_value_t = 15)]
    height: u32,
    /// Number of target pieces to generate
    #[arg(long, default_value_t = 20)]
    pieces: usize,
    /// RNG seed for the guillotine-cut generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Render the winning placement as an ASCII grid
    #[arg(long, default_value_t = false)]
    ascii: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Korf(args) => run_korf(args),
        Commands::Prp(args) => run_prp(args),
    }
}

fn run_korf(args: &KorfArgs) -> Result<()> {
    for &n in &args.sizes {
        info!(n, "running Korf benchmark");
        let start = Instant::now();
        let benchmark = KorfBenchmark::new(n);
        println!(
            "Korf N={} ({} rectangles, total area {})",
            n,
            benchmark.rectangles().len(),
            benchmark.total_area()
        );

        let kind: SolverKind = args
            .solver
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid --solver value {:?}", args.solver))?;

        match kind {
            SolverKind::BottomLeft => {
                let result = search_optimal_container::<BottomLeftSolver>(
                    benchmark.rectangles(),
                    CandidateMode::BottomLeft,
                    PackOrder::Decreasing,
                )
                .context("bottom-left search found no container")?;
                report(&result.solver, result.width, result.height, start, args.ascii);
            }
            SolverKind::KorfDfs => {
                let result = search_optimal_container::<KorfDfsSolver>(
                    benchmark.rectangles(),
                    CandidateMode::Korf,
                    PackOrder::Decreasing,
                )
                .context("korf-dfs search found no container")?;
                println!(
                    "    explored={} area_prunes={} symmetry_skipped={} bound_prunes={}",
                    result.solver.stats.explored_nodes,
                    result.solver.stats.area_prunes,
                    result.solver.stats.symmetry_skipped,
                    result.solver.stats.bound_prunes,
                );
                report(&result.solver, result.width, result.height, start, args.ascii);
            }
            SolverKind::PrpDfs => {
                anyhow::bail!("solver {:?} is not applicable to the korf subcommand", args.solver);
            }
        }
    }
    Ok(())
}

fn run_prp(args: &PrpArgs) -> Result<()> {
    info!(width = args.width, height = args.height, pieces = args.pieces, "generating PRP instance");
    let mut gen = PrpGenerator::new(args.width, args.height, args.pieces, args.seed, 2, 0.2)
        .context("failed to generate PRP instance")?;
    if !gen.verify_partition() {
        anyhow::bail!("generated instance does not tile its container exactly");
    }

    let rects = gen.rectangles_shuffled();
    println!(
        "PRP {}x{}, {} pieces (seed={})",
        args.width,
        args.height,
        rects.len(),
        args.seed
    );

    let start = Instant::now();
    let mut solver = PrpDfsSolver::new(args.width, args.height)?;
    let success = solver.pack(&rects, PackOrder::Decreasing)?;
    let elapsed = start.elapsed();

    if success {
        println!("    solved via PRP-DFS in {:.3}s", elapsed.as_secs_f64());
        println!(
            "    explored={} empty_valley={} r1={} r3={} r4={}",
            solver.stats.explored_nodes,
            solver.stats.empty_valley_prunes,
            solver.stats.r1_area_prunes,
            solver.stats.r3_propagation_prunes,
            solver.stats.r4_dead_space_prunes,
        );
        if args.ascii {
            print_ascii(solver.placed(), args.width, args.height);
        }
    } else {
        println!("    no exact tiling found in {:.3}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn report<S: Solver>(solver: &S, width: u32, height: u32, start: Instant, ascii: bool) {
    let elapsed = start.elapsed();
    println!(
        "    container={}x{} wasted={} elapsed={:.3}s",
        width,
        height,
        solver.wasted(width, height),
        elapsed.as_secs_f64()
    );
    if ascii {
        print_ascii(solver.placed(), width, height);
    }
}

fn print_ascii(placed: &[rect_packer_core::model::PlacedRect], width: u32, height: u32) {
    let mut grid = vec![vec![' '; width as usize]; height as usize];
    for rect in placed {
        let label = char::from_digit((rect.id as u32) % 10, 10).unwrap_or('#');
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                grid[y as usize][x as usize] = label;
            }
        }
    }
    for row in grid.iter().rev() {
        let line: String = row.iter().collect();
        println!("    {line}");
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
