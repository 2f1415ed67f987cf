use rect_packer_core::config::{CandidateMode, PackOrder};
use rect_packer_core::generator::KorfBenchmark;
use rect_packer_core::optimal_container::search_optimal_container;
use rect_packer_core::solver::{KorfDfsSolver, Solver};

#[test]
fn korf_n1_packs_into_unit_container() {
    let benchmark = KorfBenchmark::new(1);
    let result = search_optimal_container::<KorfDfsSolver>(
        benchmark.rectangles(),
        CandidateMode::Korf,
        PackOrder::Decreasing,
    )
    .expect("a single 1x1 square must find a container");

    assert_eq!(result.width, 1);
    assert_eq!(result.height, 1);
    assert_eq!(result.solver.wasted(result.width, result.height), 0);
    assert_eq!(
        result.solver.stats.explored_nodes, 1,
        "placing the only rectangle should explore exactly one node"
    );
}

#[test]
fn korf_n5_finds_tight_container() {
    let benchmark = KorfBenchmark::new(5);
    let total_area = benchmark.total_area();
    assert_eq!(total_area, 55);

    let result = search_optimal_container::<KorfDfsSolver>(
        benchmark.rectangles(),
        CandidateMode::Korf,
        PackOrder::Decreasing,
    )
    .expect("Korf N=5 must be packable");

    let container_area = result.width as u64 * result.height as u64;
    assert!(
        container_area >= total_area,
        "container must be at least as large as the total piece area"
    );
    assert!(
        result.solver.wasted(result.width, result.height) >= 1,
        "five squares of distinct sizes cannot tile a container exactly"
    );

    let placed = result.solver.placed();
    assert_eq!(placed.len(), 5);
    for i in 0..placed.len() {
        for j in i + 1..placed.len() {
            assert!(
                !placed[i].overlaps(&placed[j]),
                "placed rectangles must never overlap"
            );
        }
        assert!(placed[i].right() <= result.width);
        assert!(placed[i].bottom() <= result.height);
    }
}
