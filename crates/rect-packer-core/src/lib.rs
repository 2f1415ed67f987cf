//! Exact solvers for 2D orthogonal rectangle packing.
//!
//! - Korf benchmark: minimum enclosing container for unit squares 1..N via
//!   branch-and-bound with Martello-Toth bounds (`solver::KorfDfsSolver`).
//! - Perfect rectangle packing: fixed W x H container tiled exactly via a
//!   skyline DFS with Hougardy's pruning rules (`solver::PrpDfsSolver`).
//! - `optimal_container::search_optimal_container` enumerates candidate
//!   containers and delegates to any `Solver`.
//!
//! Quick example:
//! ```ignore
//! use rect_packer_core::generator::KorfBenchmark;
//! use rect_packer_core::config::{CandidateMode, PackOrder};
//! use rect_packer_core::optimal_container::search_optimal_container;
//! use rect_packer_core::solver::KorfDfsSolver;
//!
//! let bench = KorfBenchmark::new(5);
//! let result = search_optimal_container::<KorfDfsSolver>(
//!     bench.rectangles(),
//!     CandidateMode::Korf,
//!     PackOrder::Decreasing,
//! );
//! assert!(result.is_some());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod optimal_container;
pub mod skyline;
pub mod solver;

pub use config::*;
pub use error::*;
pub use model::*;
pub use optimal_container::{search_optimal_container, ContainerResult};

/// Convenience prelude for common types and functions.
/// Importing `rect_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{CandidateMode, PackOrder, SolverKind};
    pub use crate::generator::{KorfBenchmark, PrpGenerator};
    pub use crate::model::{PlacedRect, Rectangle};
    pub use crate::optimal_container::{search_optimal_container, ContainerResult};
    pub use crate::skyline::Skyline;
    pub use crate::solver::{BottomLeftSolver, KorfDfsSolver, PrpDfsSolver, Solver};
}
