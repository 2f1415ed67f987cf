use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order in which unplaced rectangles are fed to a solver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackOrder {
    #[default]
    Decreasing,
    Increasing,
    None,
}

impl FromStr for PackOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decreasing" | "desc" => Ok(PackOrder::Decreasing),
            "increasing" | "asc" => Ok(PackOrder::Increasing),
            "none" => Ok(PackOrder::None),
            other => Err(format!("unknown pack order: {other}")),
        }
    }
}

/// Selects which solver implementation a driver should run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    BottomLeft,
    KorfDfs,
    PrpDfs,
}

impl FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bottom-left" | "bottomleft" | "bl" => Ok(SolverKind::BottomLeft),
            "korf" | "korf-dfs" | "korfdfs" => Ok(SolverKind::KorfDfs),
            "prp" | "prp-dfs" | "prpdfs" => Ok(SolverKind::PrpDfs),
            other => Err(format!("unknown solver kind: {other}")),
        }
    }
}

/// Candidate-container generation policy used by `search_optimal_container`.
///
/// The two policies differ in slack bounds and orientation handling; see
/// DESIGN.md for why they are kept as two modes of one function rather than
/// two separate searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateMode {
    Korf,
    BottomLeft,
}
