use std::collections::HashSet;

use tracing::instrument;

use crate::config::{CandidateMode, PackOrder};
use crate::model::Rectangle;
use crate::solver::Solver;

const MAX_CANDIDATES: usize = 500;

/// Result of a successful optimal-container search.
pub struct ContainerResult<S: Solver> {
    pub width: u32,
    pub height: u32,
    pub solver: S,
}

fn korf_candidates(total_area: u64, w_max: u32, h_max: u32, sum_widths: u32) -> Vec<(u32, u32)> {
    let mut candidates: Vec<(u32, u32)> = Vec::new();
    let lo_bound = (total_area as f64 * 1.008) as u64;
    let hi_bound = (total_area as f64 * 1.15) as u64;

    for width in w_max.max(1)..=sum_widths.max(w_max) {
        let height = (total_area as u64).div_ceil(width as u64).max(h_max as u64) as u32;
        let area = width as u64 * height as u64;
        if area > lo_bound && area <= hi_bound {
            let pair = if width <= height {
                (width, height)
            } else {
                (height, width)
            };
            if !candidates.contains(&pair) {
                candidates.push(pair);
            }
        }
    }

    candidates.sort_by_key(|&(w, h)| w as u64 * h as u64);
    candidates.truncate(MAX_CANDIDATES);
    candidates
}

fn bottom_left_candidates(total_area: u64, w_max: u32, h_max: u32) -> Vec<(u32, u32)> {
    let mut candidates: Vec<(u32, u32)> = Vec::new();
    let base_w = (total_area as f64).sqrt().ceil() as u32;
    let w_lo = base_w.max(w_max).max(1);
    let hi_bound = total_area * 2;

    for width in w_lo..=w_lo + 300 {
        let base_height = (total_area as u64).div_ceil(width as u64).max(h_max as u64) as u32;
        for offset in 0..=4u32 {
            let height = base_height + offset;
            let area = width as u64 * height as u64;
            if area <= hi_bound {
                candidates.push((width, height));
                candidates.push((height, width));
            }
        }
    }

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    candidates.retain(|&pair| seen.insert(pair));
    candidates.sort_by_key(|&(w, h)| w as u64 * h as u64);
    candidates.truncate(MAX_CANDIDATES);
    candidates
}

/// Enumerates candidate `(width, height)` containers in ascending area order
/// and returns the first one a fresh solver can pack successfully.
#[instrument(skip_all, fields(n = rectangles.len(), mode = ?mode))]
pub fn search_optimal_container<S: Solver>(
    rectangles: &[Rectangle],
    mode: CandidateMode,
    order: PackOrder,
) -> Option<ContainerResult<S>> {
    let total_area: u64 = rectangles.iter().map(|r| r.area()).sum();
    let w_max = rectangles.iter().map(|r| r.width).max().unwrap_or(0);
    let h_max = rectangles.iter().map(|r| r.height).max().unwrap_or(0);

    let candidates = match mode {
        CandidateMode::Korf => {
            let sum_widths: u32 = rectangles.iter().map(|r| r.width).sum();
            korf_candidates(total_area, w_max, h_max, sum_widths)
        }
        CandidateMode::BottomLeft => bottom_left_candidates(total_area, w_max, h_max),
    };

    for (width, height) in candidates {
        let Ok(mut solver) = S::new(width, height) else {
            continue;
        };
        if let Ok(true) = solver.pack(rectangles, order) {
            return Some(ContainerResult {
                width,
                height,
                solver,
            });
        }
    }
    None
}
