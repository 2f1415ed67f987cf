use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::instrument;

use super::{ordered, validate_container, validate_nonempty, Solver};
use crate::config::PackOrder;
use crate::error::Result;
use crate::model::{PlacedRect, Rectangle};
use crate::skyline::Skyline;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrpStats {
    pub explored_nodes: u64,
    pub empty_valley_prunes: u64,
    pub r1_area_prunes: u64,
    pub r3_propagation_prunes: u64,
    pub r4_dead_space_prunes: u64,
}

/// Skyline-driven DFS for perfect rectangle packing, using Hougardy's four
/// pruning rules and narrowest-valley branching.
pub struct PrpDfsSolver {
    width: u32,
    height: u32,
    skyline: Skyline,
    placed: Vec<PlacedRect>,
    pub stats: PrpStats,
}

impl PrpDfsSolver {
    /// R3: every non-full segment of the current skyline must still be
    /// coverable by some unplaced rectangle.
    fn propagation_holds(&self, rects: &[Rectangle], n: usize) -> bool {
        for seg in self.skyline.segments() {
            if seg.height == self.height {
                continue;
            }
            let avail_w = self.skyline.available_width(seg.x, seg.height);
            let avail_h = self.height - seg.height;
            let covered = rects[..n]
                .iter()
                .any(|r| r.width <= avail_w && r.height <= avail_h);
            if !covered {
                return false;
            }
        }
        true
    }

    fn dfs(&mut self, rects: &mut [Rectangle], n: usize, first_placement: bool) -> bool {
        self.stats.explored_nodes += 1;

        if self.skyline.is_filled() {
            return true;
        }

        let valley = self
            .skyline
            .narrowest_valley()
            .expect("unfilled skyline always has a valley or lowest segment");
        let x_v = valley.x;
        let h_v = valley.height;
        let ceiling = self.skyline.ceiling_height(&valley);
        let l = self.skyline.available_width(x_v, h_v);
        let a = self.height - h_v;

        let a_min = l as u64 * (ceiling - h_v) as u64;
        let a_compat: u64 = rects[..n]
            .iter()
            .filter(|r| r.width <= l && r.height <= a)
            .map(|r| r.area())
            .sum();
        if a_compat < a_min {
            self.stats.r1_area_prunes += 1;
            return false;
        }

        let mut candidates: Vec<usize> = (0..n)
            .filter(|&i| rects[i].width <= l && rects[i].height <= a)
            .collect();
        if candidates.is_empty() {
            self.stats.empty_valley_prunes += 1;
            return false;
        }

        candidates.sort_by_key(|&i| {
            let r = rects[i];
            (r.width != l, Reverse(r.area()))
        });
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        candidates.retain(|&i| seen.insert((rects[i].width, rects[i].height)));

        for idx in candidates {
            let rect = rects[idx];

            if first_placement {
                let x_limit = (self.width - rect.width) / 2;
                if x_v > x_limit {
                    continue;
                }
            }

            let residual = l - rect.width;
            if residual > 0 {
                let has_other = rects[..n]
                    .iter()
                    .enumerate()
                    .any(|(j, r)| j != idx && r.width <= residual && r.height <= a);
                if !has_other {
                    self.stats.r4_dead_space_prunes += 1;
                    continue;
                }
            }

            rects.swap(idx, n - 1);
            let placed_rect = PlacedRect::new(rect, x_v, h_v);
            self.skyline.apply(&placed_rect);
            self.placed.push(placed_rect);

            if !self.propagation_holds(rects, n - 1) {
                self.stats.r3_propagation_prunes += 1;
                self.skyline.undo();
                self.placed.pop();
                rects.swap(idx, n - 1);
                continue;
            }

            if self.dfs(rects, n - 1, false) {
                return true;
            }

            self.skyline.undo();
            self.placed.pop();
            rects.swap(idx, n - 1);
        }

        false
    }
}

impl Solver for PrpDfsSolver {
    fn new(width: u32, height: u32) -> Result<Self> {
        validate_container(width, height)?;
        Ok(Self {
            width,
            height,
            skyline: Skyline::new(width, height),
            placed: Vec::new(),
            stats: PrpStats::default(),
        })
    }

    #[instrument(skip_all, fields(width = self.width, height = self.height, n = rectangles.len()))]
    fn pack(&mut self, rectangles: &[Rectangle], order: PackOrder) -> Result<bool> {
        validate_nonempty(rectangles)?;
        self.placed.clear();
        self.skyline = Skyline::new(self.width, self.height);
        self.stats = PrpStats::default();

        let total_area: u64 = rectangles.iter().map(|r| r.area()).sum();
        if total_area != self.width as u64 * self.height as u64 {
            return Ok(false);
        }

        let mut rects = ordered(rectangles, order);
        let n = rects.len();
        let success = self.dfs(&mut rects, n, true);
        if !success {
            self.placed.clear();
        }
        Ok(success)
    }

    fn placed(&self) -> &[PlacedRect] {
        &self.placed
    }
}
