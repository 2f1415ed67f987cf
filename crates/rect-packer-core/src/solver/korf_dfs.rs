use std::collections::HashMap;

use tracing::instrument;

use super::{ordered, validate_container, validate_nonempty, Solver};
use crate::config::PackOrder;
use crate::error::Result;
use crate::model::{PlacedRect, Rectangle};

#[derive(Debug, Clone, Copy, Default)]
pub struct KorfStats {
    pub explored_nodes: u64,
    pub area_prunes: u64,
    pub symmetry_skipped: u64,
    pub bound_prunes: u64,
}

/// Branch-and-bound solver for the Korf minimum-enclosing-container problem.
///
/// Maintains per-row (`cap_h`) and per-column (`cap_v`) free-capacity vectors
/// so the Martello-Toth bound can be recomputed from aggregate counts rather
/// than by rescanning placed rectangles at every node.
pub struct KorfDfsSolver {
    width: u32,
    height: u32,
    placed: Vec<PlacedRect>,
    free: u64,
    cap_h: Vec<u32>,
    cap_v: Vec<u32>,
    pub stats: KorfStats,
}

impl KorfDfsSolver {
    fn place(&mut self, rect: Rectangle, x: u32, y: u32) {
        for cy in y..y + rect.height {
            self.cap_h[cy as usize] -= rect.width;
        }
        for cx in x..x + rect.width {
            self.cap_v[cx as usize] -= rect.height;
        }
        self.free -= rect.area();
        self.placed.push(PlacedRect::new(rect, x, y));
    }

    fn remove(&mut self, rect: Rectangle, x: u32, y: u32) {
        self.placed.pop();
        self.free += rect.area();
        for cy in y..y + rect.height {
            self.cap_h[cy as usize] += rect.width;
        }
        for cx in x..x + rect.width {
            self.cap_v[cx as usize] += rect.height;
        }
    }

    /// Rightmost extent of the placed rectangle whose box overlaps the
    /// candidate box `[x, x+w) x [y, y+h)`, or `None` if nothing overlaps.
    fn best_blocker(&self, x: u32, y: u32, w: u32, h: u32) -> Option<u32> {
        let mut best: Option<u32> = None;
        for p in &self.placed {
            let overlaps = x < p.right() && p.x < x + w && y < p.bottom() && p.y < y + h;
            if overlaps {
                best = Some(best.map_or(p.right(), |b| b.max(p.right())));
            }
        }
        best
    }

    /// Size-classed items for the Martello-Toth bound: `items[size] +=
    /// size * count` from the slices of unplaced rectangles along the given
    /// orientation.
    fn items_by_size(rects: &[Rectangle], index: usize, horizontal: bool) -> HashMap<u32, u64> {
        let mut items: HashMap<u32, u64> = HashMap::new();
        for r in &rects[index..] {
            let (size, count) = if horizontal {
                (r.width, r.height)
            } else {
                (r.height, r.width)
            };
            *items.entry(size).or_insert(0) += size as u64 * count as u64;
        }
        items
    }

    fn bins_by_size(capacities: &[u32]) -> HashMap<u32, u64> {
        let mut bins: HashMap<u32, u64> = HashMap::new();
        for &c in capacities {
            if c > 0 {
                *bins.entry(c).or_insert(0) += c as u64;
            }
        }
        bins
    }

    /// Martello-Toth L2 lower bound on wasted capacity for one orientation.
    fn martello_toth_bound(bins: &HashMap<u32, u64>, items: &HashMap<u32, u64>, max_size: u32) -> u64 {
        let mut carry: u64 = 0;
        let mut waste: u64 = 0;
        for s in 1..=max_size {
            let b = *bins.get(&s).unwrap_or(&0);
            let i = *items.get(&s).unwrap_or(&0);
            let t = carry + i;
            if b > t {
                waste += b - t;
                carry = 0;
            } else {
                carry = t - b;
            }
        }
        waste
    }

    fn bounding_function_prunes(&self, rects: &[Rectangle], index: usize, remaining: u64) -> bool {
        let items_h = Self::items_by_size(rects, index, true);
        let bins_h = Self::bins_by_size(&self.cap_h);
        let waste_h = Self::martello_toth_bound(&bins_h, &items_h, self.width);
        if remaining + waste_h > self.free {
            return true;
        }

        let items_v = Self::items_by_size(rects, index, false);
        let bins_v = Self::bins_by_size(&self.cap_v);
        let waste_v = Self::martello_toth_bound(&bins_v, &items_v, self.height);
        remaining + waste_v > self.free
    }

    fn dfs(&mut self, rects: &[Rectangle], index: usize, remaining: u64) -> bool {
        self.stats.explored_nodes += 1;

        if index == rects.len() {
            return true;
        }
        if remaining > self.free {
            self.stats.area_prunes += 1;
            return false;
        }
        if self.bounding_function_prunes(rects, index, remaining) {
            self.stats.bound_prunes += 1;
            return false;
        }

        let rect = rects[index];
        let symmetry = self.placed.is_empty();
        let x_limit_full = self.width - rect.width;
        let y_limit_full = self.height - rect.height;
        let (x_limit, y_limit) = if symmetry {
            let x_limit_sym = x_limit_full / 2;
            let y_limit_sym = y_limit_full / 2;
            // coupes_x is computed against the full y range (before y is
            // narrowed); coupes_y is computed against the already-narrowed
            // x_limit_sym, since x is halved first. This order matches the
            // Python reference exactly and avoids double-counting the
            // x-narrowed/y-narrowed corner.
            let skipped_x = (x_limit_full - x_limit_sym) as u64 * (y_limit_full as u64 + 1);
            let skipped_y = (y_limit_full - y_limit_sym) as u64 * (x_limit_sym as u64 + 1);
            self.stats.symmetry_skipped += skipped_x + skipped_y;
            (x_limit_sym, y_limit_sym)
        } else {
            (x_limit_full, y_limit_full)
        };

        for y in 0..=y_limit {
            let mut x = 0u32;
            while x <= x_limit {
                match self.best_blocker(x, y, rect.width, rect.height) {
                    None => {
                        self.place(rect, x, y);
                        if self.dfs(rects, index + 1, remaining - rect.area()) {
                            return true;
                        }
                        self.remove(rect, x, y);
                        x += 1;
                    }
                    Some(jump) => x = jump,
                }
            }
        }

        false
    }
}

impl Solver for KorfDfsSolver {
    fn new(width: u32, height: u32) -> Result<Self> {
        validate_container(width, height)?;
        Ok(Self {
            width,
            height,
            placed: Vec::new(),
            free: width as u64 * height as u64,
            cap_h: vec![width; height as usize],
            cap_v: vec![height; width as usize],
            stats: KorfStats::default(),
        })
    }

    #[instrument(skip_all, fields(width = self.width, height = self.height, n = rectangles.len()))]
    fn pack(&mut self, rectangles: &[Rectangle], order: PackOrder) -> Result<bool> {
        validate_nonempty(rectangles)?;
        self.placed.clear();
        self.free = self.width as u64 * self.height as u64;
        self.cap_h = vec![self.width; self.height as usize];
        self.cap_v = vec![self.height; self.width as usize];
        self.stats = KorfStats::default();

        let rects = ordered(rectangles, order);
        let total_area: u64 = rects.iter().map(|r| r.area()).sum();
        if total_area > self.free {
            return Ok(false);
        }

        let success = self.dfs(&rects, 0, total_area);
        if !success {
            self.placed.clear();
        }
        Ok(success)
    }

    fn placed(&self) -> &[PlacedRect] {
        &self.placed
    }
}
