pub mod bottom_left;
pub mod korf_dfs;
pub mod prp_dfs;

pub use bottom_left::BottomLeftSolver;
pub use korf_dfs::KorfDfsSolver;
pub use prp_dfs::PrpDfsSolver;

use crate::config::PackOrder;
use crate::error::{RectPackerError, Result};
use crate::model::{PlacedRect, Rectangle};

/// Common contract every packing solver implements.
///
/// `pack` either places every input rectangle and returns `Ok(true)`, or
/// returns `Ok(false)` with `placed()` empty: there is no partially-placed
/// result. Malformed input (a zero-area container, an empty rectangle list)
/// is rejected with `Err` rather than silently treated as a no-fit.
pub trait Solver {
    fn new(width: u32, height: u32) -> Result<Self>
    where
        Self: Sized;

    fn pack(&mut self, rectangles: &[Rectangle], order: PackOrder) -> Result<bool>;

    fn placed(&self) -> &[PlacedRect];

    fn used_width(&self) -> u32 {
        self.placed().iter().map(|r| r.right()).max().unwrap_or(0)
    }

    fn used_height(&self) -> u32 {
        self.placed().iter().map(|r| r.bottom()).max().unwrap_or(0)
    }

    fn wasted(&self, container_width: u32, container_height: u32) -> u64 {
        let total: u64 = container_width as u64 * container_height as u64;
        let used: u64 = self.placed().iter().map(|r| r.area()).sum();
        total.saturating_sub(used)
    }
}

pub(crate) fn validate_container(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RectPackerError::InvalidDimensions { width, height });
    }
    Ok(())
}

pub(crate) fn validate_nonempty(rectangles: &[Rectangle]) -> Result<()> {
    if rectangles.is_empty() {
        return Err(RectPackerError::Empty);
    }
    Ok(())
}

/// Sorts a working copy of `rectangles` per `order`, tie-breaking by width
/// descending (within `order`'s direction).
pub(crate) fn ordered(rectangles: &[Rectangle], order: PackOrder) -> Vec<Rectangle> {
    let mut rects = rectangles.to_vec();
    match order {
        PackOrder::Decreasing => {
            rects.sort_by(|a, b| b.area().cmp(&a.area()).then(b.width.cmp(&a.width)))
        }
        PackOrder::Increasing => {
            rects.sort_by(|a, b| a.area().cmp(&b.area()).then(a.width.cmp(&b.width)))
        }
        PackOrder::None => {}
    }
    rects
}
