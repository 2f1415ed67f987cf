use super::{ordered, validate_container, validate_nonempty, Solver};
use crate::config::PackOrder;
use crate::error::Result;
use crate::model::{PlacedRect, Rectangle};

/// Greedy baseline: places each rectangle at the first row-major position
/// where it fits without overlapping anything already placed.
pub struct BottomLeftSolver {
    width: u32,
    height: u32,
    placed: Vec<PlacedRect>,
}

impl BottomLeftSolver {
    fn fits(&self, width: u32, height: u32, x: u32, y: u32) -> bool {
        if x + width > self.width || y + height > self.height {
            return false;
        }
        let candidate = PlacedRect {
            id: 0,
            x,
            y,
            width,
            height,
        };
        !self.placed.iter().any(|p| p.overlaps(&candidate))
    }

    fn find_position(&self, rect: &Rectangle) -> Option<(u32, u32)> {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.fits(rect.width, rect.height, x, y) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

impl Solver for BottomLeftSolver {
    fn new(width: u32, height: u32) -> Result<Self> {
        validate_container(width, height)?;
        Ok(Self {
            width,
            height,
            placed: Vec::new(),
        })
    }

    fn pack(&mut self, rectangles: &[Rectangle], order: PackOrder) -> Result<bool> {
        validate_nonempty(rectangles)?;
        self.placed.clear();
        for rect in ordered(rectangles, order) {
            match self.find_position(&rect) {
                Some((x, y)) => self.placed.push(PlacedRect::new(rect, x, y)),
                None => {
                    self.placed.clear();
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn placed(&self) -> &[PlacedRect] {
        &self.placed
    }
}
