use serde::{Deserialize, Serialize};

/// An unplaced rectangle: fixed dimensions and an identity, nothing else.
///
/// Placement is never recorded on this type. Solvers own a local placement
/// vector instead of mutating shared `Rectangle` values (see DESIGN.md).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(id: usize, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A rectangle placed at a fixed position by a solver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedRect {
    pub id: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacedRect {
    pub fn new(rect: Rectangle, x: u32, y: u32) -> Self {
        Self {
            id: rect.id,
            x,
            y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Two placed rectangles overlap iff their open intervals intersect on both axes.
    pub fn overlaps(&self, other: &PlacedRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
