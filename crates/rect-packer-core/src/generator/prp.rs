use super::SeededRng;
use crate::error::{RectPackerError, Result};
use crate::model::{PlacedRect, Rectangle};

#[derive(Debug, Clone, Copy)]
struct Piece {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    leaf: bool,
}

impl Piece {
    fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
}

/// Generates synthetic perfect-rectangle-packing instances by recursively
/// guillotine-cutting a W x H container into pieces whose areas sum exactly
/// to W*H.
pub struct PrpGenerator {
    width: u32,
    height: u32,
    target_pieces: usize,
    min_size: u32,
    ratio_min: f64,
    rng: SeededRng,
    pieces: Vec<Piece>,
}

impl PrpGenerator {
    pub fn new(
        width: u32,
        height: u32,
        target_pieces: usize,
        seed: u64,
        min_size: u32,
        ratio_min: f64,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RectPackerError::InvalidContainer { width, height });
        }
        if !(0.0..=0.5).contains(&ratio_min) || ratio_min <= 0.0 {
            return Err(RectPackerError::InvalidRatio { ratio_min });
        }
        let max_pieces = (width as u64 * height as u64) / (min_size as u64 * min_size as u64);
        if target_pieces as u64 > max_pieces {
            return Err(RectPackerError::GeneratorUnreachable {
                requested: target_pieces,
                width,
                height,
                min_size,
            });
        }

        let mut gen = Self {
            width,
            height,
            target_pieces,
            min_size,
            ratio_min,
            rng: SeededRng::new(seed),
            pieces: vec![Piece {
                x: 0,
                y: 0,
                w: width,
                h: height,
                leaf: false,
            }],
        };
        gen.generate();
        Ok(gen)
    }

    fn can_cut(&self, piece: &Piece) -> bool {
        piece.w >= 2 * self.min_size || piece.h >= 2 * self.min_size
    }

    fn choose_direction(&mut self, piece: &Piece) -> Direction {
        let can_h = piece.w >= 2 * self.min_size;
        let can_v = piece.h >= 2 * self.min_size;
        if can_h && !can_v {
            Direction::Horizontal
        } else if can_v && !can_h {
            Direction::Vertical
        } else if piece.w > piece.h {
            Direction::Horizontal
        } else if piece.h > piece.w {
            Direction::Vertical
        } else {
            *self.rng.choice(&[Direction::Horizontal, Direction::Vertical])
        }
    }

    fn cut_position(&mut self, dimension: u32) -> u32 {
        let ratio_lo = (self.ratio_min * dimension as f64).round() as i64;
        let ratio_hi = ((1.0 - self.ratio_min) * dimension as f64).round() as i64;
        let lo = ratio_lo.max(self.min_size as i64);
        let hi = ratio_hi.min(dimension as i64 - self.min_size as i64);
        let (lo, hi) = if lo <= hi {
            (lo, hi)
        } else {
            (self.min_size as i64, dimension as i64 - self.min_size as i64)
        };
        self.rng.randint(lo, hi) as u32
    }

    fn cut_piece(&mut self, piece: Piece) -> (Piece, Piece) {
        match self.choose_direction(&piece) {
            Direction::Horizontal => {
                let cut = self.cut_position(piece.w);
                (
                    Piece {
                        x: piece.x,
                        y: piece.y,
                        w: cut,
                        h: piece.h,
                        leaf: false,
                    },
                    Piece {
                        x: piece.x + cut,
                        y: piece.y,
                        w: piece.w - cut,
                        h: piece.h,
                        leaf: false,
                    },
                )
            }
            Direction::Vertical => {
                let cut = self.cut_position(piece.h);
                (
                    Piece {
                        x: piece.x,
                        y: piece.y,
                        w: piece.w,
                        h: cut,
                        leaf: false,
                    },
                    Piece {
                        x: piece.x,
                        y: piece.y + cut,
                        w: piece.w,
                        h: piece.h - cut,
                        leaf: false,
                    },
                )
            }
        }
    }

    fn generate(&mut self) {
        loop {
            if self.pieces.len() >= self.target_pieces {
                break;
            }
            let mut candidates: Vec<usize> = (0..self.pieces.len())
                .filter(|&i| !self.pieces[i].leaf)
                .collect();
            if candidates.is_empty() {
                break;
            }
            candidates.sort_by_key(|&i| std::cmp::Reverse(self.pieces[i].area()));
            candidates.truncate(3);
            let pick = self.rng.randint(0, candidates.len() as i64 - 1) as usize;
            let idx = candidates[pick];
            let piece = self.pieces.remove(idx);

            if self.can_cut(&piece) {
                let (a, b) = self.cut_piece(piece);
                self.pieces.push(a);
                self.pieces.push(b);
            } else {
                self.pieces.push(Piece { leaf: true, ..piece });
            }
        }
        for p in &mut self.pieces {
            p.leaf = true;
        }
    }

    /// The reference placement: the leaves at their guillotine-cut positions.
    pub fn reference_placement(&self) -> Vec<PlacedRect> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| PlacedRect {
                id: i + 1,
                x: p.x,
                y: p.y,
                width: p.w,
                height: p.h,
            })
            .collect()
    }

    /// Unplaced rectangles in generation order (not shuffled).
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| Rectangle::new(i + 1, p.w, p.h))
            .collect()
    }

    /// Unplaced rectangles in a seeded-shuffled order, suitable as solver input.
    pub fn rectangles_shuffled(&mut self) -> Vec<Rectangle> {
        let mut rects = self.rectangles();
        self.rng.shuffle(&mut rects);
        rects
    }

    pub fn container(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Validates that the reference placement exactly tiles the container:
    /// areas sum to W*H and no two pieces overlap.
    pub fn verify_partition(&self) -> bool {
        let placement = self.reference_placement();
        let total: u64 = placement.iter().map(|p| p.area()).sum();
        if total != self.width as u64 * self.height as u64 {
            return false;
        }
        for i in 0..placement.len() {
            for j in i + 1..placement.len() {
                if placement[i].overlaps(&placement[j]) {
                    return false;
                }
            }
        }
        true
    }
}
