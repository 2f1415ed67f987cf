use crate::model::PlacedRect;

/// A horizontal run of the skyline's top profile at constant height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x: u32,
    pub width: u32,
    pub height: u32,
}

impl Segment {
    fn end(&self) -> u32 {
        self.x + self.width
    }
}

/// Piecewise-constant top profile of a W x H container, with an undo log.
///
/// Segments always cover `[0, width)` contiguously, in x order, with no two
/// adjacent segments sharing the same height.
#[derive(Debug, Clone)]
pub struct Skyline {
    width: u32,
    height: u32,
    segments: Vec<Segment>,
    history: Vec<Vec<Segment>>,
}

impl Skyline {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            segments: vec![Segment {
                x: 0,
                width,
                height: 0,
            }],
            history: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_filled(&self) -> bool {
        self.segments.len() == 1 && self.segments[0].height == self.height
    }

    /// The valley of minimum width among strict valleys, tie-broken by
    /// (height, x). Falls back to the lowest, leftmost segment when no
    /// strict valley exists.
    pub fn narrowest_valley(&self) -> Option<Segment> {
        if self.is_filled() {
            return None;
        }
        let valleys = self.detect_valleys();
        if valleys.is_empty() {
            return self.lowest_segment();
        }
        let mut best = valleys[0];
        for &seg in &valleys[1..] {
            let key = (seg.width, seg.height, seg.x);
            let best_key = (best.width, best.height, best.x);
            if key < best_key {
                best = seg;
            }
        }
        Some(best)
    }

    fn lowest_segment(&self) -> Option<Segment> {
        if self.is_filled() {
            return None;
        }
        let min_h = self.segments.iter().map(|s| s.height).min()?;
        self.segments.iter().copied().find(|s| s.height == min_h)
    }

    fn detect_valleys(&self) -> Vec<Segment> {
        let n = self.segments.len();
        let mut valleys = Vec::new();
        for i in 0..n {
            let seg = self.segments[i];
            if seg.height == self.height {
                continue;
            }
            let left_h = if i == 0 {
                self.height
            } else {
                self.segments[i - 1].height
            };
            let right_h = if i + 1 == n {
                self.height
            } else {
                self.segments[i + 1].height
            };
            if seg.height < left_h && seg.height < right_h {
                valleys.push(seg);
            }
        }
        valleys
    }

    /// The height the given valley must rise to before it is absorbed into
    /// the profile around it: the minimum of its two neighbors' heights.
    pub fn ceiling_height(&self, valley: &Segment) -> u32 {
        let idx = self
            .segments
            .iter()
            .position(|s| s.x == valley.x && s.height == valley.height)
            .expect("valley must come from this skyline's current segments");
        let left_h = if idx == 0 {
            self.height
        } else {
            self.segments[idx - 1].height
        };
        let right_h = if idx + 1 == self.segments.len() {
            self.height
        } else {
            self.segments[idx + 1].height
        };
        left_h.min(right_h)
    }

    /// Sum of widths of consecutive segments starting at `x` with height
    /// exactly `h`, scanning rightward until a mismatching segment is met.
    pub fn available_width(&self, x: u32, h: u32) -> u32 {
        let mut total = 0u32;
        for seg in &self.segments {
            if seg.x < x {
                continue;
            }
            if seg.height != h {
                break;
            }
            total += seg.width;
        }
        total
    }

    /// Raises the strip `[rect.x, rect.x + rect.width)` from `rect.y` to
    /// `rect.y + rect.height`, pushing the prior segment sequence onto the
    /// undo log.
    pub fn apply(&mut self, rect: &PlacedRect) {
        self.history.push(self.segments.clone());

        let x_start = rect.x;
        let x_end = rect.right();
        let new_height = rect.y + rect.height;

        let mut result = Vec::with_capacity(self.segments.len() + 2);
        for seg in &self.segments {
            let seg_end = seg.end();
            if seg_end <= x_start || seg.x >= x_end {
                result.push(*seg);
                continue;
            }
            if seg.x < x_start {
                result.push(Segment {
                    x: seg.x,
                    width: x_start - seg.x,
                    height: seg.height,
                });
            }
            let overlap_start = seg.x.max(x_start);
            let overlap_end = seg_end.min(x_end);
            result.push(Segment {
                x: overlap_start,
                width: overlap_end - overlap_start,
                height: new_height,
            });
            if seg_end > x_end {
                result.push(Segment {
                    x: x_end,
                    width: seg_end - x_end,
                    height: seg.height,
                });
            }
        }

        self.segments = Self::merge(result);
    }

    pub fn undo(&mut self) {
        self.segments = self
            .history
            .pop()
            .expect("undo called without a matching apply");
    }

    fn merge(segments: Vec<Segment>) -> Vec<Segment> {
        let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
        for seg in segments {
            if let Some(last) = merged.last_mut() {
                if last.height == seg.height {
                    last.width += seg.width;
                    continue;
                }
            }
            merged.push(seg);
        }
        merged
    }
}
