use crate::model::Rectangle;

/// Generates the unit squares of side 1 through N for Korf's minimum
/// enclosing rectangle benchmark.
pub struct KorfBenchmark {
    n: usize,
    rectangles: Vec<Rectangle>,
}

impl KorfBenchmark {
    pub fn new(n: usize) -> Self {
        let rectangles = (1..=n as u32).map(|i| Rectangle::new(i as usize, i, i)).collect();
        Self { n, rectangles }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn total_area(&self) -> u64 {
        self.rectangles.iter().map(|r| r.area()).sum()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }
}
