pub mod korf;
pub mod prp;

pub use korf::KorfBenchmark;
pub use prp::PrpGenerator;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded PRNG exposing exactly the operations the generators need:
/// `randint`, `choice`, and `shuffle` (mirroring a `random.Random`-shaped
/// surface so call sites never depend on which generator backs it).
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Inclusive random integer in `[low, high]`.
    pub fn randint(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..seq.len());
        &seq[idx]
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.rng);
    }
}
