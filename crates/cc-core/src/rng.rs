//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Every run owns one root [`SimRng`] seeded from `CenterConfig::seed`.
//! Independent concerns (daily volume, arrival gaps, handle times) each take
//! their own child stream:
//!
//!   child_seed = parent.next_u64() XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio.
//! Because each concern draws from its own stream, adding draws to one of
//! them never shifts the values another one sees.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used for every random draw in a simulated day.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` for an independent stream.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw from `Normal(mean, stdev)`.
    ///
    /// A zero (or otherwise unusable) `stdev` degenerates to `mean`.
    pub fn normal(&mut self, mean: f64, stdev: f64) -> f64 {
        if stdev <= 0.0 {
            return mean;
        }
        match Normal::new(mean, stdev) {
            Ok(dist) => dist.sample(&mut self.0),
            Err(_) => mean,
        }
    }
}
