//! Random integer sources used for age sampling.
//!
//! Generation never touches a global RNG. Callers hand the generator a
//! `RandomSource`, which in production wraps a ChaCha8 stream seeded either
//! from the command line or from OS entropy, and in tests can be any
//! deterministic stand-in.

use crate::error::{Result, SeedError};
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng, TryRngCore};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Capability to draw a uniformly distributed integer from a closed range.
pub trait RandomSource {
    /// Draw one integer from `range`, every value equally likely.
    fn next_in(&mut self, range: RangeInclusive<u32>) -> Result<u32>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> Result<u32> {
        (**self).next_in(range)
    }
}

/// Adapts any `rand` generator to `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_in(&mut self, range: RangeInclusive<u32>) -> Result<u32> {
        if range.is_empty() {
            return Err(SeedError::source_unavailable(format!(
                "cannot sample from empty range {}..={}",
                range.start(),
                range.end()
            )));
        }
        Ok(self.rng.random_range(range))
    }
}

/// The source the CLI uses: a ChaCha8 stream
pub type SeededSource = RngSource<ChaCha8Rng>;

impl RngSource<ChaCha8Rng> {
    /// Reproducible source for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    ///
    /// Returns the drawn seed alongside the source so a run can be replayed.
    pub fn from_os_entropy() -> Result<(Self, u64)> {
        let seed = draw_os_seed()?;
        Ok((Self::seeded(seed), seed))
    }
}

/// Read one `u64` from the operating system's entropy source.
pub fn draw_os_seed() -> Result<u64> {
    let mut os = OsRng;
    os.try_next_u64()
        .map_err(|e| SeedError::source_unavailable(e.to_string()))
}
