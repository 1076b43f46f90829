//! Pluggable random source for intake and generation draws.
//!
//! Logic never calls `rand` directly. Production code wraps any [`rand::Rng`]
//! in [`RngSource`]; tests can use a seeded `StdRng` or [`ScriptedRolls`]
//! to pin exact outcomes.
//!
//! ```
//! use prisonsim_logic::random::{RandomSource, ScriptedRolls};
//!
//! let mut rolls = ScriptedRolls::new([3, 7]);
//! assert_eq!(rolls.roll(1, 5), 3);
//! assert_eq!(rolls.roll(1, 5), 5); // clamped into range
//! assert_eq!(rolls.roll(1, 5), 1); // exhausted: lowest value
//! ```

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of bounded uniform integers.
pub trait RandomSource {
    /// Draw a value uniformly from `low..=high`. Callers guarantee `low <= high`.
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// Draw an index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let last = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.roll(0, last) as usize
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll(low, high)
    }
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each value is clamped into the requested range. Once the script runs
/// out every draw returns the low bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u32>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.rolls
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }
}
