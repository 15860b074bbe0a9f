//! Synthetic download progress.
//!
//! The list screen draws one percentage per torrent whenever it is
//! constructed. Where those numbers come from is a capability passed in
//! by the caller: an RNG in the binary, a scripted sequence in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::MAX_PERCENT;

/// Producer of download percentages in `0..=100`.
pub trait PercentSource {
    fn next_percent(&mut self) -> u8;
}

/// Uniformly random percentages backed by any [`Rng`].
#[derive(Debug)]
pub struct RngPercentSource<R> {
    rng: R,
}

impl<R: Rng> RngPercentSource<R> {
    pub fn new(rng: R) -> Self {
        RngPercentSource { rng }
    }
}

impl RngPercentSource<SmallRng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> PercentSource for RngPercentSource<R> {
    fn next_percent(&mut self) -> u8 {
        self.rng.gen_range(0..=MAX_PERCENT)
    }
}

/// Replays a fixed list of percentages, cycling when exhausted.
///
/// Values above 100 are clamped. An empty script yields 0.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedPercents {
    values: Vec<u8>,
    next: usize,
}

#[cfg(test)]
impl ScriptedPercents {
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        ScriptedPercents {
            values: values.into(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl PercentSource for ScriptedPercents {
    fn next_percent(&mut self) -> u8 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.min(MAX_PERCENT)
    }
}

/// Draw `count` percentages, in order.
pub fn draw_percentages(source: &mut dyn PercentSource, count: usize) -> Vec<u8> {
    (0..count).map(|_| source.next_percent()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
