// File:    random.rs
// Author:  apezoo
// Date:    2025-08-03
//
// Description: Injectable randomness for space-marker selection and Alberti rotor scheduling.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Randomness sources.
//!
//! Only two stages consume randomness: the intelligent codec (which space
//! marker to emit) and the Alberti cipher (rotor keys and how long each one
//! lasts). Both take a `&mut dyn RandomSource` so tests can replay a fixed
//! sequence.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `low..=high`.
    fn pick(&mut self, low: usize, high: usize) -> usize;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// A deterministic source; the same seed always yields the same picks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// A source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of values, then repeats the last one.
///
/// A value inside the requested range is returned as is; anything else is
/// folded into the range, so a script never produces an out-of-range pick.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
    last: usize,
}

impl ScriptedSource {
    /// Creates a source that hands out `values` in order.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, low: usize, high: usize) -> usize {
        if let Some(value) = self.values.pop_front() {
            self.last = value;
        }
        if high <= low {
            return low;
        }
        if (low..=high).contains(&self.last) {
            self.last
        } else {
            low + self.last % (high - low + 1)
        }
    }
}
