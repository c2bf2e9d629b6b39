//! Target selection.
//!
//! The engine never touches a global generator directly; it asks a
//! [`TargetSource`] for each new target. Production uses the thread RNG,
//! `--seed` uses a seeded `StdRng`, and tests pin the value with
//! [`FixedTarget`].

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Provider of uniformly distributed targets
pub trait TargetSource {
    /// Draw a value from `range` (inclusive on both ends)
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Draws from `rand::rng()`, freshly seeded per thread by the OS
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl TargetSource for ThreadRngSource {
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32 {
        rand::rng().random_range(range)
    }
}

/// Reproducible sequence of targets from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for SeededSource {
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Always yields the same target, clamped into the requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(pub u32);

impl TargetSource for FixedTarget {
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.clamp(*range.start(), *range.end())
    }
}

impl<S: TargetSource + ?Sized> TargetSource for Box<S> {
    fn next_target(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).next_target(range)
    }
}
