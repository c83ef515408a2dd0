//! Simulated workload behind the slow endpoint.
//!
//! Each request draws a delay in `[0, SLOW_DELAY_CEILING_MS)` milliseconds and
//! then a failure roll in `[0, FAILURE_ROLL_SIDES)`; rolls below
//! `FAILURE_THRESHOLD` fail. Randomness goes through [`Entropy`] so tests can
//! seed or script it.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body;

pub const SLOW_DELAY_CEILING_MS: u32 = 500;
pub const FAILURE_ROLL_SIDES: u32 = 10;
pub const FAILURE_THRESHOLD: u32 = 2;

/// Source of uniform integers. Not required to be cryptographically secure.
pub trait Entropy: Send + Sync {
    /// Uniform value in `[0, upper)`. Returns 0 when `upper` is 0.
    fn below(&self, upper: u32) -> u32;
}

/// Thread-local RNG; the production source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn below(&self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        rand::rng().random_range(0..upper)
    }
}

/// Deterministic RNG for reproducible runs.
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl fmt::Debug for SeededEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededEntropy").finish_non_exhaustive()
    }
}

impl Entropy for SeededEntropy {
    fn below(&self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlowOutcome {
    Success,
    Failure,
}

impl SlowOutcome {
    pub fn is_failure(self) -> bool {
        matches!(self, SlowOutcome::Failure)
    }

    pub fn body(self) -> &'static str {
        match self {
            SlowOutcome::Success => body::SLOW_SUCCESS,
            SlowOutcome::Failure => body::SLOW_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlowOutcome::Success => "success",
            SlowOutcome::Failure => "error",
        }
    }
}

/// One drawn slow request: how long to wait, then how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowPlan {
    pub delay: Duration,
    pub outcome: SlowOutcome,
}

impl SlowPlan {
    /// Draw delay first, then the failure roll.
    pub fn draw(entropy: &dyn Entropy) -> Self {
        let delay_ms = entropy.below(SLOW_DELAY_CEILING_MS);
        let roll = entropy.below(FAILURE_ROLL_SIDES);
        let outcome = if roll < FAILURE_THRESHOLD {
            SlowOutcome::Failure
        } else {
            SlowOutcome::Success
        };
        Self {
            delay: Duration::from_millis(u64::from(delay_ms)),
            outcome,
        }
    }
}
