//! Slow workload draw tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use apimetrics_core::body;
use apimetrics_core::workload::{
    Entropy, SeededEntropy, SlowOutcome, SlowPlan, ThreadEntropy, SLOW_DELAY_CEILING_MS,
};

/// Replays fixed values in order.
struct Scripted(Mutex<VecDeque<u32>>);

impl Scripted {
    fn new(values: &[u32]) -> Self {
        Self(Mutex::new(values.iter().copied().collect()))
    }
}

impl Entropy for Scripted {
    fn below(&self, upper: u32) -> u32 {
        let v = self.0.lock().unwrap().pop_front().expect("script exhausted");
        assert!(v < upper, "scripted value {v} out of range {upper}");
        v
    }
}

#[test]
fn roll_below_two_fails() {
    for roll in [0, 1] {
        let plan = SlowPlan::draw(&Scripted::new(&[120, roll]));
        assert_eq!(plan.delay, Duration::from_millis(120));
        assert_eq!(plan.outcome, SlowOutcome::Failure);
        assert_eq!(plan.outcome.body(), body::SLOW_ERROR);
    }
}

#[test]
fn roll_two_and_above_succeeds() {
    for roll in 2..10 {
        let plan = SlowPlan::draw(&Scripted::new(&[0, roll]));
        assert_eq!(plan.delay, Duration::ZERO);
        assert_eq!(plan.outcome, SlowOutcome::Success);
        assert_eq!(plan.outcome.body(), body::SLOW_SUCCESS);
    }
}

#[test]
fn delays_stay_below_ceiling() {
    let entropy = ThreadEntropy;
    let ceiling = Duration::from_millis(u64::from(SLOW_DELAY_CEILING_MS));
    for _ in 0..10_000 {
        assert!(SlowPlan::draw(&entropy).delay < ceiling);
    }
}

#[test]
fn failure_rate_converges_to_twenty_percent() {
    let entropy = SeededEntropy::new(0x5eed);
    let draws = 10_000;
    let failures = (0..draws)
        .filter(|_| SlowPlan::draw(&entropy).outcome.is_failure())
        .count();
    let rate = failures as f64 / draws as f64;
    assert!((0.18..=0.22).contains(&rate), "failure rate {rate}");
}

#[test]
fn seeded_entropy_is_reproducible() {
    let a = SeededEntropy::new(42);
    let b = SeededEntropy::new(42);
    for _ in 0..100 {
        assert_eq!(SlowPlan::draw(&a), SlowPlan::draw(&b));
    }
}

#[test]
fn zero_upper_bound_yields_zero() {
    assert_eq!(ThreadEntropy.below(0), 0);
    assert_eq!(SeededEntropy::new(1).below(0), 0);
}

#[test]
fn bodies_are_valid_json_with_status_field() {
    let ok: serde_json::Value = serde_json::from_str(body::SLOW_SUCCESS).unwrap();
    let err: serde_json::Value = serde_json::from_str(body::SLOW_ERROR).unwrap();
    assert_eq!(ok["status"], "success");
    assert_eq!(err["status"], "error");
    assert_eq!(err["message"], "Internal Server Error");
}
