//! A truncating remainder breaks the identity once operands can be negative or exceed the modulus.

use math_lib::modular::Modulus;
use modulo_probe::{
    driver::RepeatDriver,
    sampler::{SampleSource, Sampler},
    trial::{FloorReducer, Reducer, TrialRunner, DEFAULT_SAMPLES_PER_TRIAL},
};

struct TruncatingReducer;

impl Reducer for TruncatingReducer {
    fn reduce(&self, value: i128, modulus: Modulus) -> i128 {
        value % i128::from(modulus.value())
    }
}

fn mixed_sign_sampler(seed: u64) -> Sampler {
    Sampler::with_range(SampleSource::new_random_prng(seed), -1024, 1024).unwrap()
}

#[test]
fn truncating_reducer_aborts_on_first_trial() {
    let runner = TrialRunner::with_reducer(mixed_sign_sampler(11), TruncatingReducer);
    let mut driver = RepeatDriver::new(runner, 100, DEFAULT_SAMPLES_PER_TRIAL);
    let err = driver.run().unwrap_err();
    assert_eq!(err.trial, 1);
    assert_eq!(err.samples, DEFAULT_SAMPLES_PER_TRIAL);
    assert!(err.mismatches > 0);
    assert!(err.to_string().starts_with("invariant violated in trial 1"));
}

#[test]
fn floor_reducer_survives_same_samples() {
    let runner = TrialRunner::with_reducer(mixed_sign_sampler(11), FloorReducer);
    let mut driver = RepeatDriver::new(runner, 100, DEFAULT_SAMPLES_PER_TRIAL);
    let summary = driver.run().unwrap();
    assert_eq!(summary.trials, 100);
}

#[test]
fn truncating_mismatch_is_congruent() {
    let mut runner = TrialRunner::with_reducer(mixed_sign_sampler(3), TruncatingReducer);
    let report = runner.evaluate(DEFAULT_SAMPLES_PER_TRIAL);
    let mismatch = report.first_mismatch.unwrap();
    // Both sides are still congruent, they just land on different representatives.
    assert_eq!((mismatch.factored - mismatch.separate).rem_euclid(256), 0);
    assert!(mismatch.separate < 0 || mismatch.factored < 0);
}
