//! Repeated trials that stop at the first failure.

use crate::{
    config::ProbeConfig,
    sampler::SampleSource,
    trial::{FloorReducer, Reducer, TrialRunner},
};
use log::{debug, error, info};
use thiserror::Error;

/// The number of trials a driver runs by default.
pub const DEFAULT_REPETITIONS: u32 = 100;

/// A trial found a sample pair for which the identity does not hold.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invariant violated in trial {trial}: {mismatches} of {samples} sample pairs mismatched")]
pub struct InvariantViolated {
    /// The 1-based index of the failed trial.
    pub trial: u32,

    /// The number of mismatching pairs in that trial.
    pub mismatches: usize,

    /// The number of pairs in that trial.
    pub samples: usize,
}

/// A summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    /// The number of trials executed.
    pub trials: u32,

    /// The total number of sample pairs checked.
    pub samples: u64,
}

/// Runs a fixed number of trials sequentially.
pub struct RepeatDriver<R = FloorReducer> {
    runner: TrialRunner<R>,
    repetitions: u32,
    samples_per_trial: usize,
}

impl RepeatDriver<FloorReducer> {
    /// Builds a driver from a configuration.
    pub fn from_config(config: &ProbeConfig) -> Self {
        let runner = TrialRunner::new(SampleSource::from(config.seed));
        Self::new(runner, config.repetitions, config.samples_per_trial)
    }
}

impl<R: Reducer> RepeatDriver<R> {
    /// Creates a new driver.
    pub fn new(runner: TrialRunner<R>, repetitions: u32, samples_per_trial: usize) -> Self {
        Self { runner, repetitions, samples_per_trial }
    }

    /// Runs every trial, returning an error as soon as one of them fails.
    pub fn run(&mut self) -> Result<DriverSummary, InvariantViolated> {
        let modulus = self.runner.modulus();
        for trial in 1..=self.repetitions {
            let report = self.runner.evaluate(self.samples_per_trial);
            if let Some(mismatch) = &report.first_mismatch {
                error!(
                    "Trial {trial} failed: x={}, y={} gives ((x mod {modulus}) - (y mod {modulus})) mod {modulus} = {} but (x - y) mod {modulus} = {}",
                    mismatch.x, mismatch.y, mismatch.separate, mismatch.factored
                );
                return Err(InvariantViolated { trial, mismatches: report.mismatches, samples: report.samples });
            }
            debug!("Trial {trial}/{} passed over {} sample pairs", self.repetitions, report.samples);
        }
        let samples = u64::from(self.repetitions).saturating_mul(self.samples_per_trial as u64);
        info!("All {} trials passed over {samples} sample pairs modulo {modulus}", self.repetitions);
        Ok(DriverSummary { trials: self.repetitions, samples })
    }
}
