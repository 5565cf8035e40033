//! Probe configuration.

use crate::{driver::DEFAULT_REPETITIONS, trial::DEFAULT_SAMPLES_PER_TRIAL};
use serde::Deserialize;
use std::path::Path;

/// The main config type.
///
/// The modulus and the sampling distribution are fixed and can't be configured.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
    /// The number of sample pairs drawn by every trial.
    pub samples_per_trial: usize,

    /// The number of trials to run.
    pub repetitions: u32,

    /// The seed for the random generator. When unset, samples come from the thread local
    /// generator and runs are not reproducible.
    pub seed: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { samples_per_trial: DEFAULT_SAMPLES_PER_TRIAL, repetitions: DEFAULT_REPETITIONS, seed: None }
    }
}

impl ProbeConfig {
    /// Loads the config from a YAML file. Fields missing from the file take their default value.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::from(path).format(config::FileFormat::Yaml));
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()
    }

    /// Ensures the configuration describes a runnable probe.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.samples_per_trial == 0 {
            return Err(ConfigError::NoSamples);
        }
        Ok(self)
    }
}

/// A configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config source could not be loaded.
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    /// Trials must draw at least one sample pair.
    #[error("samples per trial must be positive")]
    NoSamples,
}
