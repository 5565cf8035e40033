use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use modulo_probe::{config::ProbeConfig, driver::RepeatDriver};
use std::path::PathBuf;

/// Modular subtraction probe.
///
/// Checks that `((x mod 256) - (y mod 256)) mod 256 == (x - y) mod 256` over many random samples
/// and prints `Success` if it held for all of them.
#[derive(Parser, Debug)]
#[clap(about, version)]
struct Args {
    /// Optional YAML config file.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// The number of sample pairs drawn by every trial.
    #[clap(short, long)]
    samples: Option<usize>,

    /// The number of trials to run.
    #[clap(short, long)]
    repetitions: Option<u32>,

    /// Seed the random generator to make the run reproducible.
    #[clap(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<ProbeConfig> {
        let mut config = match &self.config {
            Some(path) => ProbeConfig::load(path).with_context(|| format!("error loading config from {path:?}"))?,
            None => ProbeConfig::default(),
        };
        if let Some(samples) = self.samples {
            config.samples_per_trial = samples;
        }
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config.validate()?)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.into_config()?;

    info!(
        "Running {} trials of {} sample pairs (seed: {:?})",
        config.repetitions, config.samples_per_trial, config.seed
    );
    let mut driver = RepeatDriver::from_config(&config);
    driver.run().context("modular subtraction probe failed")?;
    println!("Success");
    Ok(())
}
