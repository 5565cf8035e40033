//! Uniform integer sampling.

use math_lib::modular::Modulus;
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use thiserror::Error;

/// The source of randomness samples are drawn from.
#[derive(Debug, Clone)]
pub enum SampleSource {
    /// Use the thread local generator. Samples are not reproducible across runs.
    Random,

    /// Use a seeded PRNG.
    RandomPrng(Box<StdRng>),
}

impl SampleSource {
    /// Create a new seeded PRNG based source.
    pub fn new_random_prng(seed: u64) -> Self {
        Self::RandomPrng(Box::new(StdRng::seed_from_u64(seed)))
    }
}

impl From<Option<u64>> for SampleSource {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new_random_prng(seed),
            None => Self::Random,
        }
    }
}

/// The requested sample range contains no integers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("empty sample range [{low}, {high})")]
pub struct EmptyRange {
    /// The inclusive lower bound.
    pub low: i64,

    /// The exclusive upper bound.
    pub high: i64,
}

/// Draws integers uniformly and independently, with replacement, from a half open range.
#[derive(Debug, Clone)]
pub struct Sampler {
    source: SampleSource,
    distribution: Uniform<i64>,
}

impl Sampler {
    /// Creates a sampler over the residues of a modulus, that is `[0, n)`.
    pub fn residues(source: SampleSource, modulus: Modulus) -> Self {
        Self { source, distribution: Uniform::new(0, modulus.value()) }
    }

    /// Creates a sampler over `[low, high)`.
    pub fn with_range(source: SampleSource, low: i64, high: i64) -> Result<Self, EmptyRange> {
        if low >= high {
            return Err(EmptyRange { low, high });
        }
        Ok(Self { source, distribution: Uniform::new(low, high) })
    }

    /// Draws `count` samples.
    pub fn sample(&mut self, count: usize) -> Vec<i64> {
        match &mut self.source {
            SampleSource::Random => Self::draw(&self.distribution, count, &mut rand::thread_rng()),
            SampleSource::RandomPrng(rng) => Self::draw(&self.distribution, count, rng.as_mut()),
        }
    }

    fn draw<R: Rng>(distribution: &Uniform<i64>, count: usize, rng: &mut R) -> Vec<i64> {
        distribution.sample_iter(rng).take(count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residues_stay_in_range() {
        let mut sampler = Sampler::residues(SampleSource::Random, Modulus::BYTE);
        let samples = sampler.sample(10_000);
        assert_eq!(samples.len(), 10_000);
        assert!(samples.iter().all(|sample| (0..256).contains(sample)));
    }

    #[test]
    fn residues_cover_both_ends() {
        let mut sampler = Sampler::residues(SampleSource::new_random_prng(7), Modulus::new(4).unwrap());
        let samples = sampler.sample(1_000);
        for residue in 0..4 {
            assert!(samples.contains(&residue), "residue {residue} never sampled");
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut first = Sampler::residues(SampleSource::from(Some(42)), Modulus::BYTE);
        let mut second = Sampler::residues(SampleSource::from(Some(42)), Modulus::BYTE);
        assert_eq!(first.sample(100), second.sample(100));
    }

    #[test]
    fn consecutive_draws_differ() {
        let mut sampler = Sampler::residues(SampleSource::new_random_prng(1), Modulus::BYTE);
        assert_ne!(sampler.sample(100), sampler.sample(100));
    }

    #[test]
    fn custom_range() {
        let mut sampler = Sampler::with_range(SampleSource::new_random_prng(3), -1024, 1024).unwrap();
        let samples = sampler.sample(1_000);
        assert!(samples.iter().all(|sample| (-1024..1024).contains(sample)));
        assert!(samples.iter().any(|sample| *sample < 0));
    }

    #[test]
    fn empty_range() {
        let result = Sampler::with_range(SampleSource::Random, 5, 5);
        assert_eq!(result.unwrap_err(), EmptyRange { low: 5, high: 5 });
    }

    #[test]
    fn zero_samples() {
        let mut sampler = Sampler::residues(SampleSource::Random, Modulus::BYTE);
        assert!(sampler.sample(0).is_empty());
    }
}
