//! A single randomized trial.
//!
//! A trial draws two vectors of samples `x` and `y` and computes, element by element,
//! `sep = ((x mod n) - (y mod n)) mod n` and `fac = (x - y) mod n`. It passes when `fac - sep` is
//! zero everywhere.

use crate::sampler::{SampleSource, Sampler};
use math_lib::modular::{FloorMod, Modulus};

/// The number of sample pairs a trial draws by default.
pub const DEFAULT_SAMPLES_PER_TRIAL: usize = 1000;

/// Reduces an integer against a modulus.
pub trait Reducer {
    /// Reduce `value` modulo `modulus`.
    fn reduce(&self, value: i128, modulus: Modulus) -> i128;
}

/// A reducer with floor semantics: residues are always in `[0, n)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloorReducer;

impl Reducer for FloorReducer {
    fn reduce(&self, value: i128, modulus: Modulus) -> i128 {
        // A modulus is never zero so this never falls back to the default.
        value.fmod(i128::from(modulus.value())).unwrap_or_default()
    }
}

/// The first sample pair for which both sides of the identity differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// The index of the pair within the trial.
    pub index: usize,

    /// The `x` sample.
    pub x: i64,

    /// The `y` sample.
    pub y: i64,

    /// `((x mod n) - (y mod n)) mod n`.
    pub separate: i128,

    /// `(x - y) mod n`.
    pub factored: i128,
}

/// The outcome of a trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialReport {
    /// The number of sample pairs checked.
    pub samples: usize,

    /// The number of pairs for which both sides differ.
    pub mismatches: usize,

    /// The first mismatching pair, if any.
    pub first_mismatch: Option<Mismatch>,
}

impl TrialReport {
    /// Whether every pair satisfied the identity.
    pub fn passed(&self) -> bool {
        self.mismatches == 0
    }
}

/// Runs trials over a fixed modulus.
pub struct TrialRunner<R = FloorReducer> {
    sampler: Sampler,
    reducer: R,
    modulus: Modulus,
}

impl TrialRunner<FloorReducer> {
    /// Creates a runner over [Modulus::BYTE] that reduces with floor semantics.
    pub fn new(source: SampleSource) -> Self {
        let modulus = Modulus::BYTE;
        Self::with_reducer(Sampler::residues(source, modulus), FloorReducer)
    }
}

impl<R: Reducer> TrialRunner<R> {
    /// Creates a runner with a custom sampler and reducer.
    pub fn with_reducer(sampler: Sampler, reducer: R) -> Self {
        Self { sampler, reducer, modulus: Modulus::BYTE }
    }

    /// The modulus residues are taken against.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Runs a trial over `nb_tests` sample pairs and returns whether it passed.
    pub fn run(&mut self, nb_tests: usize) -> bool {
        self.evaluate(nb_tests).passed()
    }

    /// Runs a trial over `nb_tests` sample pairs.
    pub fn evaluate(&mut self, nb_tests: usize) -> TrialReport {
        let x_rand = self.sampler.sample(nb_tests);
        let y_rand = self.sampler.sample(nb_tests);

        let reduce = |value: i128| self.reducer.reduce(value, self.modulus);
        let sep: Vec<i128> = x_rand
            .iter()
            .zip(&y_rand)
            .map(|(&x, &y)| reduce(reduce(i128::from(x)) - reduce(i128::from(y))))
            .collect();
        let fac: Vec<i128> = x_rand.iter().zip(&y_rand).map(|(&x, &y)| reduce(i128::from(x) - i128::from(y))).collect();
        let diff: Vec<i128> = fac.iter().zip(&sep).map(|(factored, separate)| factored - separate).collect();

        let mut mismatches = 0;
        let mut first_mismatch = None;
        let pairs = x_rand.iter().zip(&y_rand);
        let sides = sep.iter().zip(&fac);
        for (index, (((&x, &y), (&separate, &factored)), difference)) in pairs.zip(sides).zip(&diff).enumerate() {
            if *difference != 0 {
                mismatches += 1;
                first_mismatch.get_or_insert(Mismatch { index, x, y, separate, factored });
            }
        }
        TrialReport { samples: diff.len(), mismatches, first_mismatch }
    }
}

/// Runs a single trial over `nb_tests` pairs drawn from the thread local generator.
pub fn run(nb_tests: usize) -> bool {
    TrialRunner::new(SampleSource::Random).run(nb_tests)
}
