//! The modulus residues are taken against.

use crate::errors::InvalidModulus;
use std::fmt;

/// A strictly positive modulus.
///
/// Reducing any integer against a [Modulus] yields a residue in `[0, n)`. Since the modulus can
/// never be zero or negative, reductions are infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Modulus(i64);

impl Modulus {
    /// The modulus for residues that fit in a byte.
    pub const BYTE: Self = Modulus(256);

    /// Constructs a new modulus, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, InvalidModulus> {
        if value > 0 { Ok(Self(value)) } else { Err(InvalidModulus(value)) }
    }

    /// The modulus as an integer.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Reduces a value into `[0, n)` using floor modulo semantics.
    pub fn reduce(&self, value: i128) -> i128 {
        // The divisor is positive so the euclidean and floor remainders are the same, and
        // `rem_euclid` can't overflow.
        value.rem_euclid(i128::from(self.0))
    }

    /// Checks whether a value is a residue of this modulus.
    pub fn contains(&self, value: i128) -> bool {
        (0..i128::from(self.0)).contains(&value)
    }
}

impl TryFrom<i64> for Modulus {
    type Error = InvalidModulus;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for i64 {
    fn from(modulus: Modulus) -> Self {
        modulus.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
