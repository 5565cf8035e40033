//! Modular subtraction.
//!
//! Subtraction commutes with reduction: for any integers `a`, `b` and any positive `n`,
//! `((a mod n) - (b mod n)) mod n == (a - b) mod n` as long as `mod` follows floor semantics. The
//! two functions below compute each side of that equality.

use super::Modulus;

/// Reduces both operands, subtracts them and reduces the difference.
///
/// This is `((a mod n) - (b mod n)) mod n`.
pub fn residue_difference(a: i64, b: i64, modulus: Modulus) -> i128 {
    let a = modulus.reduce(i128::from(a));
    let b = modulus.reduce(i128::from(b));
    modulus.reduce(a - b)
}

/// Subtracts both operands and reduces the difference.
///
/// This is `(a - b) mod n`. The difference is computed in `i128` so it never overflows.
pub fn difference_residue(a: i64, b: i64, modulus: Modulus) -> i128 {
    modulus.reduce(i128::from(a) - i128::from(b))
}
