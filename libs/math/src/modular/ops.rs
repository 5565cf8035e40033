//! Modular integer operations

use crate::errors::DivByZero;
use num_bigint::BigInt;
use num_traits::Zero;

/// Donald Knuth promotes floored division, for which the quotient is defined by q = floor(a / n)
/// where floor function rounds down to the nearest integer. Thus according to this equation, the
/// remainder has the same sign as the divisor n: r = a - n * floor(a / n).
pub trait FloorMod {
    /// Floor modulo output.
    type Output;

    /// Floor modulo.
    fn fmod(self, rhs: Self) -> Self::Output;
}

// Rust's `%` is a truncated modulo so the remainder is corrected whenever its sign differs from
// the divisor's.
macro_rules! impl_floor_mod {
    ($type:ty) => {
        impl FloorMod for $type {
            type Output = Result<$type, DivByZero>;

            fn fmod(self, divisor: Self) -> Self::Output {
                if divisor == 0 {
                    return Err(DivByZero);
                }
                // `MIN % -1` overflows even though the remainder is zero.
                let rem = self.checked_rem(divisor).unwrap_or(0);
                if (rem > 0 && divisor < 0) || (rem < 0 && divisor > 0) {
                    // Operands have opposite signs here so this can't overflow.
                    Ok(rem + divisor)
                } else {
                    Ok(rem)
                }
            }
        }
    };
}

impl_floor_mod!(i64);
impl_floor_mod!(i128);

impl FloorMod for &BigInt {
    type Output = Result<BigInt, DivByZero>;

    /// Floor mod over arbitrarily large signed integers.
    fn fmod(self, divisor: Self) -> Self::Output {
        let zero = BigInt::zero();
        if divisor == &zero {
            return Err(DivByZero);
        }
        let mut rem = self % divisor;
        if (rem > zero && divisor < &zero) || (rem < zero && divisor > &zero) {
            // Remainder and divisor have different signs, so truncated mod and floor mod differ.
            // Add the divisor so we get the floor value instead of the truncated modulo.
            rem += divisor;
        }
        Ok(rem)
    }
}
