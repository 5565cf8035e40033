//! Crate errors.

use thiserror::Error;

/// Division by zero.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("division by zero")]
pub struct DivByZero;

/// A modulus that is not strictly positive.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("modulus must be positive, got {0}")]
pub struct InvalidModulus(pub i64);
