//! Empirical probe for the modular subtraction identity `((x mod n) - (y mod n)) mod n == (x - y) mod n`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]

pub mod config;
pub mod driver;
pub mod sampler;
pub mod trial;
