//! Modular integers and their operations

pub mod modulos;
pub mod ops;
pub mod sub;

pub use modulos::*;
pub use ops::*;
pub use sub::*;
