//! Residue arithmetic over arbitrary-precision integers
//!
//! This module provides the modular building blocks used by the p-adic
//! routines: Legendre symbols and square roots modulo an odd prime.

pub mod modular;

pub use modular::{legendre, sqrt_mod};
