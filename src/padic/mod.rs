//! p-adic numbers and their arithmetic
//!
//! A p-adic number is `unit · p^val` for a fixed odd prime p, known to a
//! finite absolute precision N (i.e. modulo p^N). This module provides
//! the representation and the Newton-lifted operations on it.
//!
//! # Contents
//!
//! - [`context`]: the (prime, precision) parameter set
//! - [`number`]: the (valuation, unit) representation
//! - [`lift`]: precision ladders and modulus towers shared by the lifters
//! - [`inv`](mod@inv): inversion by Newton lifting
//! - [`sqrt`](mod@sqrt): square roots by Hensel lifting

pub mod context;
pub mod inv;
pub mod lift;
pub mod number;
pub mod sqrt;

pub use context::PadicContext;
pub use inv::{inv, unit_inv};
pub use lift::{precision_ladder, ModulusTower};
pub use number::{valuation, PadicNumber};
pub use sqrt::{sqrt, unit_sqrt};
