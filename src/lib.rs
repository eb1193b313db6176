//! # Hensel
//!
//! Arbitrary-precision p-adic arithmetic, including:
//!
//! - **Residue arithmetic**: Legendre symbols and square roots modulo an
//!   odd prime, over `num-bigint` integers
//! - **p-adic numbers**: the (valuation, unit) representation relative to
//!   a fixed odd prime and working precision
//! - **Newton lifting**: inverses and square roots modulo p^N in
//!   O(log N) digit-doubling steps
//!
//! ## Modules
//!
//! - [`arith`]: modular arithmetic building blocks
//! - [`padic`]: p-adic numbers, inversion, and square roots
//!
//! ## Example
//!
//! ```
//! use hensel::{PadicContext, PadicNumber, sqrt};
//! use num_bigint::BigUint;
//!
//! // 4·5² is a square in Z_5; its root is 2·5¹
//! let ctx = PadicContext::new(BigUint::from(5u32), 3);
//! let op = PadicNumber::new(2, BigUint::from(4u32));
//! let root = sqrt(&op, &ctx).unwrap();
//! assert_eq!(root.val, 1);
//! assert_eq!(root.unit, BigUint::from(2u32));
//! ```

pub mod arith;
pub mod padic;

// Re-export commonly used types
pub use arith::{legendre, sqrt_mod};
pub use padic::{inv, sqrt, unit_inv, unit_sqrt, PadicContext, PadicNumber};
