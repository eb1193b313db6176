//! Prime/precision parameter set for p-adic computations
//!
//! Every p-adic value is interpreted relative to a fixed odd prime `p` and
//! a target absolute precision `N`: the value is known modulo p^N.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Pow;

/// Parameter set fixing the prime and working precision.
///
/// # Caller contract
///
/// `p` must be an odd prime. Oddness is checked at construction; primality
/// is **not** verified, and the behavior of every routine in this crate is
/// unspecified for composite `p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadicContext {
    /// The prime p (odd, ≥ 3)
    pub p: BigUint,
    /// Absolute precision N: values are known modulo p^N
    pub prec: i64,
}

impl PadicContext {
    /// Create a new context for Q_p at absolute precision `prec`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is even or < 3 (p = 2 is unsupported), or if
    /// `prec < 1`.
    pub fn new(p: BigUint, prec: i64) -> Self {
        assert!(p.is_odd() && p > BigUint::from(2u32), "p must be an odd prime ≥ 3");
        assert!(prec >= 1, "precision must be at least 1");
        Self { p, prec }
    }

    /// The working modulus p^N.
    pub fn modulus(&self) -> BigUint {
        Pow::pow(&self.p, self.prec as u32)
    }
}

// ============================================================================
// Tests
// ============================================================================
