//! p-adic numbers in (valuation, unit) form
//!
//! A nonzero p-adic number is written uniquely as `unit · p^val` with
//! `p ∤ unit`. Relative to a [`PadicContext`] with precision N, the unit
//! part is only meaningful modulo p^(N - val); a valuation at or beyond
//! the working precision means the value is indistinguishable from zero.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{Pow, Zero};

use super::context::PadicContext;

// ============================================================================
// Valuation
// ============================================================================

/// Compute the p-adic valuation of `n`: the exponent of `p` dividing `n`.
///
/// Returns `None` for n = 0, whose valuation is +∞.
pub fn valuation(n: &BigUint, p: &BigUint) -> Option<u64> {
    if n.is_zero() {
        return None;
    }

    let mut v = 0;
    let mut m = n.clone();
    loop {
        let (q, r) = m.div_rem(p);
        if !r.is_zero() {
            return Some(v);
        }
        m = q;
        v += 1;
    }
}

// ============================================================================
// p-adic Number
// ============================================================================

/// p-adic number `unit · p^val`, known to the precision of a context.
///
/// Invariant (relative to a context with precision N): either the zero
/// element (`unit = 0`), or `p ∤ unit` and `unit < p^(N - val)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadicNumber {
    /// Exponent of p; may be negative (elements of Q_p)
    pub val: i64,
    /// Unit part, reduced modulo p^(N - val)
    pub unit: BigUint,
}

impl PadicNumber {
    /// Create a p-adic number from raw parts. No reduction is performed.
    pub fn new(val: i64, unit: BigUint) -> Self {
        Self { val, unit }
    }

    /// The zero element.
    pub fn zero() -> Self {
        Self {
            val: 0,
            unit: BigUint::zero(),
        }
    }

    /// Whether this value is zero to the context's working precision.
    ///
    /// A value is zero either exactly (zero unit) or because its valuation
    /// is at or beyond the precision, forcing every retained digit to zero.
    pub fn is_zero(&self, ctx: &PadicContext) -> bool {
        self.unit.is_zero() || self.val >= ctx.prec
    }

    /// Decompose a nonnegative integer into (valuation, unit) form,
    /// reducing the unit to the context's precision.
    pub fn from_biguint(n: &BigUint, ctx: &PadicContext) -> Self {
        let v = match valuation(n, &ctx.p) {
            Some(v) => v,
            None => return Self::zero(),
        };
        if v as i64 >= ctx.prec {
            return Self::zero();
        }

        let unit_modulus = Pow::pow(&ctx.p, (ctx.prec - v as i64) as u32);
        let unit = n / Pow::pow(&ctx.p, v as u32) % unit_modulus;
        Self {
            val: v as i64,
            unit,
        }
    }

    /// Reassemble the integer `unit · p^val mod p^N`.
    ///
    /// Returns `None` for negative valuations, which have no integer image.
    pub fn to_biguint(&self, ctx: &PadicContext) -> Option<BigUint> {
        if self.is_zero(ctx) {
            return Some(BigUint::zero());
        }
        if self.val < 0 {
            return None;
        }
        Some(&self.unit * Pow::pow(&ctx.p, self.val as u32) % ctx.modulus())
    }

    /// Generate a uniformly random unit (valuation 0) modulo p^N.
    pub fn random_unit<R: rand::Rng>(rng: &mut R, ctx: &PadicContext) -> Self {
        let modulus = ctx.modulus();
        loop {
            let unit = rng.gen_biguint_below(&modulus);
            if !(&unit % &ctx.p).is_zero() {
                return Self { val: 0, unit };
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
