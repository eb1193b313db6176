//! p-adic square roots via Hensel lifting
//!
//! # Algorithm
//!
//! A square root of a unit u modulo p^N is obtained by lifting its
//! *reciprocal* square root: Newton's method for 1/√u,
//!
//! > z ← z − z·(u·z² − 1)/2,
//!
//! doubles the number of correct p-adic digits per step and needs no
//! division except an exact halving. One modular square root modulo p
//! anchors the iteration at a single digit; the precision ladder of
//! [`lift`](super::lift) then walks up to N, and a final inversion turns
//! the reciprocal root into the root itself.
//!
//! A general p-adic number u·p^v has a square root iff v is even and u is
//! a quadratic residue; the dispatcher [`sqrt`] handles the valuation and
//! delegates the unit part to [`unit_sqrt`].
//!
//! # References
//!
//! - Cohen, *A Course in Computational Algebraic Number Theory*, §1.5
//! - [Square roots in finite fields](https://eprint.iacr.org/2012/685.pdf)

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::arith::modular::sqrt_mod;

use super::context::PadicContext;
use super::inv::unit_inv;
use super::lift::ModulusTower;
use super::number::PadicNumber;

// ============================================================================
// Unit Square Root
// ============================================================================

/// Pick the canonical representative among a root and its negation.
///
/// Of the two square roots {r, m − r} modulo m, the one in [0, m/2] is
/// returned.
fn canonical(root: BigUint, modulus: &BigUint) -> BigUint {
    if &root + &root > *modulus {
        modulus - root
    } else {
        root
    }
}

/// Compute a square root of a unit modulo p^prec, if one exists.
///
/// Returns the representative in [0, p^prec/2]; the other root is its
/// negation modulo p^prec. Returns `None` iff `op` is a quadratic
/// non-residue modulo p, a definitive mathematical fact decided once at
/// the single-digit anchor.
///
/// Assumes `p` is an odd prime and `op` is a unit modulo p (caller
/// contract, asserted in debug builds only).
pub fn unit_sqrt(op: &BigUint, p: &BigUint, prec: u64) -> Option<BigUint> {
    debug_assert!(!(op % p).is_zero(), "operand must be a unit");

    if prec == 1 {
        let root = sqrt_mod(&(op % p), p)?;
        return Some(canonical(root, p));
    }

    let tower = ModulusTower::new(p, prec);
    let units = tower.reduce(op);

    // Anchor: one correct digit, from the modular square root. A unit's
    // root is a unit, so the reciprocal below exists.
    let root = sqrt_mod(&units[0], p)?;
    debug_assert!(!root.is_zero(), "square root of a unit is a unit");
    let mut z = root.modinv(p).expect("a unit is invertible mod p");

    // Lift the reciprocal square root up the ladder. Entering level i,
    // z²·u[i-1] ≡ 1 (mod p^a[i-1]); one step makes that hold at level i.
    for i in 1..tower.len() {
        let m = tower.modulus(i);

        let z_sq = &z * &z;
        let mut residual = &units[i] * z_sq - 1u32;
        // u·z² − 1 must be halved exactly; m is odd, so adding it
        // restores evenness without leaving the residue class
        if residual.is_odd() {
            residual += m;
        }
        let half_residual = residual >> 1u32;

        let correction = &z * half_residual % m;
        z = (&z + (m - correction)) % m;
    }

    // z is now the reciprocal square root modulo p^prec
    Some(canonical(unit_inv(&z, p, prec), tower.top()))
}

// ============================================================================
// Valuation Dispatcher
// ============================================================================

/// Compute a p-adic square root of `op`, or `None` if none exists.
///
/// - zero has the square root zero at every precision;
/// - an odd valuation admits no square root in Q_p;
/// - otherwise the result has valuation `op.val / 2` and its unit part is
///   a root of `op`'s unit part at precision `N − op.val/2`, canonical
///   representative as in [`unit_sqrt`].
///
/// Failure is definitive (the operand is a non-residue), never transient.
pub fn sqrt(op: &PadicNumber, ctx: &PadicContext) -> Option<PadicNumber> {
    if op.is_zero(ctx) {
        return Some(PadicNumber::zero());
    }

    if op.val % 2 != 0 {
        return None;
    }
    let val = op.val / 2;

    let unit = unit_sqrt(&op.unit, &ctx.p, (ctx.prec - val) as u64)?;
    Some(PadicNumber::new(val, unit))
}

// ============================================================================
// Tests
// ============================================================================
