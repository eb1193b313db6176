//! p-adic inversion by Newton lifting
//!
//! The reciprocal of a unit is lifted digit-doubling-wise from its value
//! modulo p: given z with u·z ≡ 1 (mod p^a), one step of
//! z ← z·(2 − u·z) is correct modulo p^2a. Walking the precision ladder
//! from 1 up to N therefore costs O(log N) steps of bignum work.

use num_bigint::BigUint;
use num_traits::Zero;

use super::context::PadicContext;
use super::lift::ModulusTower;
use super::number::PadicNumber;

/// Compute the inverse of a unit modulo p^prec.
///
/// Assumes `p` is an odd prime (caller contract, not verified).
///
/// # Panics
///
/// Panics if `op` is not a unit modulo `p` (debug builds assert this
/// up front; release builds fail at the base-case inversion).
pub fn unit_inv(op: &BigUint, p: &BigUint, prec: u64) -> BigUint {
    debug_assert!(!(op % p).is_zero(), "operand must be a unit");

    if prec == 1 {
        return (op % p).modinv(p).expect("a unit is invertible mod p");
    }

    let tower = ModulusTower::new(p, prec);
    let units = tower.reduce(op);

    let mut z = units[0].modinv(p).expect("a unit is invertible mod p");
    for i in 1..tower.len() {
        let m = tower.modulus(i);
        // z ← z·(2 − u·z), the Newton step for the reciprocal
        let t = &units[i] * &z % m;
        let lift = (BigUint::from(2u32) + m - t) % m;
        z = z * lift % m;
    }
    z
}

/// Compute the p-adic inverse of `op`, or `None` if `op` is zero.
///
/// The result has valuation `-op.val` and its unit part is the inverse of
/// `op`'s unit part at the correspondingly adjusted precision.
///
/// # Panics
///
/// Panics if the adjusted precision `prec + op.val` is not positive,
/// i.e. if the inverse retains no digits at the working precision.
pub fn inv(op: &PadicNumber, ctx: &PadicContext) -> Option<PadicNumber> {
    if op.is_zero(ctx) {
        return None;
    }

    let val = -op.val;
    let prec = ctx.prec - val;
    assert!(prec >= 1, "inverse retains no digits at this precision");

    Some(PadicNumber::new(
        val,
        unit_inv(&op.unit, &ctx.p, prec as u64),
    ))
}

// ============================================================================
// Tests
// ============================================================================
