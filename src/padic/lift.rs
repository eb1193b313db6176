//! Precision ladders and modulus towers for Newton lifting
//!
//! Newton iterations over Z_p double the number of correct digits per
//! step, so a target precision N is reached through the exponent sequence
//! obtained by repeated halving-with-ceiling: 1 = a[0] < a[1] < … <
//! a[k] = N with a[i] = ⌈a[i+1]/2⌉. This module builds that sequence once
//! in increasing-precision order, together with the moduli p^(a[i]) and
//! the operand reduced at every level; the inversion and square-root
//! lifting loops consume all three forward.

use itertools::Itertools;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

// ============================================================================
// Precision Ladder
// ============================================================================

/// Build the ladder of target precisions for lifting to `prec` digits.
///
/// Returns `[1, …, prec]` in increasing order; each element is double or
/// double-minus-one of its predecessor, so one Newton step per level
/// suffices.
pub fn precision_ladder(prec: u64) -> Vec<u64> {
    assert!(prec >= 1, "precision must be at least 1");

    let mut exps = vec![prec];
    while *exps.last().unwrap() > 1 {
        let top = *exps.last().unwrap();
        exps.push((top + 1) / 2);
    }
    exps.reverse();

    debug_assert!(exps
        .iter()
        .tuple_windows()
        .all(|(lo, hi)| *hi == 2 * lo || *hi == 2 * lo - 1));
    exps
}

// ============================================================================
// Modulus Tower
// ============================================================================

/// The moduli p^(a[i]) for every ladder exponent, lowest first.
///
/// Each modulus is derived from its predecessor by the square-or-multiply
/// rule that mirrors the halving branch which produced the exponent, so no
/// power of p is computed more than once.
#[derive(Clone, Debug)]
pub struct ModulusTower {
    exps: Vec<u64>,
    moduli: Vec<BigUint>,
}

impl ModulusTower {
    /// Build the tower for lifting to `prec` digits over the prime `p`.
    pub fn new(p: &BigUint, prec: u64) -> Self {
        let exps = precision_ladder(prec);
        let mut moduli = Vec::with_capacity(exps.len());
        moduli.push(p.clone());

        // w tracks p^(a[i-1] - 1) across iterations
        let mut w = BigUint::one();
        for i in 1..exps.len() {
            let prev = &moduli[i - 1];
            let next = if exps[i].is_odd() {
                // a[i] = 2·a[i-1] - 1
                &w * prev
            } else {
                // a[i] = 2·a[i-1]
                prev * prev
            };
            w = if exps[i].is_odd() { &w * &w } else { &w * prev };
            moduli.push(next);
        }

        Self { exps, moduli }
    }

    /// Number of ladder levels.
    pub fn len(&self) -> usize {
        self.exps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exps.is_empty()
    }

    /// The ladder exponent a[i].
    pub fn exponent(&self, i: usize) -> u64 {
        self.exps[i]
    }

    /// The modulus p^(a[i]).
    pub fn modulus(&self, i: usize) -> &BigUint {
        &self.moduli[i]
    }

    /// The top modulus p^prec.
    pub fn top(&self) -> &BigUint {
        self.moduli.last().unwrap()
    }

    /// Reduce `op` at every level: returns u with u[i] ≡ op (mod p^(a[i])).
    ///
    /// Built from the top modulus downward, so each level is the previous
    /// one reduced further; reducing an already-reduced value is a no-op.
    pub fn reduce(&self, op: &BigUint) -> Vec<BigUint> {
        let len = self.moduli.len();
        let mut units = vec![BigUint::zero(); len];
        units[len - 1] = op % &self.moduli[len - 1];
        for i in (0..len - 1).rev() {
            units[i] = &units[i + 1] % &self.moduli[i];
        }
        units
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Pow;

    fn b(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn test_ladder_endpoints() {
        for prec in 1u64..=100 {
            let ladder = precision_ladder(prec);
            assert_eq!(*ladder.first().unwrap(), 1);
            assert_eq!(*ladder.last().unwrap(), prec);
        }
    }

    #[test]
    fn test_ladder_halving_rule() {
        for prec in 2u64..=100 {
            let ladder = precision_ladder(prec);
            for (lo, hi) in ladder.iter().tuple_windows() {
                assert_eq!(*lo, (hi + 1) / 2, "each level is the ceil-half of the next");
            }
        }
    }

    #[test]
    fn test_ladder_length_is_logarithmic() {
        assert_eq!(precision_ladder(1), vec![1]);
        assert_eq!(precision_ladder(2), vec![1, 2]);
        assert_eq!(precision_ladder(5), vec![1, 2, 3, 5]);
        assert!(precision_ladder(1 << 20).len() <= 21);
    }

    #[test]
    fn test_tower_moduli_are_exact_powers() {
        for prec in [1u64, 2, 3, 7, 20, 33] {
            let tower = ModulusTower::new(&b(5), prec);
            for i in 0..tower.len() {
                let expected = Pow::pow(&b(5), tower.exponent(i) as u32);
                assert_eq!(*tower.modulus(i), expected, "p^a[{i}] for prec={prec}");
            }
            assert_eq!(*tower.top(), Pow::pow(&b(5), prec as u32));
        }
    }

    #[test]
    fn test_reduce_adjacency() {
        // u[i] must be u[i+1] reduced further: u[i] ≡ u[i+1] (mod p^a[i])
        let p = b(7);
        let tower = ModulusTower::new(&p, 23);
        let op = b(123_456_789_012_345_678);
        let units = tower.reduce(&op);

        for i in 0..tower.len() {
            assert_eq!(units[i], &op % tower.modulus(i));
            assert!(units[i] < *tower.modulus(i));
        }
        for i in 0..tower.len() - 1 {
            assert_eq!(units[i], &units[i + 1] % tower.modulus(i));
        }
    }

    #[test]
    fn test_reduce_idempotent() {
        let tower = ModulusTower::new(&b(3), 10);
        let op = b(48_427);
        let units = tower.reduce(&op);
        for (i, u) in units.iter().enumerate() {
            assert_eq!(*u, u % tower.modulus(i), "already-reduced value is fixed");
        }
    }
}
