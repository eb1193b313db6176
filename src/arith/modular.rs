//! Square roots and quadratic residues modulo an odd prime
//!
//! Arithmetic is over [`BigUint`], so these routines work for primes of any
//! size. Exponentiation and inversion are delegated to `num-bigint`
//! (`modpow`, `modinv`); this module only adds the residue logic on top.
//!
//! # Contents
//!
//! - [`legendre`]: Legendre symbol via Euler's criterion
//! - [`sqrt_mod`]: square root modulo an odd prime (Tonelli–Shanks)
//!
//! # References
//!
//! - [Square roots in finite fields](https://eprint.iacr.org/2012/685.pdf)
//! - Cohen, *A Course in Computational Algebraic Number Theory*, §1.5

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

// ============================================================================
// Legendre Symbol
// ============================================================================

/// Compute the Legendre symbol (a/p) for an odd prime p.
///
/// Uses Euler's criterion: a^((p-1)/2) ≡ (a/p) (mod p).
/// Returns 0 if p | a, 1 if a is a quadratic residue, -1 otherwise.
pub fn legendre(a: &BigUint, p: &BigUint) -> i8 {
    let exp = (p - BigUint::one()) >> 1u32;
    let symbol = a.modpow(&exp, p);
    if symbol.is_zero() {
        0
    } else if symbol.is_one() {
        1
    } else {
        -1
    }
}

// ============================================================================
// Square Roots mod p
// ============================================================================

/// Compute a square root of `a` modulo an odd prime `p`, if one exists.
///
/// Returns `Some(r)` with r² ≡ a (mod p), or `None` if `a` is a quadratic
/// non-residue. Which of the two roots {r, p - r} is returned is
/// unspecified; callers that need a canonical representative must
/// normalize themselves.
///
/// For p ≡ 3 (mod 4) the root is a single exponentiation a^((p+1)/4).
/// For p ≡ 1 (mod 4) the general Tonelli–Shanks algorithm is used, with a
/// deterministic scan for the required non-residue.
///
/// Assumes `p` is an odd prime; primality is not verified.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();
    let a = a % p;

    if a.is_zero() {
        return Some(BigUint::zero());
    }
    if legendre(&a, p) != 1 {
        return None;
    }

    // p ≡ 3 (mod 4): a^((p+1)/4) squares to a^((p+1)/2) = a·(a/p) = a
    if (p % 4u32) == BigUint::from(3u32) {
        let exp = (p + &one) >> 2u32;
        return Some(a.modpow(&exp, p));
    }

    // Tonelli–Shanks. Factor p - 1 = q·2^s with q odd.
    let mut q = p - &one;
    let mut s = 0u64;
    while q.is_even() {
        q >>= 1u32;
        s += 1;
    }

    // Any non-residue works; scan small candidates deterministically
    let mut n = BigUint::from(2u32);
    while legendre(&n, p) != -1 {
        n += 1u32;
    }

    let mut c = n.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + &one) >> 1u32), p);
    let mut m = s;

    // Invariants: r² ≡ a·t (mod p), ord(t) | 2^(m-1), ord(c) = 2^m
    while !t.is_one() {
        let mut i = 0u64;
        let mut t_pow = t.clone();
        while !t_pow.is_one() {
            t_pow = &t_pow * &t_pow % p;
            i += 1;
        }

        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        r = r * &b % p;
        c = &b * &b % p;
        t = t * &c % p;
        m = i;
    }

    Some(r)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::RandBigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn b(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn test_legendre_small() {
        let p = b(13);
        // squares mod 13: 1, 4, 9, 3, 12, 10
        for r in [1u64, 3, 4, 9, 10, 12] {
            assert_eq!(legendre(&b(r), &p), 1, "{r} is a residue mod 13");
        }
        for n in [2u64, 5, 6, 7, 8, 11] {
            assert_eq!(legendre(&b(n), &p), -1, "{n} is a non-residue mod 13");
        }
        assert_eq!(legendre(&b(0), &p), 0);
        assert_eq!(legendre(&b(13), &p), 0);
    }

    #[test]
    fn test_legendre_residue_count() {
        // Exactly (p-1)/2 residues among 1..p
        let p = b(17);
        let count = (1u64..17)
            .filter(|&a| legendre(&b(a), &p) == 1)
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_sqrt_mod_exhaustive_p13() {
        // p ≡ 1 (mod 4), exercises the full Tonelli–Shanks path
        let p = b(13);
        for a in 1u64..13 {
            match sqrt_mod(&b(a), &p) {
                Some(r) => {
                    assert_eq!(legendre(&b(a), &p), 1);
                    assert_eq!(&r * &r % &p, b(a), "root of {a} mod 13");
                }
                None => assert_eq!(legendre(&b(a), &p), -1),
            }
        }
    }

    #[test]
    fn test_sqrt_mod_exhaustive_p7() {
        // p ≡ 3 (mod 4), exercises the exponentiation shortcut
        let p = b(7);
        for a in 1u64..7 {
            match sqrt_mod(&b(a), &p) {
                Some(r) => assert_eq!(&r * &r % &p, b(a)),
                None => assert_eq!(legendre(&b(a), &p), -1),
            }
        }
    }

    #[test]
    fn test_sqrt_mod_zero() {
        assert_eq!(sqrt_mod(&b(0), &b(11)), Some(b(0)));
        assert_eq!(sqrt_mod(&b(22), &b(11)), Some(b(0)));
    }

    #[test]
    fn test_sqrt_mod_nonresidue() {
        // 2 is a non-residue mod 5
        assert_eq!(sqrt_mod(&b(2), &b(5)), None);
    }

    #[test]
    fn test_sqrt_mod_large_prime() {
        // Mersenne prime 2^61 - 1 (≡ 3 mod 4)
        let p = b((1u64 << 61) - 1);
        let mut rng = test_rng();
        for _ in 0..20 {
            let x = rng.gen_biguint_below(&p);
            let a = &x * &x % &p;
            let r = sqrt_mod(&a, &p).expect("a is a square by construction");
            assert_eq!(&r * &r % &p, a);
            assert!(r == x || &r + &x == p, "root must be ±x");
        }
    }

    #[test]
    fn test_sqrt_mod_large_prime_1_mod_4() {
        // 2^31 - 2^27 + 1, the proth-like prime 2013265921 (≡ 1 mod 4)
        let p = b(2_013_265_921);
        let mut rng = test_rng();
        for _ in 0..20 {
            let x = rng.gen_biguint_below(&p);
            let a = &x * &x % &p;
            let r = sqrt_mod(&a, &p).expect("a is a square by construction");
            assert_eq!(&r * &r % &p, a);
        }
    }
}
