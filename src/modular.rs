use std::{fmt::Debug, hash::Hash};

use num_traits::{One, PrimInt};

// 2^61 - 1, a Mersenne prime
pub const MERSENNE_61: u64 = (1 << 61) - 1;
// fits in 30 bits, so a product of two elements fits in a u64
pub const PRIME_998: u32 = 998_244_353;

const LOW_32: u64 = u32::MAX as u64;

/// Arithmetic over a fixed prime field.
///
/// Every method takes fully reduced elements (in `[0, MODULUS)`) and returns a fully
/// reduced element. The engines are zero-sized: the modulus is part of the type.
pub trait ModularEngine: Copy + Clone + Debug + Default + Send + Sync + 'static {
    type Element: PrimInt + Hash + Debug + Into<u64> + Send + Sync + 'static;

    const MODULUS: Self::Element;

    /**
     * Need to Implement
     */

    fn mod_mul(a: Self::Element, b: Self::Element) -> Self::Element;

    /// Reduce an arbitrary unsigned value into the field.
    fn mod_of_u64(a: u64) -> Self::Element;

    /// Reduce an arbitrary signed value into the field, negatives wrapping around.
    fn mod_of_i64(a: i64) -> Self::Element;

    /**
     * Provided
     */

    // a + b < 2 * MODULUS, which fits in Element for both engines
    fn mod_add(a: Self::Element, b: Self::Element) -> Self::Element {
        let sum = a + b;
        if sum >= Self::MODULUS {
            sum - Self::MODULUS
        } else {
            sum
        }
    }

    fn mod_sub(a: Self::Element, b: Self::Element) -> Self::Element {
        if a >= b {
            a - b
        } else {
            // a < b, so a + (MODULUS - b) < MODULUS
            a + (Self::MODULUS - b)
        }
    }

    fn mod_pow(mut base: Self::Element, mut exp: u64) -> Self::Element {
        let mut result = Self::Element::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = Self::mod_mul(result, base);
            }
            exp >>= 1;
            base = Self::mod_mul(base, base);
        }
        result
    }
}

/// Field of integers modulo `2^61 - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mersenne61;

#[inline]
fn fold_61(x: u64) -> u64 {
    // 2^61 = 1 (mod 2^61 - 1)
    (x & MERSENNE_61) + (x >> 61)
}

impl ModularEngine for Mersenne61 {
    type Element = u64;

    const MODULUS: u64 = MERSENNE_61;

    /// Multiplies without any 128-bit intermediate.
    ///
    /// Each operand is split into 32-bit halves. The partial products are folded with
    /// `2^64 = 8` and `2^61 = 1`, keeping the accumulator below `2^63`. The accumulator
    /// carries a `+1` bias through the two folds so a residue of `MODULUS - 1` comes out
    /// as `MODULUS` instead of wrapping to zero; the bias is removed at the end.
    #[inline]
    fn mod_mul(a: u64, b: u64) -> u64 {
        debug_assert!(a < MERSENNE_61 && b < MERSENNE_61);

        let (a_lo, a_hi) = (a & LOW_32, a >> 32);
        let (b_lo, b_hi) = (b & LOW_32, b >> 32);

        let low = a_lo * b_lo; // < 2^64
        let mid = a_lo * b_hi + b_lo * a_hi; // < 2^62
        let high = a_hi * b_hi; // < 2^58

        // mid * 2^32 = (mid >> 29) * 2^61 + (mid mod 2^29) * 2^32
        let acc = (low & MERSENNE_61)
            + (low >> 61)
            + (high << 3)
            + (mid >> 29)
            + (mid << 35 >> 3)
            + 1;
        let acc = fold_61(fold_61(acc));

        debug_assert!(acc >= 1 && acc <= MERSENNE_61);
        acc - 1
    }

    #[inline]
    fn mod_of_u64(a: u64) -> u64 {
        let folded = fold_61(a); // <= MODULUS + 7
        if folded >= MERSENNE_61 {
            folded - MERSENNE_61
        } else {
            folded
        }
    }

    #[inline]
    fn mod_of_i64(a: i64) -> u64 {
        a.rem_euclid(MERSENNE_61 as i64) as u64
    }
}

/// Field of integers modulo `998244353`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prime998;

impl ModularEngine for Prime998 {
    type Element = u32;

    const MODULUS: u32 = PRIME_998;

    #[inline]
    fn mod_mul(a: u32, b: u32) -> u32 {
        (a as u64 * b as u64 % PRIME_998 as u64) as u32
    }

    #[inline]
    fn mod_of_u64(a: u64) -> u32 {
        (a % PRIME_998 as u64) as u32
    }

    #[inline]
    fn mod_of_i64(a: i64) -> u32 {
        a.rem_euclid(PRIME_998 as i64) as u32
    }
}
