use num_bigint::BigUint;
use num_iter::range_inclusive;
use num_traits::Zero;

use crate::{
    context::FieldContext,
    error::HasherErr,
    interface::{check_range, RangeHash},
    modular::ModularEngine,
    symbol::Symbol,
};

// reference implementation of the range hashes which doesn't precompute anything:
// every query re-runs Horner's rule over the range in arbitrary precision

pub struct NonRollingHash {
    base: BigUint,
    modulus: BigUint,
    values: Vec<BigUint>,
}

impl NonRollingHash {
    /// Mirrors the base, offset and capacity of `ctx`, so the results are directly
    /// comparable with a table built over the same context.
    pub fn new<E, S>(ctx: &FieldContext<E>, data: &[S]) -> Result<Self, HasherErr>
    where
        E: ModularEngine,
        S: Symbol,
    {
        ctx.check_capacity(data.len())?;
        let offset: u64 = ctx.offset().into();
        let values = data
            .iter()
            .map(|symbol| {
                let residue: u64 = symbol.residue::<E>().into();
                BigUint::from(residue) + offset
            })
            .collect();
        let base: u64 = ctx.base().into();
        let modulus: u64 = E::MODULUS.into();
        Ok(Self {
            base: BigUint::from(base),
            modulus: BigUint::from(modulus),
            values,
        })
    }

    fn build_hash(&self, indices: impl Iterator<Item = usize>) -> u64 {
        let mut hash_value = BigUint::zero();
        for idx in indices {
            // add symbol
            hash_value *= &self.base;
            hash_value += &self.values[idx];
            // mod
            hash_value %= &self.modulus;
        }
        // below the modulus, so a single digit at most
        hash_value.iter_u64_digits().next().unwrap_or(0)
    }
}

impl RangeHash for NonRollingHash {
    type Hash = u64;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get_hash(&self, l: usize, r: usize) -> Result<u64, HasherErr> {
        check_range(l, r, self.len())?;
        Ok(self.build_hash(range_inclusive(l, r)))
    }

    fn rev_hash(&self, l: usize, r: usize) -> Result<u64, HasherErr> {
        check_range(l, r, self.len())?;
        Ok(self.build_hash(range_inclusive(l, r).rev()))
    }
}
