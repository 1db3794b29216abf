use std::sync::OnceLock;

use lazy_static::lazy_static;
use num_traits::One;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::HasherErr,
    modular::{Mersenne61, ModularEngine, Prime998, MERSENNE_61},
};

// sequences must be strictly shorter than this
pub const DEFAULT_MAX_LEN: usize = 1_000_010;
// largest accepted max_len; the power table holds max_len elements
pub const MAX_CAPACITY: usize = 1 << 26;
// added to every symbol so runs of zeros of different lengths hash differently
pub const WIDE_OFFSET: u64 = 997;
pub const NARROW_OFFSET: u64 = 0;
// prime & works well for ascii
pub const DEFAULT_NARROW_BASE: u32 = 257;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    max_len: usize,
    seed: Option<u64>,
    offset: Option<u64>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            seed: None,
            offset: None,
        }
    }
}

impl ContextConfig {
    /// `seed` only matters for the wide variant; `None` draws the base from OS entropy.
    /// `offset` of `None` picks the variant's default (`WIDE_OFFSET` or `NARROW_OFFSET`).
    /// `max_len` must lie in `1..=MAX_CAPACITY`.
    pub fn new(max_len: usize, seed: Option<u64>, offset: Option<u64>) -> Result<Self, HasherErr> {
        if max_len == 0 {
            return Err(HasherErr::InvalidConfig("max_len must be positive"));
        }
        if max_len > MAX_CAPACITY {
            return Err(HasherErr::InvalidConfig("max_len exceeds MAX_CAPACITY"));
        }

        Ok(Self {
            max_len,
            seed,
            offset,
        })
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_max_len(max_len: usize) -> Result<Self, HasherErr> {
        Self::new(max_len, None, None)
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }
}

/// Immutable parameters shared by every hasher built over one field: the base, the
/// per-symbol offset, the capacity, and the power table `base^i` for `i < max_len`.
///
/// The power table is built on first use, exactly once, even when several threads race
/// for it.
#[derive(Debug)]
pub struct FieldContext<E: ModularEngine> {
    base: E::Element,
    offset: E::Element,
    max_len: usize,
    powers: OnceLock<Vec<E::Element>>,
}

impl<E: ModularEngine> FieldContext<E> {
    pub(crate) fn from_config(
        base: E::Element,
        config: &ContextConfig,
        default_offset: u64,
    ) -> Result<Self, HasherErr> {
        if base <= E::Element::one() {
            return Err(HasherErr::InvalidBase("base must be at least 2"));
        }
        if base >= E::MODULUS {
            return Err(HasherErr::InvalidBase("base must be below the modulus"));
        }

        Ok(Self {
            base,
            offset: E::mod_of_u64(config.offset().unwrap_or(default_offset)),
            max_len: config.max_len(),
            powers: OnceLock::new(),
        })
    }

    pub fn base(&self) -> E::Element {
        self.base
    }

    pub fn offset(&self) -> E::Element {
        self.offset
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// `powers()[i] == base^i`, for `i` in `0..max_len`.
    pub fn powers(&self) -> &[E::Element] {
        self.powers.get_or_init(|| {
            let mut powers = Vec::with_capacity(self.max_len);
            let mut current = E::Element::one();
            for _ in 0..self.max_len {
                powers.push(current);
                current = E::mod_mul(current, self.base);
            }
            powers
        })
    }

    pub fn check_capacity(&self, len: usize) -> Result<(), HasherErr> {
        if len >= self.max_len {
            return Err(HasherErr::CapacityExceeded {
                len,
                max_len: self.max_len,
            });
        }
        Ok(())
    }
}

pub type WideContext = FieldContext<Mersenne61>;

lazy_static! {
    static ref GLOBAL_WIDE: WideContext = WideContext::new(&ContextConfig::default());
}

impl FieldContext<Mersenne61> {
    /// Draws a fresh base from the config's seed, or from OS entropy when unseeded.
    pub fn new(config: &ContextConfig) -> Self {
        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_rng(&mut rng, config)
    }

    pub fn from_rng<R: Rng>(rng: &mut R, config: &ContextConfig) -> Self {
        // middle third of the field, away from small bases an adversary could target
        let third = MERSENNE_61 / 3;
        let base = rng.gen_range(third..2 * third);

        Self {
            base,
            offset: Mersenne61::mod_of_u64(config.offset().unwrap_or(WIDE_OFFSET)),
            max_len: config.max_len(),
            powers: OnceLock::new(),
        }
    }

    /// Process-wide context with the default config, created on first use.
    pub fn global() -> &'static Self {
        &GLOBAL_WIDE
    }
}

/// Narrow-field context whose base is fixed at compile time.
///
/// Tying the base to the type keeps a `NarrowHasher<BASE>` from ever being paired with a
/// table built for a different base.
#[derive(Debug)]
pub struct NarrowContext<const BASE: u32 = DEFAULT_NARROW_BASE> {
    field: FieldContext<Prime998>,
}

impl<const BASE: u32> NarrowContext<BASE> {
    pub fn new(config: &ContextConfig) -> Result<Self, HasherErr> {
        let field = FieldContext::from_config(BASE, config, NARROW_OFFSET)?;
        Ok(Self { field })
    }

    pub fn field(&self) -> &FieldContext<Prime998> {
        &self.field
    }
}
