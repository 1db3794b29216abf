use crate::{
    context::{NarrowContext, DEFAULT_NARROW_BASE},
    error::HasherErr,
    interface::RangeHash,
    modular::Prime998,
    rolling_hash::RollingHash,
    symbol::Symbol,
};

/// Rolling hash over 998244353 with a base fixed at compile time.
///
/// Faster and smaller than [`crate::wide::WideHasher`], but the fixed base and ~30-bit
/// field make it unsuitable for adversarial input.
#[derive(Clone, Debug)]
pub struct NarrowHasher<'ctx, const BASE: u32 = DEFAULT_NARROW_BASE> {
    table: RollingHash<'ctx, Prime998>,
}

impl<'ctx, const BASE: u32> NarrowHasher<'ctx, BASE> {
    pub fn new<S: Symbol>(ctx: &'ctx NarrowContext<BASE>, data: &[S]) -> Result<Self, HasherErr> {
        RollingHash::new(ctx.field(), data).map(|table| Self { table })
    }

    pub fn from_text(ctx: &'ctx NarrowContext<BASE>, text: &str) -> Result<Self, HasherErr> {
        RollingHash::from_text(ctx.field(), text).map(|table| Self { table })
    }

    pub fn from_symbols<I>(ctx: &'ctx NarrowContext<BASE>, symbols: I) -> Result<Self, HasherErr>
    where
        I: IntoIterator,
        I::Item: Symbol,
    {
        RollingHash::from_symbols(ctx.field(), symbols).map(|table| Self { table })
    }

    pub const fn base() -> u32 {
        BASE
    }
}

impl<const BASE: u32> RangeHash for NarrowHasher<'_, BASE> {
    type Hash = u32;

    fn len(&self) -> usize {
        self.table.len()
    }

    fn get_hash(&self, l: usize, r: usize) -> Result<u32, HasherErr> {
        self.table.get_hash(l, r)
    }

    fn rev_hash(&self, l: usize, r: usize) -> Result<u32, HasherErr> {
        self.table.rev_hash(l, r)
    }
}
