use crate::{
    context::WideContext,
    error::HasherErr,
    interface::RangeHash,
    modular::Mersenne61,
    rolling_hash::RollingHash,
    symbol::Symbol,
};

/// Rolling hash over `2^61 - 1` with a randomized base.
///
/// Collisions between distinct ranges of equal length happen with probability about
/// `n / 2^61` per comparison.
#[derive(Clone, Debug)]
pub struct WideHasher<'ctx> {
    table: RollingHash<'ctx, Mersenne61>,
}

impl<'ctx> WideHasher<'ctx> {
    pub fn new<S: Symbol>(ctx: &'ctx WideContext, data: &[S]) -> Result<Self, HasherErr> {
        RollingHash::new(ctx, data).map(|table| Self { table })
    }

    /// Hashes the characters (not the bytes) of `text`.
    pub fn from_text(ctx: &'ctx WideContext, text: &str) -> Result<Self, HasherErr> {
        RollingHash::from_text(ctx, text).map(|table| Self { table })
    }

    pub fn from_symbols<I>(ctx: &'ctx WideContext, symbols: I) -> Result<Self, HasherErr>
    where
        I: IntoIterator,
        I::Item: Symbol,
    {
        RollingHash::from_symbols(ctx, symbols).map(|table| Self { table })
    }

    pub fn context(&self) -> &'ctx WideContext {
        self.table.context()
    }
}

impl WideHasher<'static> {
    /// Builds over the process-wide context, whose base is drawn once per process.
    pub fn build<S: Symbol>(data: &[S]) -> Result<Self, HasherErr> {
        Self::new(WideContext::global(), data)
    }

    pub fn build_text(text: &str) -> Result<Self, HasherErr> {
        Self::from_text(WideContext::global(), text)
    }
}

impl RangeHash for WideHasher<'_> {
    type Hash = u64;

    fn len(&self) -> usize {
        self.table.len()
    }

    fn get_hash(&self, l: usize, r: usize) -> Result<u64, HasherErr> {
        self.table.get_hash(l, r)
    }

    fn rev_hash(&self, l: usize, r: usize) -> Result<u64, HasherErr> {
        self.table.rev_hash(l, r)
    }
}
