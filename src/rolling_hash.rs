use std::fmt;

use num_traits::Zero;

use crate::{
    context::FieldContext,
    error::HasherErr,
    interface::{check_range, RangeHash},
    modular::ModularEngine,
    symbol::Symbol,
};

/// Prefix and suffix accumulators of one sequence over one field.
///
/// With `v[i] = symbol[i] + offset`, `n` symbols and base `B`:
///
/// - `prefix[0] = 0`, `prefix[i + 1] = prefix[i] * B + v[i]`
/// - `suffix[n] = 0`, `suffix[i] = suffix[i + 1] * B + v[i]`
///
/// so both tables hold `n + 1` entries and a closed range `[l, r]` is read from
/// `prefix[l]`, `prefix[r + 1]`, `suffix[l]` and `suffix[r + 1]`.
#[derive(Clone)]
pub struct RollingHash<'ctx, E: ModularEngine> {
    ctx: &'ctx FieldContext<E>,
    prefix: Vec<E::Element>,
    suffix: Vec<E::Element>,
}

impl<'ctx, E: ModularEngine> RollingHash<'ctx, E> {
    pub fn new<S: Symbol>(ctx: &'ctx FieldContext<E>, data: &[S]) -> Result<Self, HasherErr> {
        ctx.check_capacity(data.len())?;
        Self::from_symbols(ctx, data.iter().copied())
    }

    pub fn from_text(ctx: &'ctx FieldContext<E>, text: &str) -> Result<Self, HasherErr> {
        Self::from_symbols(ctx, text.chars())
    }

    pub fn from_symbols<I>(ctx: &'ctx FieldContext<E>, symbols: I) -> Result<Self, HasherErr>
    where
        I: IntoIterator,
        I::Item: Symbol,
    {
        let symbols = symbols.into_iter();
        // reject early when the iterator already knows it is too long
        ctx.check_capacity(symbols.size_hint().0)?;

        // pulling max_len symbols already fails, so never read past that
        let offset = ctx.offset();
        let values: Vec<E::Element> = symbols
            .take(ctx.max_len())
            .map(|symbol| E::mod_add(symbol.residue::<E>(), offset))
            .collect();
        ctx.check_capacity(values.len())?;

        let n = values.len();
        let base = ctx.base();

        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(E::Element::zero());
        for (i, &value) in values.iter().enumerate() {
            prefix.push(E::mod_add(E::mod_mul(prefix[i], base), value));
        }

        let mut suffix = vec![E::Element::zero(); n + 1];
        for i in (0..n).rev() {
            suffix[i] = E::mod_add(E::mod_mul(suffix[i + 1], base), values[i]);
        }

        Ok(Self {
            ctx,
            prefix,
            suffix,
        })
    }

    pub fn context(&self) -> &'ctx FieldContext<E> {
        self.ctx
    }

    #[inline]
    fn scale(&self, l: usize, r: usize) -> E::Element {
        // r - l + 1 <= n < max_len
        self.ctx.powers()[r - l + 1]
    }
}

impl<E: ModularEngine> RangeHash for RollingHash<'_, E> {
    type Hash = E::Element;

    fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    fn get_hash(&self, l: usize, r: usize) -> Result<E::Element, HasherErr> {
        check_range(l, r, self.len())?;
        let shifted = E::mod_mul(self.scale(l, r), self.prefix[l]);
        Ok(E::mod_sub(self.prefix[r + 1], shifted))
    }

    fn rev_hash(&self, l: usize, r: usize) -> Result<E::Element, HasherErr> {
        check_range(l, r, self.len())?;
        let shifted = E::mod_mul(self.scale(l, r), self.suffix[r + 1]);
        Ok(E::mod_sub(self.suffix[l], shifted))
    }
}

impl<E: ModularEngine> fmt::Debug for RollingHash<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollingHash")
            .field("len", &self.len())
            .field("base", &self.ctx.base())
            .field("offset", &self.ctx.offset())
            .finish()
    }
}
