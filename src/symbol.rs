use crate::modular::ModularEngine;

/// A scalar that can be fed into a rolling hash.
///
/// Unsigned integers and `char` (by code point) reduce directly. Signed integers reduce
/// with the Euclidean remainder, so `-1` maps to `MODULUS - 1`.
pub trait Symbol: Copy {
    fn residue<E: ModularEngine>(self) -> E::Element;
}

macro_rules! impl_unsigned_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                #[inline]
                fn residue<E: ModularEngine>(self) -> E::Element {
                    E::mod_of_u64(self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                #[inline]
                fn residue<E: ModularEngine>(self) -> E::Element {
                    E::mod_of_i64(self as i64)
                }
            }
        )*
    };
}

impl_unsigned_symbol!(u8, u16, u32, u64, usize);
impl_signed_symbol!(i8, i16, i32, i64, isize);

impl Symbol for char {
    #[inline]
    fn residue<E: ModularEngine>(self) -> E::Element {
        E::mod_of_u64(self as u64)
    }
}
