//! Polynomial rolling hashes that answer "what is the hash of `seq[l..=r]`, read forward
//! or backward?" in constant time after a linear build.
//!
//! Two variants share one [`RangeHash`] interface:
//!
//! - [`WideHasher`] works modulo `2^61 - 1` with a base drawn at random per context.
//! - [`NarrowHasher`] works modulo 998244353 with a base fixed at compile time.
//!
//! ```
//! use range_hash_rs::{RangeHash, WideHasher};
//!
//! let h = WideHasher::build_text("racecar").unwrap();
//! assert!(h.is_palindrome(0, 6).unwrap());
//! assert!(h.is_palindrome(2, 4).unwrap());
//! assert!(!h.is_palindrome(0, 5).unwrap());
//! ```

pub mod context;
pub mod error;
pub mod interface;
pub mod modular;
pub mod narrow;
pub mod non_rolling_hash;
pub mod rolling_hash;
pub mod symbol;
pub mod wide;

pub use context::{ContextConfig, FieldContext, NarrowContext, WideContext};
pub use error::HasherErr;
pub use interface::RangeHash;
pub use modular::{Mersenne61, ModularEngine, Prime998};
pub use narrow::NarrowHasher;
pub use non_rolling_hash::NonRollingHash;
pub use rolling_hash::RollingHash;
pub use symbol::Symbol;
pub use wide::WideHasher;
