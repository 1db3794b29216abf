use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HasherErr {
    /// The input is too long for the context's power table.
    ///
    /// Inputs of unknown length are read no further than `max_len` symbols, so `len` is
    /// then `max_len` rather than the full length.
    #[error("sequence of length {len} does not fit (maximum length is {max_len}, exclusive)")]
    CapacityExceeded { len: usize, max_len: usize },

    /// A query range is empty, reversed, or reaches past the end of the sequence.
    #[error("range [{l}, {r}] is invalid for a sequence of length {len}")]
    IndexOutOfRange { l: usize, r: usize, len: usize },

    #[error("invalid base: {0}")]
    InvalidBase(&'static str),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
