use thiserror::Error;

/// Errors that can occur when building a concatenation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("doubling a sequence of length {len} overflows usize")]
    CapacityOverflow { len: usize },

    #[error("failed to allocate room for twice a sequence of length {len}")]
    Allocation { len: usize },
}
