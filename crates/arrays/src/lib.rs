//! Exercises over ordered sequences.
//!
//! Every function here is a pure transform: it borrows its input, makes one
//! linear pass over it, and returns a freshly allocated result.
//!
//! - [`concatenate`] — a sequence followed by an exact copy of itself
//! - [`try_concatenate`] — the same, reporting allocation failure as an
//!   [`Error`] instead of aborting

mod concatenation;

pub use concatenation::{Error, concatenate, try_concatenate};
