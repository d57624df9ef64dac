//! Exercises over text strings.
//!
//! - [`score_of_string`] — sum of absolute differences between adjacent bytes
//! - [`score_by`] — the same sum, with characters read as a chosen [`CodeUnit`]

mod score;

pub use score::{CodeUnit, score_by, score_of_bytes, score_of_string};
