//! The "score" of a string.
//!
//! The score is the sum of `|code(s[i - 1]) - code(s[i])|` over every adjacent
//! pair, where `code` is the numeric value of a character. Strings with fewer
//! than two characters have no adjacent pairs and score zero.
//!
//! # Examples
//!
//! ```
//! use kata_strings::score_of_string;
//!
//! // |h-e| + |e-l| + |l-l| + |l-o| = 3 + 7 + 0 + 3
//! assert_eq!(score_of_string("hello"), 13);
//! assert_eq!(score_of_string("zaz"), 50);
//! assert_eq!(score_of_string(""), 0);
//! ```

mod code_unit;

#[cfg(test)]
mod tests;

use tracing::trace;

pub use code_unit::CodeUnit;

/// Returns the score of `s`, reading it byte by byte.
///
/// Multi-byte UTF-8 characters contribute each of their bytes separately.
#[must_use]
pub fn score_of_string(s: &str) -> u64 {
    score_of_bytes(s.as_bytes())
}

/// Returns the score of a byte slice.
#[must_use]
pub fn score_of_bytes(bytes: &[u8]) -> u64 {
    let score = adjacent_difference_sum(bytes.iter().map(|&b| u32::from(b)));
    trace!(len = bytes.len(), score, "scored bytes");
    score
}

/// Returns the score of `s`, with characters read as `unit`.
#[must_use]
pub fn score_by(s: &str, unit: CodeUnit) -> u64 {
    match unit {
        CodeUnit::Byte => score_of_string(s),
        CodeUnit::Char => {
            let score = adjacent_difference_sum(s.chars().map(u32::from));
            trace!(len = s.len(), score, "scored chars");
            score
        }
    }
}

fn adjacent_difference_sum(codes: impl Iterator<Item = u32>) -> u64 {
    let mut codes = codes.peekable();
    let mut sum = 0_u64;

    while let Some(prev) = codes.next() {
        let Some(&next) = codes.peek() else { break };
        sum += u64::from(prev.abs_diff(next));
    }

    sum
}
