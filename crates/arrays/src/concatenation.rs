//! Sequence concatenation with itself.
//!
//! Given `nums` of length `n`, the concatenation is the sequence `ans` of
//! length `2n` where `ans[i] == nums[i]` and `ans[i + n] == nums[i]` for every
//! `i` in `0..n`.
//!
//! # Examples
//!
//! ```
//! use kata_arrays::concatenate;
//!
//! assert_eq!(concatenate(&[1, 2, 1]), vec![1, 2, 1, 1, 2, 1]);
//! assert!(concatenate::<i32>(&[]).is_empty());
//! ```

mod error;


use tracing::trace;

pub use error::Error;

/// Returns `nums` followed by a copy of `nums`.
///
/// The result is allocated once with capacity exactly `2 * nums.len()`.
///
/// # Panics
///
/// Panics if `2 * nums.len()` overflows `usize` or exceeds `isize::MAX`
/// bytes, the same way [`Vec::with_capacity`] does.
/// Use [`try_concatenate`] to handle that case instead.
#[must_use]
pub fn concatenate<T: Clone>(nums: &[T]) -> Vec<T> {
    let mut ans = Vec::with_capacity(nums.len() * 2);
    fill(&mut ans, nums);
    ans
}

/// Returns `nums` followed by a copy of `nums`, or an error if the result
/// cannot be allocated.
///
/// # Errors
///
/// - [`Error::CapacityOverflow`] if `2 * nums.len()` does not fit in `usize`
/// - [`Error::Allocation`] if the allocator rejects the request
pub fn try_concatenate<T: Clone>(nums: &[T]) -> Result<Vec<T>, Error> {
    let len = nums.len();
    let capacity = len.checked_mul(2).ok_or(Error::CapacityOverflow { len })?;

    let mut ans = Vec::new();
    ans.try_reserve_exact(capacity)
        .map_err(|_| Error::Allocation { len })?;

    fill(&mut ans, nums);
    Ok(ans)
}

/// Writes both halves into an empty `ans` that already has room for them.
fn fill<T: Clone>(ans: &mut Vec<T>, nums: &[T]) {
    debug_assert!(ans.is_empty());

    ans.extend_from_slice(nums);
    ans.extend_from_slice(nums);

    trace!(len = nums.len(), out_len = ans.len(), "concatenated sequence");
}
