//! Precondition checks shared by every view operation.
//!
//! Two classes of failure are kept apart:
//!
//! - Caller mistakes (bad index, null pointer, short buffer) come back as a
//!   [`ViewError`] from the `requires*` family.
//! - Broken internal invariants go through [`abandon`], which never returns.
//!   No caller input can reach it.
//!
//! # Range checks
//!
//! Indices are accepted as any [`ViewIndex`] and converted to `usize` with a
//! wrapping cast. A negative index becomes a huge unsigned value, so a single
//! `index >= len` comparison rejects both `index < 0` and `index >= len`:
//!
//! ```text
//!   -1i32  ──as usize──▶  0xFFFF_FFFF_FFFF_FFFF  >= len  ──▶ out of range
//!    3i32  ──as usize──▶  3                      <  len  ──▶ ok
//! ```
//!
//! The cast never panics, with or without `overflow-checks`.

use crate::error::ViewError;

/// An integer usable as a view index.
///
/// Implemented for the pointer-sized and 32/64-bit integer types. Signed
/// values below zero always map to an out-of-range `usize`.
pub trait ViewIndex: Copy {
    /// Converts to `usize` without panicking. Negative values wrap to values
    /// no view can reach.
    fn wrapping_index(self) -> usize;

    /// The value as the caller wrote it, for error reports.
    fn reported(self) -> i128;
}

// `as` sign-extends: -1 becomes usize::MAX.
macro_rules! impl_view_index_wrapping {
    ($($ty:ty),*) => {$(
        impl ViewIndex for $ty {
            #[inline(always)]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
            fn wrapping_index(self) -> usize {
                self as usize
            }

            #[inline]
            #[allow(clippy::cast_lossless)]
            fn reported(self) -> i128 {
                self as i128
            }
        }
    )*};
}

// 64-bit values may not fit a 32-bit `usize`; saturate instead of truncating.
macro_rules! impl_view_index_saturating {
    ($($ty:ty),*) => {$(
        impl ViewIndex for $ty {
            #[inline(always)]
            fn wrapping_index(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }

            #[inline]
            fn reported(self) -> i128 {
                i128::from(self)
            }
        }
    )*};
}

impl_view_index_wrapping!(usize, isize, u32, i32);
impl_view_index_saturating!(u64, i64);

/// Fails with [`ViewError::InvalidArgument`] unless `condition` holds.
#[inline]
pub fn requires(condition: bool, what: &'static str) -> Result<(), ViewError> {
    if condition {
        Ok(())
    } else {
        Err(invalid_argument(what))
    }
}

/// Checks `0 <= index < len` with one unsigned comparison and returns the
/// index as `usize`.
#[inline(always)]
pub fn requires_in_range<I: ViewIndex>(index: I, len: usize) -> Result<usize, ViewError> {
    let unsigned = index.wrapping_index();
    if unsigned >= len {
        return Err(out_of_range(index.reported(), len));
    }
    Ok(unsigned)
}

/// Like [`requires_in_range`] but also accepts `index == len`, for start
/// positions that may sit one past the end.
#[inline(always)]
pub fn requires_in_inclusive_range<I: ViewIndex>(
    index: I,
    len: usize,
) -> Result<usize, ViewError> {
    let unsigned = index.wrapping_index();
    if unsigned > len {
        return Err(out_of_range(index.reported(), len));
    }
    Ok(unsigned)
}

/// Checks `0 <= start <= end <= len` and returns both bounds as `usize`.
///
/// A negative `end` wraps above `len`; a negative `start` wraps above any
/// valid `end`. The error reports whichever bound is at fault.
#[inline]
pub fn requires_sub_range<I: ViewIndex, J: ViewIndex>(
    start: I,
    end: J,
    len: usize,
) -> Result<(usize, usize), ViewError> {
    let (lo, hi) = (start.wrapping_index(), end.wrapping_index());
    if hi > len {
        return Err(out_of_range(end.reported(), len));
    }
    if lo > hi {
        return Err(out_of_range(start.reported(), len));
    }
    Ok((lo, hi))
}

/// Abandons the process unless `condition` holds.
#[inline]
pub fn assert_invariant(condition: bool) {
    if !condition {
        abandon();
    }
}

/// Terminates on a broken internal invariant.
///
/// With the `std` feature this aborts the process; without it, it panics and
/// leaves the outcome to the panic handler of the final binary.
#[cold]
#[inline(never)]
pub fn abandon() -> ! {
    tracing::error!("view invariant violated; a program error has occurred");

    #[cfg(feature = "std")]
    std::process::abort();

    #[cfg(not(feature = "std"))]
    panic!("a program error has occurred");
}

#[cold]
#[inline(never)]
fn out_of_range(index: i128, len: usize) -> ViewError {
    tracing::debug!(index = %index, len, "index out of range");
    ViewError::IndexOutOfRange { index, len }
}

#[cold]
#[inline(never)]
fn invalid_argument(what: &'static str) -> ViewError {
    tracing::debug!(what, "invalid argument");
    ViewError::InvalidArgument(what)
}
