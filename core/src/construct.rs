#![allow(unsafe_code)]
//! Factory paths producing views from slices, strings, and raw pointers.
//!
//! | Source              | Read-only                    | Read-write                      |
//! |---------------------|------------------------------|---------------------------------|
//! | `[T]`               | [`View::new`]                | [`View::new_mut`]               |
//! | `[T]` from `start`  | [`View::from_start`]         | [`View::from_start_mut`]        |
//! | `[T]` `start..end`  | [`View::from_range`]         | [`View::from_range_mut`]        |
//! | `str`               | [`View::from_text`]          | -                               |
//! | `str` from `start`  | [`View::from_text_start`]    | -                               |
//! | `str` `start..end`  | [`View::from_text_range`]    | -                               |
//! | raw pointer         | [`View::from_raw_parts`]     | [`View::from_raw_parts_mut`]    |
//!
//! The same paths are available as methods through [`ViewExt`] and
//! [`ViewMutExt`]:
//!
//! ```
//! use memview_core::ViewExt;
//!
//! let digits = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let middle = digits.view_range(3, 7).unwrap();
//! assert_eq!(middle.to_vec(), [3, 4, 5, 6]);
//!
//! let world = "Hello, world".view_from(7).unwrap();
//! assert_eq!(world.to_vec(), b"world");
//! ```

use core::ptr::NonNull;

use crate::contract::{self, ViewIndex};
use crate::error::ViewError;
use crate::layout::{BackingKind, Stride};
use crate::view::{Access, ReadOnly, ReadWrite, View};

impl<'a, T> View<'a, T, ReadOnly> {
    /// A view over the whole slice.
    pub fn new(slice: &'a [T]) -> Self {
        // SAFETY: the shared borrow keeps every element readable for `'a`.
        unsafe { Self::over_container(NonNull::from(slice), BackingKind::Array) }
    }

    /// A view over `slice[start..]`.
    ///
    /// `start == slice.len()` yields the canonical empty view.
    pub fn from_start(slice: &'a [T], start: impl ViewIndex) -> Result<Self, ViewError> {
        let start = contract::requires_in_inclusive_range(start, slice.len())?;
        Ok(Self::new(slice).trailing(start))
    }

    /// A view over `slice[start..end]`.
    ///
    /// Both bounds are validated: `0 <= start <= end <= slice.len()`.
    pub fn from_range(
        slice: &'a [T],
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<Self, ViewError> {
        let (start, end) = contract::requires_sub_range(start, end, slice.len())?;
        Ok(Self::new(slice).window(start, end))
    }

    /// A view over memory this crate cannot check.
    ///
    /// A null `ptr` is accepted only with `len == 0`, in which case the
    /// canonical empty view is returned.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` elements of `T` for all of `'a`,
    /// and the memory must not be written through any other path while the
    /// view or its copies are in use.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] if `ptr` is null with a non-zero `len`,
    /// or if `len` elements of `T` do not fit in `isize::MAX` bytes.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Result<Self, ViewError> {
        // SAFETY: forwarded to the caller.
        unsafe { Self::unmanaged(ptr.cast_mut(), len) }
    }
}

impl<'a> View<'a, u8, ReadOnly> {
    /// A view over the UTF-8 bytes of `s`.
    pub fn from_text(s: &'a str) -> Self {
        // SAFETY: the shared borrow keeps every byte readable for `'a`.
        unsafe { Self::over_container(NonNull::from(s.as_bytes()), BackingKind::Text) }
    }

    /// A view over the bytes of `s` from byte offset `start`.
    ///
    /// Unlike the slice constructors, `start == s.len()` keeps the string as
    /// backing.
    pub fn from_text_start(s: &'a str, start: impl ViewIndex) -> Result<Self, ViewError> {
        let start = contract::requires_in_inclusive_range(start, s.len())?;
        let text = Self::from_text(s);
        // SAFETY: start <= len.
        Ok(unsafe { text.sub_unchecked(start, text.len()) })
    }

    /// A view over the bytes of `s` in `start..end`.
    pub fn from_text_range(
        s: &'a str,
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<Self, ViewError> {
        let (start, end) = contract::requires_sub_range(start, end, s.len())?;
        // SAFETY: start <= end <= len.
        Ok(unsafe { Self::from_text(s).sub_unchecked(start, end) })
    }
}

impl<'a, T> View<'a, T, ReadWrite> {
    /// A writable view over the whole slice.
    pub fn new_mut(slice: &'a mut [T]) -> Self {
        // SAFETY: the exclusive borrow keeps every element readable and
        // writable for `'a`, and nothing else can reach it meanwhile.
        unsafe { Self::over_container(NonNull::from(slice), BackingKind::Array) }
    }

    /// A writable view over `slice[start..]`.
    pub fn from_start_mut(slice: &'a mut [T], start: impl ViewIndex) -> Result<Self, ViewError> {
        let start = contract::requires_in_inclusive_range(start, slice.len())?;
        Ok(Self::new_mut(slice).trailing(start))
    }

    /// A writable view over `slice[start..end]`.
    pub fn from_range_mut(
        slice: &'a mut [T],
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<Self, ViewError> {
        let (start, end) = contract::requires_sub_range(start, end, slice.len())?;
        Ok(Self::new_mut(slice).window(start, end))
    }

    /// A writable view over memory this crate cannot check.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` elements of `T` for
    /// all of `'a`, and must not be accessed through any other path while
    /// the view or its copies are in use.
    ///
    /// # Errors
    ///
    /// Same as [`View::from_raw_parts`].
    pub unsafe fn from_raw_parts_mut(ptr: *mut T, len: usize) -> Result<Self, ViewError> {
        // SAFETY: forwarded to the caller.
        unsafe { Self::unmanaged(ptr, len) }
    }
}

impl<'a, T, A: Access> View<'a, T, A> {
    /// # Safety
    ///
    /// See [`View::from_raw_parts`] and [`View::from_raw_parts_mut`].
    unsafe fn unmanaged(ptr: *mut T, len: usize) -> Result<Self, ViewError> {
        contract::requires(len == 0 || !ptr.is_null(), "null pointer with non-zero length")?;
        contract::requires(
            len <= Stride::<T>::LAYOUT.max_len(),
            "length exceeds the addressable size",
        )?;
        let Some(origin) = NonNull::new(ptr) else {
            return Ok(Self::empty());
        };
        tracing::trace!(len, writable = A::WRITABLE, "view over unmanaged memory");
        // SAFETY: validity of the range is the caller's contract.
        Ok(unsafe { Self::from_parts(None, origin.cast(), len) })
    }

    /// `self[start..]` of a freshly built container view, collapsing to the
    /// canonical empty view when `start` is the end.
    fn trailing(self, start: usize) -> Self {
        if start == self.len() {
            return Self::empty();
        }
        // SAFETY: start < len.
        unsafe { self.sub_unchecked(start, self.len()) }
    }

    /// `self[start..end]` of a freshly built container view, collapsing to
    /// the canonical empty view when `start` is the end.
    fn window(self, start: usize, end: usize) -> Self {
        if start == self.len() {
            return Self::empty();
        }
        // SAFETY: checked by the caller: start <= end <= len.
        unsafe { self.sub_unchecked(start, end) }
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T, ReadOnly> {
    fn from(slice: &'a [T]) -> Self {
        View::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T, ReadOnly> {
    fn from(array: &'a [T; N]) -> Self {
        View::new(array.as_slice())
    }
}

impl<'a, T> From<&'a mut [T]> for View<'a, T, ReadWrite> {
    fn from(slice: &'a mut [T]) -> Self {
        View::new_mut(slice)
    }
}

impl<'a> From<&'a str> for View<'a, u8, ReadOnly> {
    fn from(s: &'a str) -> Self {
        View::from_text(s)
    }
}

/// Read-only view constructors as methods on slices and strings.
pub trait ViewExt<T> {
    fn view(&self) -> View<'_, T>;

    fn view_from(&self, start: impl ViewIndex) -> Result<View<'_, T>, ViewError>;

    fn view_range(
        &self,
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<View<'_, T>, ViewError>;
}

impl<T> ViewExt<T> for [T] {
    fn view(&self) -> View<'_, T> {
        View::new(self)
    }

    fn view_from(&self, start: impl ViewIndex) -> Result<View<'_, T>, ViewError> {
        View::from_start(self, start)
    }

    fn view_range(
        &self,
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<View<'_, T>, ViewError> {
        View::from_range(self, start, end)
    }
}

impl ViewExt<u8> for str {
    fn view(&self) -> View<'_, u8> {
        View::from_text(self)
    }

    fn view_from(&self, start: impl ViewIndex) -> Result<View<'_, u8>, ViewError> {
        View::from_text_start(self, start)
    }

    fn view_range(
        &self,
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<View<'_, u8>, ViewError> {
        View::from_text_range(self, start, end)
    }
}

/// Writable view constructors as methods on mutable slices.
pub trait ViewMutExt<T> {
    fn view_mut(&mut self) -> View<'_, T, ReadWrite>;

    fn view_mut_from(
        &mut self,
        start: impl ViewIndex,
    ) -> Result<View<'_, T, ReadWrite>, ViewError>;

    fn view_mut_range(
        &mut self,
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<View<'_, T, ReadWrite>, ViewError>;
}

impl<T> ViewMutExt<T> for [T] {
    fn view_mut(&mut self) -> View<'_, T, ReadWrite> {
        View::new_mut(self)
    }

    fn view_mut_from(
        &mut self,
        start: impl ViewIndex,
    ) -> Result<View<'_, T, ReadWrite>, ViewError> {
        View::from_start_mut(self, start)
    }

    fn view_mut_range(
        &mut self,
        start: impl ViewIndex,
        end: impl ViewIndex,
    ) -> Result<View<'_, T, ReadWrite>, ViewError> {
        View::from_range_mut(self, start, end)
    }
}

#[cfg(test)]
#[path = "construct_test.rs"]
mod construct_test;
