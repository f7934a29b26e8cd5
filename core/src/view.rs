#![allow(unsafe_code)]
//! The view descriptor and its core operations.
//!
//! A [`View`] is a non-owning reference to `len` contiguous elements:
//!
//! ```text
//!   View { backing, origin, len }
//!              │       │
//!              │       └──▶ [ e0 | e1 | ... | e(len-1) ]
//!              └──▶ base of the slice/str it came from (None for raw memory)
//! ```
//!
//! Views are `Copy`. Sub-viewing and casting only compute a new origin and
//! length; nothing is ever copied or allocated. Two views may alias the same
//! memory.
//!
//! # Access modes
//!
//! The third type parameter says whether the view may write:
//!
//! - [`ReadOnly`] views come from `&[T]`, `&str`, or `*const T`. They are
//!   `Send`/`Sync` whenever `T: Sync`.
//! - [`ReadWrite`] views come from `&mut [T]` or `*mut T`. Because copies of
//!   the same view can write, they behave like `&[Cell<T>]` and are neither
//!   `Send` nor `Sync`.
//!
//! # Alignment
//!
//! Casting a byte view to a wider type may produce an origin that is not
//! aligned for the new element type. Every element access therefore uses
//! unaligned loads and stores, which cost nothing on targets that allow
//! unaligned access and stay correct on the others.

use core::cell::Cell;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use crate::Vec;
use crate::contract::{self, ViewIndex};
use crate::error::ViewError;
use crate::layout::{Backing, BackingKind, Origin, Stride};

mod private {
    pub trait Sealed {}
}

/// Access mode of a view. Sealed: only [`ReadOnly`] and [`ReadWrite`] exist.
pub trait Access: private::Sealed + Copy + fmt::Debug + 'static {
    const WRITABLE: bool;
}

/// Marker for views that can only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnly {}

/// Marker for views that can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadWrite {}

impl private::Sealed for ReadOnly {}
impl private::Sealed for ReadWrite {}

impl Access for ReadOnly {
    const WRITABLE: bool = false;
}

impl Access for ReadWrite {
    const WRITABLE: bool = true;
}

/// A bounds-checked, non-owning view over `len` elements of type `T`.
///
/// See the [module docs](self) for the memory model.
pub struct View<'a, T, A: Access = ReadOnly> {
    backing: Option<Backing>,
    origin: NonNull<u8>,
    len: usize,
    // Invariant in `T` (writes through a copy must not shorten lifetimes
    // inside `T`), covariant in `'a`.
    _marker: PhantomData<(&'a [Cell<T>], A)>,
}

static_assertions::assert_eq_size!(View<'static, u64>, [usize; 4]);

impl<T, A: Access> Clone for View<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Access> Copy for View<'_, T, A> {}

// Read-only views hand out copies of `T` from shared memory: same rules as `&[T]`.
unsafe impl<T: Sync> Send for View<'_, T, ReadOnly> {}
unsafe impl<T: Sync> Sync for View<'_, T, ReadOnly> {}

impl<'a, T, A: Access> View<'a, T, A> {
    /// The canonical empty view: no backing, dangling origin, zero length.
    pub const fn empty() -> Self {
        View {
            backing: None,
            origin: NonNull::<T>::dangling().cast(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Assembles a view from its parts without any check.
    ///
    /// # Safety
    ///
    /// `origin` must be valid for reads (and for writes if `A` is
    /// [`ReadWrite`]) of `len` elements of `T` for `'a`, and must be derived
    /// from `backing`'s base when `backing` is present.
    #[inline(always)]
    pub(crate) const unsafe fn from_parts(
        backing: Option<Backing>,
        origin: NonNull<u8>,
        len: usize,
    ) -> Self {
        View {
            backing,
            origin,
            len,
            _marker: PhantomData,
        }
    }

    /// A view over a whole container whose pointer carries the right
    /// provenance for `A`.
    ///
    /// # Safety
    ///
    /// `data` must be valid as described on [`View::from_parts`].
    #[inline]
    pub(crate) unsafe fn over_container(data: NonNull<[T]>, kind: BackingKind) -> Self {
        let base = data.cast::<u8>();
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_parts(Some(Backing::new(base, kind)), base, data.len()) }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The container this view points into, or `None` for unmanaged memory
    /// and the canonical empty view.
    pub fn backing(&self) -> Option<Backing> {
        self.backing
    }

    pub fn backing_kind(&self) -> Option<BackingKind> {
        self.backing.map(|backing| backing.kind())
    }

    /// Where the first element lives: an offset into the backing container,
    /// or an absolute address when there is none. The canonical empty view
    /// points nowhere and reports address 0.
    pub fn origin(&self) -> Origin {
        match self.backing {
            Some(backing) => {
                contract::assert_invariant(self.origin >= backing.base());
                // SAFETY: the origin was derived from the base by adding a
                // non-negative offset inside the same allocation.
                let offset = unsafe { self.origin.offset_from(backing.base()) };
                Origin::Offset(offset.unsigned_abs())
            }
            None if self.is_canonical_empty() => Origin::Address(0),
            None => Origin::Address(self.origin.as_ptr().addr()),
        }
    }

    fn is_canonical_empty(&self) -> bool {
        self.len == 0 && self.origin == NonNull::<T>::dangling().cast()
    }

    #[inline(always)]
    pub(crate) fn origin_ptr(&self) -> NonNull<u8> {
        self.origin
    }

    /// Pointer to element `index`.
    ///
    /// # Safety
    ///
    /// `index <= self.len`.
    #[inline(always)]
    unsafe fn element_ptr(&self, index: usize) -> NonNull<u8> {
        // SAFETY: at most one past the last element of a live allocation.
        unsafe { self.origin.add(Stride::<T>::LAYOUT.offset_of(index)) }
    }

    /// The elements `start..end` without bounds checks.
    ///
    /// # Safety
    ///
    /// `start <= end <= self.len`.
    #[inline(always)]
    pub(crate) unsafe fn sub_unchecked(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len);
        // SAFETY: the new range lies within the old one.
        unsafe { Self::from_parts(self.backing, self.element_ptr(start), end - start) }
    }

    /// The elements from `start` to the end.
    pub fn sub_from(&self, start: impl ViewIndex) -> Result<Self, ViewError> {
        self.sub(start, self.len)
    }

    /// The elements `start..end`, sharing this view's backing.
    ///
    /// `start == end` (including `start == len`) gives an empty view that
    /// still points into the same container.
    pub fn sub(&self, start: impl ViewIndex, end: impl ViewIndex) -> Result<Self, ViewError> {
        let (start, end) = contract::requires_sub_range(start, end, self.len)?;
        // SAFETY: checked above.
        Ok(unsafe { self.sub_unchecked(start, end) })
    }

    /// Compares descriptors, not contents: same backing, same origin, same
    /// length.
    pub fn identity_eq<B: Access>(&self, other: &View<'_, T, B>) -> bool {
        self.backing == other.backing && self.origin == other.origin && self.len == other.len
    }
}

impl<'a, T: Copy, A: Access> View<'a, T, A> {
    /// Reads element `index`.
    #[inline]
    pub fn get(&self, index: impl ViewIndex) -> Result<T, ViewError> {
        let index = contract::requires_in_range(index, self.len)?;
        // SAFETY: index < len.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Reads element `index` without a range check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: in bounds per the caller; unaligned read covers cast views.
        unsafe { self.element_ptr(index).cast::<T>().read_unaligned() }
    }

    pub fn first(&self) -> Option<T> {
        self.get(0usize).ok()
    }

    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Copies every element into `dest`, which must be at least as long.
    ///
    /// Overlapping views are handled like `memmove`. On error nothing is
    /// written.
    pub fn copy_into(&self, dest: View<'_, T, ReadWrite>) -> Result<(), ViewError> {
        contract::requires(dest.len >= self.len, "destination is shorter than source")?;
        if self.len == 0 {
            return Ok(());
        }
        let bytes = Stride::<T>::LAYOUT.offset_of(self.len);
        // SAFETY: both ranges are live for `bytes` bytes, `dest` is writable,
        // and `T: Copy` makes a byte copy a valid element copy. Copying bytes
        // keeps unaligned origins correct.
        unsafe {
            ptr::copy(
                self.origin.as_ptr().cast_const(),
                dest.origin.as_ptr(),
                bytes,
            );
        }
        Ok(())
    }

    /// Copies the elements into a freshly allocated `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Element-wise equality, as opposed to [`View::identity_eq`].
    pub fn content_eq<B: Access>(&self, other: &View<'_, T, B>) -> bool
    where
        T: PartialEq,
    {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, T> View<'a, T, ReadOnly> {
    /// Borrows the elements as a slice, if the origin is aligned for `T`.
    ///
    /// Views produced by casting bytes to wider types may be unaligned.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        if !self.origin.cast::<T>().is_aligned() {
            return None;
        }
        // SAFETY: read-only views never write, and the origin is aligned and
        // valid for `len` elements for `'a`.
        Some(unsafe { core::slice::from_raw_parts(self.origin.cast::<T>().as_ptr(), self.len) })
    }
}

impl<'a, T: Copy> View<'a, T, ReadWrite> {
    /// Writes `value` at `index`.
    #[inline]
    pub fn set(&self, index: impl ViewIndex, value: T) -> Result<(), ViewError> {
        let index = contract::requires_in_range(index, self.len)?;
        // SAFETY: index < len.
        unsafe { self.set_unchecked(index, value) };
        Ok(())
    }

    /// Writes element `index` without a range check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline(always)]
    pub unsafe fn set_unchecked(&self, index: usize, value: T) {
        // SAFETY: in bounds per the caller; read-write views carry write provenance.
        unsafe { self.element_ptr(index).cast::<T>().write_unaligned(value) }
    }

    /// Writes `value` into every element.
    pub fn fill(&self, value: T) {
        for index in 0..self.len {
            // SAFETY: index < len.
            unsafe { self.set_unchecked(index, value) };
        }
    }
}

impl<T, A: Access> Default for View<'_, T, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Copy + fmt::Debug, A: Access> fmt::Debug for View<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
