#![allow(unsafe_code)]
//! Reinterpreting views between element types.
//!
//! Only [`Primitive`] element types take part: types for which every byte
//! pattern is a valid value and every value is fully initialized bytes. The
//! bound is checked at compile time through `zerocopy`'s derivable traits, so
//! a view holding references can never be reinterpreted.
//!
//! ```
//! use memview_core::ViewExt;
//!
//! let words = [0x0403_0201u32, 0x0807_0605];
//! let bytes = words.view().cast::<u8>();
//! assert_eq!(bytes.len(), 8);
//! assert_eq!(bytes.get(0), Ok(words[0].to_ne_bytes()[0]));
//! assert_eq!(bytes.cast::<u32>().to_vec(), words);
//! ```

use core::mem::size_of;

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::contract::{self, ViewIndex};
use crate::error::ViewError;
use crate::view::{Access, ReadWrite, View};

/// A pointer-free element type that can be reinterpreted byte-for-byte.
///
/// Implemented for every type that is `FromBytes + IntoBytes + Immutable +
/// Copy`; derive those `zerocopy` traits on your own `#[repr(C)]` structs to
/// use them with [`View::cast`], [`View::read`] and [`View::write`].
pub trait Primitive: FromBytes + IntoBytes + Immutable + Copy {}

impl<T: FromBytes + IntoBytes + Immutable + Copy> Primitive for T {}

impl<'a, T: Primitive, A: Access> View<'a, T, A> {
    /// Reinterprets the same bytes as elements of `U`.
    ///
    /// The new length is `len * size_of::<T>() / size_of::<U>()`, rounded
    /// down; trailing bytes that do not form a whole `U` are left out. A
    /// result of zero elements is the canonical empty view. Backing and
    /// origin are kept, so casting back restores an identical view.
    pub fn cast<U: Primitive>(self) -> View<'a, U, A> {
        const {
            assert!(size_of::<U>() != 0, "cannot cast a view to a zero-sized type");
        }
        let len = self.len() * size_of::<T>() / size_of::<U>();
        tracing::trace!(
            from = core::any::type_name::<T>(),
            to = core::any::type_name::<U>(),
            len,
            "cast view"
        );
        if len == 0 {
            return View::empty();
        }
        // SAFETY: the new range covers no more bytes than the old one, and
        // both element types accept any byte pattern.
        unsafe { View::from_parts(self.backing(), self.origin_ptr(), len) }
    }

    /// The raw bytes of the elements.
    pub fn as_bytes(self) -> View<'a, u8, A> {
        self.cast::<u8>()
    }
}

impl<A: Access> View<'_, u8, A> {
    /// Reads a `U` from the first `size_of::<U>()` bytes.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] if the view holds fewer bytes than a `U`.
    pub fn read<U: Primitive>(&self) -> Result<U, ViewError> {
        contract::requires(self.len() >= size_of::<U>(), "view is shorter than the value")?;
        self.cast::<U>().get(0usize)
    }

    /// Reads a `U` starting at byte `offset`.
    pub fn read_at<U: Primitive>(&self, offset: impl ViewIndex) -> Result<U, ViewError> {
        self.sub_from(offset)?.read()
    }
}

impl View<'_, u8, ReadWrite> {
    /// Writes `value` into the first `size_of::<U>()` bytes.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidArgument`] if the view holds fewer bytes than a `U`;
    /// nothing is written in that case.
    pub fn write<U: Primitive>(&self, value: U) -> Result<(), ViewError> {
        contract::requires(self.len() >= size_of::<U>(), "view is shorter than the value")?;
        self.cast::<U>().set(0usize, value)
    }

    /// Writes `value` starting at byte `offset`.
    pub fn write_at<U: Primitive>(
        &self,
        offset: impl ViewIndex,
        value: U,
    ) -> Result<(), ViewError> {
        self.sub_from(offset)?.write(value)
    }
}

#[cfg(test)]
#[path = "cast_test.rs"]
mod cast_test;
