//! Bounds-checked views over contiguous memory.
//!
//! A [`View`] addresses `len` elements that live in a slice, in the bytes of
//! a `str`, or in raw memory the crate cannot see the owner of. All three end
//! up behind the same descriptor, so code written against `View<T>` does not
//! care where the data came from.
//!
//! ```
//! use memview_core::{View, ViewExt, ViewMutExt};
//!
//! let mut numbers = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! // Re-slicing is free: same memory, new origin and length.
//! let middle = numbers.view().sub(3, 7).unwrap();
//! assert_eq!(middle.to_vec(), [3, 4, 5, 6]);
//!
//! // Writable views come from mutable borrows.
//! let writable = numbers.view_mut();
//! writable.set(0, 42).unwrap();
//! assert!(writable.get(-1).is_err());
//!
//! // Raw bytes of the same storage.
//! let bytes: View<'_, u8, _> = writable.cast();
//! assert_eq!(bytes.len(), 40);
//! ```
//!
//! # Modules
//!
//! - [`contract`]: precondition checks and the unrecoverable-failure path.
//! - [`layout`]: element layout constants and backing identity.
//! - [`view`]: the descriptor, indexing, sub-views, copies, identity.
//! - [`construct`]: constructors and the [`ViewExt`] / [`ViewMutExt`] traits.
//! - [`cast`]: reinterpretation between [`Primitive`] types, typed read/write.
//! - [`iter`]: the allocation-free [`Cursor`] and the boxed adapters.
//! - [`text`]: search and split helpers for byte views.
//! - [`arena`]: copying views into a `bumpalo` arena.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod arena;
pub mod cast;
pub mod construct;
pub mod contract;
pub mod error;
pub mod iter;
pub mod layout;
pub mod text;
pub mod view;

pub use cast::Primitive;
pub use construct::{ViewExt, ViewMutExt};
pub use contract::ViewIndex;
pub use error::ViewError;
pub use iter::{Cursor, Enumerator};
pub use layout::{Backing, BackingKind, ElementLayout, Origin};
pub use text::Split;
pub use view::{Access, ReadOnly, ReadWrite, View};
