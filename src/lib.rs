//! memview - bounds-checked views over contiguous memory
//!
//! # Overview
//!
//! A [`View`] is a small `Copy` descriptor that addresses a run of elements
//! without owning them. The same type covers:
//!
//! - Slices, arrays and `Vec`s
//! - The UTF-8 bytes of a `str`
//! - Raw memory obtained through FFI or a custom allocator
//!
//! Every access is range checked and reports a [`ViewError`] instead of
//! reading out of bounds. Re-slicing, casting and iteration never allocate.
//!
//! # Quick Start
//!
//! ```
//! use memview::{View, ViewExt, ViewMutExt};
//!
//! let mut samples = vec![0u32; 8];
//!
//! // Fill the second half through a writable sub-view.
//! let back = samples.view_mut_from(4).unwrap();
//! for i in 0..back.len() {
//!     back.set(i, i as u32 + 1).unwrap();
//! }
//! assert_eq!(samples, [0, 0, 0, 0, 1, 2, 3, 4]);
//!
//! // Read-only views can be shared freely and iterated without allocation.
//! let view: View<'_, u32> = samples.view();
//! assert_eq!(view.iter().sum::<u32>(), 10);
//! assert!(view.get(8).is_err());
//! ```
//!
//! # Byte-level access
//!
//! Views over [`Primitive`] types can be reinterpreted, and byte views can
//! read and write typed values at any offset, aligned or not:
//!
//! ```
//! use memview::{ViewExt, ViewMutExt};
//!
//! let mut packet = [0u8; 12];
//! let bytes = packet.view_mut();
//! bytes.write_at(0, 0xcafe_u16).unwrap();
//! bytes.write_at(2, 1_000_000_u32).unwrap();
//! assert_eq!(bytes.read_at::<u32>(2), Ok(1_000_000));
//!
//! // The same bytes as little 16-bit words.
//! let words = packet.view().cast::<u16>();
//! assert_eq!(words.len(), 6);
//! assert_eq!(words.get(0), Ok(0xcafe));
//! ```
//!
//! # Failure modes
//!
//! Precondition failures are recoverable [`ViewError`]s. Broken internal
//! invariants go through [`contract::abandon`], which with this crate's
//! default `std` feature aborts the process instead of unwinding.

// Re-export the view type and its access modes
pub use memview_core::view::{Access, ReadOnly, ReadWrite, View};

// Construction
pub use memview_core::construct::{ViewExt, ViewMutExt};

// Iteration and reinterpretation
pub use memview_core::cast::Primitive;
pub use memview_core::iter::{Cursor, Enumerator};
pub use memview_core::text::Split;

// Descriptor metadata
pub use memview_core::layout::{Backing, BackingKind, ElementLayout, Origin};

// Errors and precondition checks
pub use memview_core::contract::{self, ViewIndex};
pub use memview_core::error::ViewError;
