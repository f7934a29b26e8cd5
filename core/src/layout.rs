//! Layout metadata for view elements and backing containers.
//!
//! Rust slices and strings carry no object header: the first element lives at
//! the container's base address. A view therefore records the base address as
//! the identity of its backing container and addresses elements as
//! `origin + index * stride`, with the stride fixed per element type at
//! compile time.

use core::marker::PhantomData;
use core::mem::{align_of, size_of};
use core::ptr::NonNull;

/// Size and alignment of one element, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLayout {
    pub size: usize,
    pub align: usize,
}

impl ElementLayout {
    pub const fn of<T>() -> Self {
        ElementLayout {
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }

    /// Byte distance from the first element to element `index`.
    #[inline(always)]
    pub const fn offset_of(self, index: usize) -> usize {
        index * self.size
    }

    /// Largest element count whose byte size still fits in `isize`.
    pub const fn max_len(self) -> usize {
        if self.size == 0 {
            usize::MAX
        } else {
            isize::MAX.unsigned_abs() / self.size
        }
    }
}

/// Per-type layout constant, evaluated once at compile time.
pub(crate) struct Stride<T>(PhantomData<T>);

impl<T> Stride<T> {
    pub(crate) const LAYOUT: ElementLayout = ElementLayout::of::<T>();
}

/// The kind of container a view points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingKind {
    /// A slice, array, `Vec`, or arena allocation of elements.
    Array,
    /// The UTF-8 bytes of a `str`.
    Text,
}

/// Identity of a managed backing container: where its data starts and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Backing {
    base: NonNull<u8>,
    kind: BackingKind,
}

impl Backing {
    pub(crate) fn new(base: NonNull<u8>, kind: BackingKind) -> Self {
        Backing { base, kind }
    }

    pub fn kind(&self) -> BackingKind {
        self.kind
    }

    pub(crate) fn base(&self) -> NonNull<u8> {
        self.base
    }

    /// Address of the container's first element.
    pub fn base_addr(&self) -> usize {
        self.base.as_ptr().addr()
    }
}

/// Where a view begins, as reported by [`crate::View::origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Byte offset from the backing container's first element.
    Offset(usize),
    /// Absolute address of unmanaged memory. The canonical empty view reports 0.
    Address(usize),
}
