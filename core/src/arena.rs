//! Copying views into a bump arena.
//!
//! A view never owns its elements. When the data has to outlive the original
//! container, copy it into a [`Bump`] and keep viewing it from there:
//!
//! ```
//! use bumpalo::Bump;
//! use memview_core::ViewExt;
//!
//! let arena = Bump::new();
//! let copy = {
//!     let scratch = vec![1, 2, 3];
//!     scratch.view().copy_to_arena(&arena)
//! };
//! copy.set(0, 10).unwrap();
//! assert_eq!(copy.to_vec(), [10, 2, 3]);
//! ```

use bumpalo::Bump;

use crate::view::{Access, ReadWrite, View};

impl<T: Copy, A: Access> View<'_, T, A> {
    /// Allocates a copy of the elements in `arena` and returns a writable
    /// view of it, backed by the arena allocation.
    pub fn copy_to_arena<'b>(&self, arena: &'b Bump) -> View<'b, T, ReadWrite> {
        let copy = arena.alloc_slice_fill_iter(self.iter());
        View::new_mut(copy)
    }
}
