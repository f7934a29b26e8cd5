#![allow(unsafe_code)]
//! Iterating over views.
//!
//! Two paths, same semantics:
//!
//! - [`Cursor`] is a `Copy` value holding the view and a position. `for x in
//!   view` uses it directly, so plain loops never allocate or dispatch
//!   dynamically.
//! - [`View::boxed_iter`] and [`View::boxed_enumerator`] box a cursor behind a
//!   trait object for code that only knows an abstract sequence. One
//!   allocation, then a virtual call per step.
//!
//! A cursor starts *before* the first element. [`Cursor::advance`] moves it
//! and reports whether it landed on an element; [`Cursor::current`] reads
//! that element. Reading before the first advance or after the end is an
//! out-of-range error, never a stray memory access.

use core::fmt;
use core::iter::FusedIterator;

use crate::Box;
use crate::error::ViewError;
use crate::view::{Access, ReadOnly, View};

/// The advance/current protocol, usable as a trait object.
pub trait Enumerator {
    type Item;

    /// Moves to the next element; `false` once the sequence is exhausted.
    fn advance(&mut self) -> bool;

    /// The element under the cursor.
    ///
    /// # Errors
    ///
    /// [`ViewError::IndexOutOfRange`] before the first [`advance`] or after
    /// the last element.
    ///
    /// [`advance`]: Enumerator::advance
    fn current(&self) -> Result<Self::Item, ViewError>;
}

/// Single-pass forward cursor over a view.
///
/// Not restartable: ask the view for a new cursor to iterate again.
pub struct Cursor<'a, T, A: Access = ReadOnly> {
    view: View<'a, T, A>,
    // `None` until the first advance. Saturates at `len` once exhausted.
    position: Option<usize>,
}

impl<T, A: Access> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Access> Copy for Cursor<'_, T, A> {}

impl<'a, T: Copy, A: Access> Cursor<'a, T, A> {
    pub fn new(view: View<'a, T, A>) -> Self {
        Cursor {
            view,
            position: None,
        }
    }

    #[inline]
    pub fn advance(&mut self) -> bool {
        self.step().is_some()
    }

    /// Moves forward and returns the new position if it holds an element.
    #[inline(always)]
    fn step(&mut self) -> Option<usize> {
        let len = self.view.len();
        let next = match self.position {
            None => 0,
            Some(position) => position.saturating_add(1).min(len),
        };
        self.position = Some(next);
        (next < len).then_some(next)
    }

    #[inline]
    pub fn current(&self) -> Result<T, ViewError> {
        match self.position {
            Some(position) => self.view.get(position),
            // Reported as index -1: the slot before the first element.
            None => self.view.get(-1isize),
        }
    }

    fn remaining(&self) -> usize {
        match self.position {
            None => self.view.len(),
            Some(position) => self.view.len().saturating_sub(position.saturating_add(1)),
        }
    }
}

impl<T: Copy, A: Access> Enumerator for Cursor<'_, T, A> {
    type Item = T;

    fn advance(&mut self) -> bool {
        Cursor::advance(self)
    }

    fn current(&self) -> Result<T, ViewError> {
        Cursor::current(self)
    }
}

impl<T: Copy, A: Access> Iterator for Cursor<'_, T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let position = self.step()?;
        // SAFETY: `step` only returns positions below len.
        Some(unsafe { self.view.get_unchecked(position) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Copy, A: Access> ExactSizeIterator for Cursor<'_, T, A> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T: Copy, A: Access> FusedIterator for Cursor<'_, T, A> {}

impl<T: Copy + fmt::Debug, A: Access> fmt::Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("view", &self.view)
            .field("position", &self.position)
            .finish()
    }
}

impl<'a, T: Copy, A: Access> View<'a, T, A> {
    /// A fresh cursor positioned before the first element.
    #[inline]
    pub fn iter(&self) -> Cursor<'a, T, A> {
        Cursor::new(*self)
    }

    /// The elements behind `dyn Iterator`, for callers that cannot name
    /// [`Cursor`].
    pub fn boxed_iter(self) -> Box<dyn Iterator<Item = T> + 'a> {
        Box::new(Cursor::new(self))
    }

    /// The elements behind `dyn Enumerator`.
    pub fn boxed_enumerator(self) -> Box<dyn Enumerator<Item = T> + 'a> {
        Box::new(Cursor::new(self))
    }
}

impl<'a, T: Copy, A: Access> IntoIterator for View<'a, T, A> {
    type Item = T;
    type IntoIter = Cursor<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        Cursor::new(self)
    }
}

impl<'a, T: Copy, A: Access> IntoIterator for &View<'a, T, A> {
    type Item = T;
    type IntoIter = Cursor<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        Cursor::new(*self)
    }
}

#[cfg(test)]
#[path = "iter_test.rs"]
mod iter_test;
