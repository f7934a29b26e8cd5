//! String helpers over byte views.
//!
//! These work on any `View<u8>`, whether it came from a `str`, a byte slice,
//! or raw memory. Positions are byte offsets. Matching is byte-exact: no
//! case folding, no normalization.
//!
//! Needles are anything convertible into a read-only byte view: `&str`,
//! `&[u8]`, `&[u8; N]`, or another [`View`].
//!
//! ```
//! use memview_core::ViewExt;
//!
//! let line = "key=value;other=thing".view();
//! assert_eq!(line.index_of("="), Some(3));
//! assert_eq!(line.last_index_of("="), Some(15));
//!
//! let fields: Vec<_> = line.split(b";").map(|field| field.to_vec()).collect();
//! assert_eq!(fields, [b"key=value".to_vec(), b"other=thing".to_vec()]);
//! ```

use core::iter::FusedIterator;
use core::str::Utf8Error;

use crate::contract;
use crate::view::{Access, ReadOnly, View};

impl<'a, A: Access> View<'a, u8, A> {
    /// `true` if `needle` occurs at byte offset `at`.
    fn matches_at(&self, at: usize, needle: View<'_, u8>) -> bool {
        match self.sub(at, at + needle.len()) {
            Ok(window) => window.content_eq(&needle),
            Err(_) => false,
        }
    }

    pub fn starts_with<'n>(&self, prefix: impl Into<View<'n, u8>>) -> bool {
        self.matches_at(0, prefix.into())
    }

    pub fn ends_with<'n>(&self, suffix: impl Into<View<'n, u8>>) -> bool {
        let suffix = suffix.into();
        match self.len().checked_sub(suffix.len()) {
            Some(at) => self.matches_at(at, suffix),
            None => false,
        }
    }

    pub fn contains<'n>(&self, needle: impl Into<View<'n, u8>>) -> bool {
        self.index_of(needle).is_some()
    }

    /// Offset of the first occurrence of `needle`. An empty needle matches at 0.
    pub fn index_of<'n>(&self, needle: impl Into<View<'n, u8>>) -> Option<usize> {
        let needle = needle.into();
        let last = self.len().checked_sub(needle.len())?;
        (0..=last).find(|&at| self.matches_at(at, needle))
    }

    /// Offset of the last occurrence of `needle`. An empty needle matches at `len`.
    pub fn last_index_of<'n>(&self, needle: impl Into<View<'n, u8>>) -> Option<usize> {
        let needle = needle.into();
        let last = self.len().checked_sub(needle.len())?;
        (0..=last).rev().find(|&at| self.matches_at(at, needle))
    }

    pub fn index_of_byte(&self, byte: u8) -> Option<usize> {
        self.iter().position(|b| b == byte)
    }

    pub fn last_index_of_byte(&self, byte: u8) -> Option<usize> {
        (0..self.len()).rev().find(|&at| self.get(at) == Ok(byte))
    }

    /// Offset of the first byte that appears in `bytes`.
    pub fn index_of_any(&self, bytes: &[u8]) -> Option<usize> {
        self.iter().position(|b| bytes.contains(&b))
    }

    /// Offset of the last byte that appears in `bytes`.
    pub fn last_index_of_any(&self, bytes: &[u8]) -> Option<usize> {
        (0..self.len())
            .rev()
            .find(|&at| self.get(at).is_ok_and(|b| bytes.contains(&b)))
    }

    /// Splits on every byte in `separators`, yielding sub-views.
    ///
    /// Behaves like `str::split` with a set of single-byte patterns: adjacent
    /// separators produce empty pieces, and an empty view yields one empty
    /// piece. No allocation happens.
    pub fn split<'s>(&self, separators: &'s [u8]) -> Split<'a, 's, A> {
        Split {
            rest: *self,
            separators,
            finished: false,
        }
    }
}

impl<'a> View<'a, u8, ReadOnly> {
    /// Borrows the bytes as a `str` if they are valid UTF-8.
    ///
    /// A view cut from a `str` at a non-character boundary fails here.
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        // u8 has alignment 1, so `as_slice` always succeeds.
        let bytes = self.as_slice().unwrap_or_else(|| contract::abandon());
        core::str::from_utf8(bytes)
    }
}

/// Iterator returned by [`View::split`].
#[derive(Debug, Clone)]
pub struct Split<'a, 's, A: Access> {
    rest: View<'a, u8, A>,
    separators: &'s [u8],
    finished: bool,
}

impl<'a, A: Access> Iterator for Split<'a, '_, A> {
    type Item = View<'a, u8, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(at) = self.rest.index_of_any(self.separators) else {
            self.finished = true;
            return Some(self.rest);
        };
        // `at` indexes a byte of `rest`, so both bounds are in range.
        let piece = self.rest.sub(0, at).unwrap_or_else(|_| contract::abandon());
        self.rest = self
            .rest
            .sub_from(at + 1)
            .unwrap_or_else(|_| contract::abandon());
        Some(piece)
    }
}

impl<A: Access> FusedIterator for Split<'_, '_, A> {}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
