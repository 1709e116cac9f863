// SPDX-License-Identifier: MPL-2.0
//! Single-item cursor for the slideshow presentation.

use std::num::NonZeroUsize;

/// Index of the item shown by the slideshow, always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: NonZeroUsize,
}

impl Cursor {
    /// Cursor positioned on `index` (taken modulo `len`).
    #[must_use]
    pub fn new(len: NonZeroUsize, index: usize) -> Self {
        Self {
            index: index % len.get(),
            len,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> NonZeroUsize {
        self.len
    }

    /// `cursor = (cursor + 1) mod N`.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if the cursor moved.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len.get() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }
}
