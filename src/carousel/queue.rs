// SPDX-License-Identifier: MPL-2.0
//! Circular queue of item indices for the rotating stack presentation.
//!
//! The order is always a permutation of `0..N`. The only mutations are
//! [`DisplayOrder::rotate`] (front to back) and [`DisplayOrder::select`],
//! which is a sequence of rotations.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Canonical display order of the catalog in queue mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOrder {
    order: VecDeque<usize>,
}

impl DisplayOrder {
    /// Identity order `[0, 1, .., N-1]`.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            order: (0..len.get()).collect(),
        }
    }

    /// Identity order rotated so that `front` comes first.
    ///
    /// `front` is taken modulo `len`.
    #[must_use]
    pub fn starting_at(len: NonZeroUsize, front: usize) -> Self {
        let mut order = Self::new(len);
        order.order.rotate_left(front % len.get());
        order
    }

    /// Moves the first element to the end.
    pub fn rotate(&mut self) {
        if let Some(front) = self.order.pop_front() {
            self.order.push_back(front);
        }
    }

    /// Rotates until `index` is first.
    ///
    /// Returns `false` if `index` is not part of the order or already first.
    pub fn select(&mut self, index: usize) -> bool {
        match self.order.iter().position(|&i| i == index) {
            Some(0) | None => false,
            Some(position) => {
                self.order.rotate_left(position);
                true
            }
        }
    }

    /// The item currently shown first.
    #[must_use]
    pub fn front(&self) -> usize {
        // Never empty: built from a NonZeroUsize and only ever rotated.
        self.order.front().copied().unwrap_or_default()
    }

    /// Item index shown in marquee slot `slot`, wrapping around the order.
    ///
    /// Slot `N` shows the same item as slot `0`, which is how the continuous
    /// scroll repeats the catalog without duplicating it.
    #[must_use]
    pub fn wrapping(&self, slot: usize) -> usize {
        self.order[slot % self.order.len()]
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.order.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero")
    }

    fn is_permutation(order: &DisplayOrder, n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn new_is_identity() {
        assert_eq!(DisplayOrder::new(len(4)).to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rotate_moves_front_to_back() {
        let mut order = DisplayOrder::new(len(6));
        order.rotate();
        assert_eq!(order.to_vec(), vec![1, 2, 3, 4, 5, 0]);
        assert_eq!(order.front(), 1);
    }

    #[test]
    fn rotate_single_item_is_stable() {
        let mut order = DisplayOrder::new(len(1));
        order.rotate();
        order.rotate();
        assert_eq!(order.to_vec(), vec![0]);
    }

    #[test]
    fn rotations_preserve_permutation_for_many_sizes() {
        for n in 1..=9 {
            let mut order = DisplayOrder::new(len(n));
            for step in 1..=(3 * n) {
                let before = order.to_vec();
                order.rotate();
                assert!(is_permutation(&order, n), "n={n} step={step}");
                assert_eq!(order.len().get(), n);
                // Everything but the old front keeps its relative order.
                let mut expected = before[1..].to_vec();
                expected.push(before[0]);
                assert_eq!(order.to_vec(), expected);
            }
        }
    }

    #[test]
    fn n_rotations_return_to_start() {
        let mut order = DisplayOrder::starting_at(len(5), 2);
        let start = order.clone();
        for _ in 0..5 {
            order.rotate();
        }
        assert_eq!(order, start);
    }

    #[test]
    fn starting_at_rotates_identity() {
        assert_eq!(
            DisplayOrder::starting_at(len(6), 4).to_vec(),
            vec![4, 5, 0, 1, 2, 3]
        );
        assert_eq!(DisplayOrder::starting_at(len(3), 7).front(), 1);
    }

    #[test]
    fn select_brings_item_to_front() {
        let mut order = DisplayOrder::new(len(6));
        assert!(order.select(3));
        assert_eq!(order.to_vec(), vec![3, 4, 5, 0, 1, 2]);
        assert!(!order.select(3), "already first");
        assert!(!order.select(42), "unknown index");
        assert!(is_permutation(&order, 6));
    }

    #[test]
    fn wrapping_repeats_the_order() {
        let mut order = DisplayOrder::new(len(3));
        order.rotate();
        let slots: Vec<usize> = (0..7).map(|slot| order.wrapping(slot)).collect();
        assert_eq!(slots, vec![1, 2, 0, 1, 2, 0, 1]);
    }
}
