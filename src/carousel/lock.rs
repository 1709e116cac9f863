// SPDX-License-Identifier: MPL-2.0
//! Transition lock serializing rotations.
//!
//! At most one transition may be in flight. Acquiring hands out a
//! [`TransitionTicket`]; only that ticket can release the lock, and only once.

use std::time::{Duration, Instant};

/// Proof of ownership for one held interval of the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

impl TransitionTicket {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    ticket: TransitionTicket,
    since: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionLock {
    held: Option<Held>,
    next_ticket: u64,
}

impl TransitionLock {
    /// Acquires the lock, or returns `None` if a transition is in flight.
    pub fn try_acquire(&mut self, now: Instant) -> Option<TransitionTicket> {
        if self.held.is_some() {
            return None;
        }
        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.held = Some(Held { ticket, since: now });
        Some(ticket)
    }

    /// Releases the lock held by `ticket`.
    ///
    /// Returns `false` for a stale or foreign ticket, leaving the lock as is.
    pub fn release(&mut self, ticket: TransitionTicket) -> bool {
        match self.held {
            Some(held) if held.ticket == ticket => {
                self.held = None;
                true
            }
            _ => false,
        }
    }

    /// Unconditionally drops the held interval, returning its ticket.
    pub fn clear(&mut self) -> Option<TransitionTicket> {
        self.held.take().map(|held| held.ticket)
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// How long the current interval has been open.
    #[must_use]
    pub fn held_for(&self, now: Instant) -> Option<Duration> {
        self.held
            .map(|held| now.saturating_duration_since(held.since))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_then_release() {
        let mut lock = TransitionLock::default();
        let ticket = lock.try_acquire(Instant::now()).expect("free lock");
        assert!(lock.is_held());
        assert!(lock.release(ticket));
        assert!(!lock.is_held());
    }

    #[test]
    fn second_acquire_is_refused() {
        let mut lock = TransitionLock::default();
        let now = Instant::now();
        let first = lock.try_acquire(now);
        assert!(first.is_some());
        assert_eq!(lock.try_acquire(now), None);
        // The refused attempt left the first interval in place
        assert_eq!(lock.clear(), first);
    }

    #[test]
    fn release_happens_once() {
        let mut lock = TransitionLock::default();
        let ticket = lock.try_acquire(Instant::now()).expect("free lock");
        assert!(lock.release(ticket));
        assert!(!lock.release(ticket));
    }

    #[test]
    fn stale_ticket_cannot_release_new_interval() {
        let mut lock = TransitionLock::default();
        let now = Instant::now();
        let old = lock.try_acquire(now).expect("free lock");
        lock.clear();
        let new = lock.try_acquire(now).expect("free lock");
        assert_ne!(old, new);
        assert!(!lock.release(old));
        assert!(lock.is_held());
        assert!(lock.release(new));
    }

    #[test]
    fn held_for_measures_interval() {
        let mut lock = TransitionLock::default();
        let start = Instant::now();
        assert_eq!(lock.held_for(start), None);
        lock.try_acquire(start);
        assert_eq!(
            lock.held_for(start + Duration::from_millis(120)),
            Some(Duration::from_millis(120))
        );
    }
}
