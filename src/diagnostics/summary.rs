// SPDX-License-Identifier: MPL-2.0
//! Per-kind counts over recorded carousel events.

use super::events::{CarouselEvent, CarouselEventKind};
use std::collections::BTreeMap;
use std::fmt;

impl CarouselEventKind {
    /// Stable snake_case name of the variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CarouselEventKind::Advanced { .. } => "advanced",
            CarouselEventKind::Selected { .. } => "selected",
            CarouselEventKind::RotationScheduled { .. } => "rotation_scheduled",
            CarouselEventKind::Rotated { .. } => "rotated",
            CarouselEventKind::SwipeCancelled { .. } => "swipe_cancelled",
            CarouselEventKind::TransitionCancelled { .. } => "transition_cancelled",
            CarouselEventKind::Dropped { .. } => "dropped",
            CarouselEventKind::ModeChanged { .. } => "mode_changed",
        }
    }
}

/// Quick overview of what a carousel did, without walking every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    /// Count of events by kind (e.g. `"rotated": 3`).
    pub event_counts: BTreeMap<&'static str, usize>,
}

impl ActivitySummary {
    #[must_use]
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a CarouselEvent>) -> Self {
        let mut event_counts = BTreeMap::new();
        for event in events {
            *event_counts.entry(event.kind.name()).or_insert(0) += 1;
        }
        Self { event_counts }
    }

    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.event_counts.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.event_counts.values().sum()
    }
}

impl fmt::Display for ActivitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.event_counts.is_empty() {
            return write!(f, "no activity");
        }
        let mut first = true;
        for (name, count) in &self.event_counts {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DropReason;
    use std::time::Instant;

    fn event(kind: CarouselEventKind) -> CarouselEvent {
        CarouselEvent::new(kind, Instant::now())
    }

    #[test]
    fn empty_events_give_empty_summary() {
        let summary = ActivitySummary::from_events(&[] as &[CarouselEvent]);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.to_string(), "no activity");
    }

    #[test]
    fn counts_events_by_kind() {
        let events = [
            event(CarouselEventKind::RotationScheduled {
                ticket: 1,
                offset: 120.0,
            }),
            event(CarouselEventKind::Rotated { front: 1 }),
            event(CarouselEventKind::Dropped {
                input: "select",
                reason: DropReason::TransitionInFlight,
            }),
            event(CarouselEventKind::Dropped {
                input: "tick",
                reason: DropReason::WrongMode,
            }),
        ];

        let summary = ActivitySummary::from_events(&events);
        assert_eq!(summary.count("dropped"), 2);
        assert_eq!(summary.count("rotated"), 1);
        assert_eq!(summary.count("advanced"), 0);
        assert_eq!(summary.total(), 4);
        assert_eq!(
            summary.to_string(),
            "dropped=2, rotated=1, rotation_scheduled=1"
        );
    }
}
