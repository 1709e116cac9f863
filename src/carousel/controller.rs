// SPDX-License-Identifier: MPL-2.0
//! Carousel controller: mode selection and transition serialization.
//!
//! The controller owns exactly one presentation at a time. Compact mode runs
//! the auto-advancing slideshow over a [`Cursor`]; wide mode runs the
//! swipe-driven rotating queue over a [`DisplayOrder`] with a drifting
//! marquee. Switching modes converts one representation into the other so
//! both agree on the item currently in front.
//!
//! Timers are owned by the host. The controller only reports what it needs:
//! [`Carousel::auto_advance_interval`] while the slideshow runs, and an
//! [`Effect`] when a transition delay must be scheduled or aborted.

use super::cursor::Cursor;
use super::gesture::{GestureOutcome, SwipeTracker};
use super::lock::{TransitionLock, TransitionTicket};
use super::marquee::MarqueeState;
use super::queue::DisplayOrder;
use crate::catalog::{Catalog, Item, ItemId};
use crate::diagnostics::{CarouselEvent, CarouselEventKind, CircularBuffer, DropReason};
use crate::domain::carousel::{
    AdvanceInterval, CardStride, MarqueeSpeed, SwipeThreshold, TransitionDelay,
};
use iced::Point;
use std::time::{Duration, Instant};

/// Timing and geometry used by a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselSettings {
    pub advance_interval: AdvanceInterval,
    pub transition_delay: TransitionDelay,
    pub swipe_threshold: SwipeThreshold,
    pub marquee_speed: MarqueeSpeed,
    pub card_stride: CardStride,
}

/// Which presentation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Auto-advancing single item (compact screens).
    Slideshow,
    /// Swipe-driven rotating stack with marquee (wide screens).
    Queue,
}

impl Mode {
    #[must_use]
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            Mode::Slideshow
        } else {
            Mode::Queue
        }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        self == Mode::Slideshow
    }
}

/// Work the host must do after a controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Effect {
    None,
    /// Deliver [`Carousel::transition_elapsed`] with `ticket` after `delay`.
    ScheduleTransition {
        ticket: TransitionTicket,
        delay: Duration,
    },
    /// Abort the pending transition-delay timer.
    CancelTransition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRotation {
    ticket: TransitionTicket,
    /// Release offset, kept on screen until the rotation lands.
    offset: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct QueueState {
    order: DisplayOrder,
    tracker: SwipeTracker,
    pending: Option<PendingRotation>,
    marquee: MarqueeState,
}

impl QueueState {
    fn new(order: DisplayOrder, settings: &CarouselSettings) -> Self {
        Self {
            order,
            tracker: SwipeTracker::default(),
            pending: None,
            marquee: MarqueeState::new(settings.marquee_speed, settings.card_stride),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Presentation {
    Slideshow { cursor: Cursor },
    Queue(QueueState),
}

/// A mounted carousel over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Carousel {
    catalog: Catalog,
    settings: CarouselSettings,
    presentation: Presentation,
    lock: TransitionLock,
    events: CircularBuffer<CarouselEvent>,
}

impl Carousel {
    /// Mounts a carousel showing the first catalog item.
    #[must_use]
    pub fn new(catalog: Catalog, settings: CarouselSettings, compact: bool) -> Self {
        let len = catalog.len();
        let presentation = match Mode::from_compact(compact) {
            Mode::Slideshow => Presentation::Slideshow {
                cursor: Cursor::new(len, 0),
            },
            Mode::Queue => Presentation::Queue(QueueState::new(DisplayOrder::new(len), &settings)),
        };
        log::debug!(
            "carousel mounted with {} items in {:?} mode",
            len,
            Mode::from_compact(compact)
        );

        Self {
            catalog,
            settings,
            presentation,
            lock: TransitionLock::default(),
            events: CircularBuffer::default(),
        }
    }

    // =========================================================================
    // Slideshow
    // =========================================================================

    /// Period of the auto-advance timer while it should run, `None` otherwise.
    #[must_use]
    pub fn auto_advance_interval(&self) -> Option<Duration> {
        match self.presentation {
            Presentation::Slideshow { .. } => Some(self.settings.advance_interval.as_duration()),
            Presentation::Queue(_) => None,
        }
    }

    /// Handles one auto-advance timer fire.
    ///
    /// Returns `true` if the cursor moved.
    pub fn tick(&mut self) -> bool {
        if self.lock.is_held() {
            self.record_drop("tick", DropReason::TransitionInFlight);
            return false;
        }
        let Presentation::Slideshow { cursor } = &mut self.presentation else {
            self.record_drop("tick", DropReason::WrongMode);
            return false;
        };

        cursor.advance();
        let index = cursor.index();
        log::trace!("slideshow advanced to {}", index);
        self.record(CarouselEventKind::Advanced { cursor: index });
        true
    }

    /// Brings `index` to the front without threshold logic.
    ///
    /// In slideshow mode this moves the cursor and leaves the timer alone.
    /// In queue mode the order is rotated; refused while a gesture or a
    /// transition is in progress. Returns `true` if anything changed.
    pub fn select(&mut self, index: usize) -> bool {
        let changed = match &mut self.presentation {
            Presentation::Slideshow { cursor } => cursor.select(index),
            Presentation::Queue(queue) => {
                if queue.pending.is_some() || self.lock.is_held() {
                    self.record_drop("select", DropReason::TransitionInFlight);
                    return false;
                }
                if queue.tracker.is_tracking() {
                    self.record_drop("select", DropReason::GestureInProgress);
                    return false;
                }
                queue.order.select(index)
            }
        };

        if changed {
            log::debug!("selected item {}", index);
            self.record(CarouselEventKind::Selected { index });
        }
        changed
    }

    // =========================================================================
    // Swipe
    // =========================================================================

    /// Pointer or finger went down.
    pub fn gesture_start(&mut self, position: Point) -> bool {
        let Presentation::Queue(queue) = &mut self.presentation else {
            self.record_drop("gesture_start", DropReason::WrongMode);
            return false;
        };
        if self.lock.is_held() {
            self.record_drop("gesture_start", DropReason::TransitionInFlight);
            return false;
        }
        if !queue.tracker.start(position) {
            self.record_drop("gesture_start", DropReason::GestureInProgress);
            return false;
        }
        true
    }

    /// Pointer or finger moved. Returns `true` if a gesture is tracked.
    pub fn gesture_move(&mut self, position: Point) -> bool {
        match &mut self.presentation {
            Presentation::Queue(queue) => queue.tracker.update(position).is_some(),
            Presentation::Slideshow { .. } => false,
        }
    }

    /// Pointer or finger was released.
    ///
    /// Past the threshold this acquires the transition lock and asks the host
    /// to schedule the rotation; otherwise the offset snaps back to zero.
    pub fn gesture_end(&mut self) -> Effect {
        let Presentation::Queue(queue) = &mut self.presentation else {
            return Effect::None;
        };
        let Some(outcome) = queue.tracker.finish(self.settings.swipe_threshold) else {
            return Effect::None;
        };

        let offset = match outcome {
            GestureOutcome::Cancel { offset } => {
                self.record(CarouselEventKind::SwipeCancelled { offset });
                return Effect::None;
            }
            GestureOutcome::Commit { offset } => offset,
        };

        let Some(ticket) = self.lock.try_acquire(Instant::now()) else {
            self.record_drop("gesture_end", DropReason::TransitionInFlight);
            return Effect::None;
        };

        queue.pending = Some(PendingRotation { ticket, offset });
        let delay = self.settings.transition_delay.as_duration();
        log::debug!(
            "swipe committed at {:.1}px, rotation {} due in {:?}",
            offset,
            ticket.id(),
            delay
        );
        self.record(CarouselEventKind::RotationScheduled {
            ticket: ticket.id(),
            offset,
        });
        Effect::ScheduleTransition { ticket, delay }
    }

    /// Pointer left or the touch was lost: drop the gesture without
    /// evaluating it.
    pub fn gesture_cancel(&mut self) -> bool {
        let Presentation::Queue(queue) = &mut self.presentation else {
            return false;
        };
        let offset = queue.tracker.offset();
        if !queue.tracker.cancel() {
            return false;
        }
        self.record(CarouselEventKind::SwipeCancelled { offset });
        true
    }

    /// The transition delay for `ticket` elapsed.
    ///
    /// Applies the pending rotation once, releases the lock and zeroes the
    /// offset. Returns `false` when `ticket` is not the pending transition.
    pub fn transition_elapsed(&mut self, ticket: TransitionTicket) -> bool {
        let Presentation::Queue(queue) = &mut self.presentation else {
            return false;
        };
        match queue.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                log::trace!("ignoring stale transition {}", ticket.id());
                return false;
            }
        }

        queue.pending = None;
        queue.order.rotate();
        let front = queue.order.front();
        let released = self.lock.release(ticket);
        debug_assert!(released, "pending rotation must own the lock");

        log::debug!("rotation {} applied, front is now {}", ticket.id(), front);
        self.record(CarouselEventKind::Rotated { front });
        true
    }

    // =========================================================================
    // Marquee
    // =========================================================================

    /// Advances the marquee by one frame. Returns `true` if it moved.
    pub fn frame(&mut self, elapsed: Duration) -> bool {
        let len = self.catalog.len();
        match &mut self.presentation {
            Presentation::Queue(queue) => {
                let held = queue.tracker.is_tracking() || queue.pending.is_some();
                queue.marquee.advance(elapsed, len, held)
            }
            Presentation::Slideshow { .. } => false,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if let Presentation::Queue(queue) = &mut self.presentation {
            queue.marquee.set_hovered(hovered);
        }
    }

    // =========================================================================
    // Mode selection and lifecycle
    // =========================================================================

    /// Applies the mode signal.
    ///
    /// The inactive presentation's state is torn down: a pending rotation is
    /// discarded and its timer must be aborted by the host.
    pub fn set_compact(&mut self, compact: bool) -> Effect {
        let target = Mode::from_compact(compact);
        if target == self.mode() {
            return Effect::None;
        }

        let len = self.catalog.len();
        let front = self.active_index();
        let effect = self.cancel_pending();

        self.presentation = match target {
            Mode::Slideshow => Presentation::Slideshow {
                cursor: Cursor::new(len, front),
            },
            Mode::Queue => Presentation::Queue(QueueState::new(
                DisplayOrder::starting_at(len, front),
                &self.settings,
            )),
        };

        log::debug!("switched to {:?} mode with item {} in front", target, front);
        self.record(CarouselEventKind::ModeChanged { compact, front });
        effect
    }

    /// Unmounts the carousel.
    ///
    /// Consumes the controller so no timer callback can reach it afterwards;
    /// the host must still abort the delay task when told to.
    pub fn teardown(mut self) -> Effect {
        let effect = self.cancel_pending();
        log::debug!("carousel torn down");
        effect
    }

    fn cancel_pending(&mut self) -> Effect {
        let pending = match &mut self.presentation {
            Presentation::Queue(queue) => {
                queue.tracker.cancel();
                queue.pending.take()
            }
            Presentation::Slideshow { .. } => None,
        };
        self.lock.clear();

        match pending {
            Some(pending) => {
                self.record(CarouselEventKind::TransitionCancelled {
                    ticket: pending.ticket.id(),
                });
                Effect::CancelTransition
            }
            None => Effect::None,
        }
    }

    // =========================================================================
    // Renderer outputs
    // =========================================================================

    #[must_use]
    pub fn mode(&self) -> Mode {
        match self.presentation {
            Presentation::Slideshow { .. } => Mode::Slideshow,
            Presentation::Queue(_) => Mode::Queue,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Slideshow cursor, `None` in queue mode.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match &self.presentation {
            Presentation::Slideshow { cursor } => Some(cursor.index()),
            Presentation::Queue(_) => None,
        }
    }

    /// Queue order, `None` in slideshow mode.
    #[must_use]
    pub fn display_order(&self) -> Option<&DisplayOrder> {
        match &self.presentation {
            Presentation::Queue(queue) => Some(&queue.order),
            Presentation::Slideshow { .. } => None,
        }
    }

    /// Queue order as item identifiers, empty in slideshow mode.
    #[must_use]
    pub fn order_ids(&self) -> Vec<ItemId> {
        self.display_order()
            .map(|order| {
                order
                    .iter()
                    .filter_map(|index| self.catalog.get(index).map(|item| item.id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Horizontal offset to draw the queue with; 0 when idle.
    #[must_use]
    pub fn live_offset(&self) -> f32 {
        match &self.presentation {
            Presentation::Queue(queue) => match queue.pending {
                Some(pending) => pending.offset,
                None => queue.tracker.offset(),
            },
            Presentation::Slideshow { .. } => 0.0,
        }
    }

    #[must_use]
    pub fn marquee(&self) -> Option<&MarqueeState> {
        match &self.presentation {
            Presentation::Queue(queue) => Some(&queue.marquee),
            Presentation::Slideshow { .. } => None,
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(&self.presentation, Presentation::Queue(queue) if queue.tracker.is_tracking())
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.lock.is_held()
    }

    /// How long the current transition has been in flight.
    #[must_use]
    pub fn transition_age(&self) -> Option<Duration> {
        self.lock.held_for(Instant::now())
    }

    /// Index of the highlighted item: the cursor, or the queue front.
    #[must_use]
    pub fn active_index(&self) -> usize {
        match &self.presentation {
            Presentation::Slideshow { cursor } => cursor.index(),
            Presentation::Queue(queue) => queue.order.front(),
        }
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&Item> {
        self.catalog.get(self.active_index())
    }

    /// `(index, is_active)` for every item, in catalog order.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        let active = self.active_index();
        (0..self.catalog.len().get()).map(move |index| (index, index == active))
    }

    #[must_use]
    pub fn events(&self) -> &CircularBuffer<CarouselEvent> {
        &self.events
    }

    fn record(&mut self, kind: CarouselEventKind) {
        self.events.push(CarouselEvent::new(kind, Instant::now()));
    }

    fn record_drop(&mut self, input: &'static str, reason: DropReason) {
        log::trace!("dropped {}: {:?}", input, reason);
        self.record(CarouselEventKind::Dropped { input, reason });
    }
}
