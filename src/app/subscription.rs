// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Timers only exist while the carousel needs them: dropping a subscription
//! stops its timer, so leaving the slideshow or the queue cancels the
//! matching clock.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Routes native window, mouse and touch events to carousel messages.
///
/// Pointer events are routed whatever their capture status, so a swipe that
/// starts or ends over a card is still tracked.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, _status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::FingerPressed(position))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::FingerMoved(position))
        }
        Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::FingerLifted),
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::FingerLost),
        _ => None,
    }
}

/// Auto-advance timer, present only while the slideshow runs.
pub fn create_advance_subscription(interval: Option<Duration>) -> Subscription<Message> {
    match interval {
        Some(period) => time::every(period).map(Message::AutoAdvance),
        None => Subscription::none(),
    }
}

/// Frame clock for the marquee drift.
pub fn create_frame_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn route(event: Event) -> Option<Message> {
        route_event(event, event::Status::Ignored, window::Id::unique())
    }

    #[test]
    fn close_request_carries_window_id() {
        let id = window::Id::unique();
        assert_eq!(
            route_event(
                Event::Window(window::Event::CloseRequested),
                event::Status::Ignored,
                id
            ),
            Some(Message::WindowCloseRequested(id))
        );
    }

    #[test]
    fn resize_feeds_mode_signal() {
        let size = Size::new(640.0, 480.0);
        assert_eq!(
            route(Event::Window(window::Event::Resized(size))),
            Some(Message::WindowResized(size))
        );
    }

    #[test]
    fn left_button_drives_gesture() {
        assert_eq!(
            route(Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))),
            Some(Message::PointerPressed)
        );
        assert_eq!(
            route(Event::Mouse(mouse::Event::ButtonReleased(
                mouse::Button::Left
            ))),
            Some(Message::PointerReleased)
        );
        assert_eq!(
            route(Event::Mouse(mouse::Event::ButtonPressed(
                mouse::Button::Right
            ))),
            None
        );
    }

    #[test]
    fn captured_pointer_events_are_still_routed() {
        let position = Point::new(12.0, 34.0);
        assert_eq!(
            route_event(
                Event::Mouse(mouse::Event::CursorMoved { position }),
                event::Status::Captured,
                window::Id::unique()
            ),
            Some(Message::PointerMoved(position))
        );
    }

    #[test]
    fn touch_events_map_to_finger_messages() {
        let finger = touch::Finger(0);
        let position = Point::new(5.0, 5.0);
        assert_eq!(
            route(Event::Touch(touch::Event::FingerPressed {
                id: finger,
                position
            })),
            Some(Message::FingerPressed(position))
        );
        assert_eq!(
            route(Event::Touch(touch::Event::FingerLost {
                id: finger,
                position
            })),
            Some(Message::FingerLost)
        );
    }
}
