// SPDX-License-Identifier: MPL-2.0
//! Application root state: the iced host around the carousel controller.
//!
//! The `App` struct plays every external collaborator of the controller. It
//! derives the mode signal from the window width, feeds pointer and touch
//! samples to the gesture tracker, owns the timers and draws the result.
//! Controller effects are turned into tasks here, and the pending transition
//! task is aborted whenever the controller says so or the window closes.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{Carousel, Effect, Mode};
use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::diagnostics::ActivitySummary;
use crate::ui::theming::ThemeMode;
use iced::{task, window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Largest marquee step taken from a single frame tick.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Root Iced application state.
pub struct App {
    carousel: Option<Carousel>,
    config: Config,
    theme_mode: ThemeMode,
    viewport: Size,
    /// Last cursor position; mouse presses do not carry one.
    cursor: Point,
    /// Delay task of the pending rotation.
    transition: Option<task::Handle>,
    last_frame: Option<Instant>,
    load_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.carousel.as_ref().map(Carousel::mode))
            .field("viewport", &self.viewport)
            .field("transition_pending", &self.transition.is_some())
            .finish()
    }
}

/// Builds the window settings.
///
/// Close requests are handled by the app so the carousel is torn down
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and catalog, then mounts the carousel.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, _warning) = config::load();
        if let Some(mode) = flags.mode {
            config.display.forced_mode = Some(mode);
        }

        let catalog = match flags.catalog_path.as_deref() {
            Some(path) => Catalog::load_from_path(std::path::Path::new(path)).map_err(|err| {
                log::error!("failed to load catalog {}: {}", path, err);
                err.to_string()
            }),
            None => Catalog::builtin().map_err(|err| {
                log::error!("built-in catalog unavailable: {}", err);
                err.to_string()
            }),
        };

        let viewport = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let app = match catalog {
            Ok(catalog) => Self::with_catalog(config, catalog, viewport),
            Err(message) => {
                let mut app = Self::empty(config, viewport);
                app.load_error = Some(message);
                app
            }
        };

        (app, Task::none())
    }

    /// Mounts a carousel over `catalog` for a window of size `viewport`.
    fn with_catalog(config: Config, catalog: Catalog, viewport: Size) -> Self {
        let compact = config.is_compact_width(viewport.width);
        let carousel = Carousel::new(catalog, config.carousel_settings(), compact);
        Self {
            carousel: Some(carousel),
            ..Self::empty(config, viewport)
        }
    }

    fn empty(config: Config, viewport: Size) -> Self {
        Self {
            carousel: None,
            theme_mode: config.general.theme_mode,
            config,
            viewport,
            cursor: Point::ORIGIN,
            transition: None,
            last_frame: None,
            load_error: None,
        }
    }

    fn title(&self) -> String {
        match self.carousel.as_ref().and_then(Carousel::active_item) {
            Some(item) => format!("{} - Showcase", item.title),
            None => "Showcase".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let Some(carousel) = &self.carousel else {
            return event_sub;
        };

        let advance_sub =
            subscription::create_advance_subscription(carousel.auto_advance_interval());
        let drifting =
            carousel.mode() == Mode::Queue && !carousel.settings().marquee_speed.is_stopped();
        let frame_sub = subscription::create_frame_subscription(drifting);

        Subscription::batch([event_sub, advance_sub, frame_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(
            self.carousel.as_ref(),
            self.viewport,
            self.load_error.as_deref(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::WindowCloseRequested(id) = message {
            self.shutdown();
            return window::close(id);
        }
        if let Message::PointerMoved(position) = message {
            self.cursor = position;
        }

        let Some(carousel) = self.carousel.as_mut() else {
            return Task::none();
        };

        let effect = match message {
            Message::AutoAdvance(_) => {
                carousel.tick();
                Effect::None
            }
            Message::Frame(now) => {
                let elapsed = self
                    .last_frame
                    .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
                    .min(MAX_FRAME_STEP);
                self.last_frame = Some(now);
                carousel.frame(elapsed);
                Effect::None
            }
            Message::WindowResized(size) => {
                self.viewport = size;
                let effect = carousel.set_compact(self.config.is_compact_width(size.width));
                if carousel.mode() == Mode::Slideshow {
                    self.last_frame = None;
                }
                effect
            }
            Message::PointerPressed => {
                carousel.gesture_start(self.cursor);
                Effect::None
            }
            Message::FingerPressed(position) => {
                carousel.gesture_start(position);
                Effect::None
            }
            Message::PointerMoved(position) | Message::FingerMoved(position) => {
                carousel.gesture_move(position);
                Effect::None
            }
            Message::PointerReleased | Message::FingerLifted => carousel.gesture_end(),
            Message::PointerLeft | Message::FingerLost => {
                carousel.gesture_cancel();
                Effect::None
            }
            Message::SelectItem(index) => {
                // A press on a card arrives while its tap is still tracked
                let effect = carousel.gesture_end();
                carousel.select(index);
                effect
            }
            Message::MarqueeHovered(hovered) => {
                carousel.set_hovered(hovered);
                Effect::None
            }
            Message::TransitionElapsed(ticket) => {
                if carousel.transition_elapsed(ticket) {
                    self.transition = None;
                }
                Effect::None
            }
            Message::WindowCloseRequested(_) => Effect::None,
        };

        self.apply(effect)
    }

    /// Turns a controller effect into runtime work.
    fn apply(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::ScheduleTransition { ticket, delay } => {
                let (task, handle) = Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::TransitionElapsed(ticket),
                )
                .abortable();
                self.transition = Some(handle.abort_on_drop());
                task
            }
            Effect::CancelTransition => {
                if let Some(handle) = self.transition.take() {
                    log::debug!("aborting pending transition");
                    handle.abort();
                }
                Task::none()
            }
        }
    }

    /// Unmounts the carousel and stops its pending timer.
    fn shutdown(&mut self) {
        if let Some(carousel) = self.carousel.take() {
            log::debug!(
                "carousel activity: {}",
                ActivitySummary::from_events(carousel.events().iter())
            );
            if let Some(age) = carousel.transition_age() {
                log::debug!("closing with a rotation pending for {:?}", age);
            }
            if carousel.teardown() == Effect::CancelTransition {
                log::debug!("pending rotation discarded");
            }
        }
        if let Some(handle) = self.transition.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::config::ForcedMode;
    use crate::diagnostics::CarouselEventKind;

    fn catalog() -> Catalog {
        Catalog::new((1..=4).map(|id| Item::new(id, format!("Item {}", id))).collect())
            .expect("valid catalog")
    }

    fn wide_app() -> App {
        App::with_catalog(Config::default(), catalog(), Size::new(1280.0, 720.0))
    }

    fn carousel(app: &App) -> &Carousel {
        app.carousel.as_ref().expect("mounted carousel")
    }

    fn swipe(app: &mut App, from: f32, to: f32) {
        let _ = app.update(Message::PointerMoved(Point::new(from, 100.0)));
        let _ = app.update(Message::PointerPressed);
        let _ = app.update(Message::PointerMoved(Point::new(to, 100.0)));
        let _ = app.update(Message::PointerReleased);
    }

    #[test]
    fn initial_mode_follows_window_width() {
        assert_eq!(carousel(&wide_app()).mode(), Mode::Queue);

        let narrow = App::with_catalog(Config::default(), catalog(), Size::new(400.0, 800.0));
        assert_eq!(carousel(&narrow).mode(), Mode::Slideshow);
    }

    #[test]
    fn forced_mode_wins_over_width() {
        let mut config = Config::default();
        config.display.forced_mode = Some(ForcedMode::Compact);
        let mut app = App::with_catalog(config, catalog(), Size::new(1920.0, 1080.0));
        assert_eq!(carousel(&app).mode(), Mode::Slideshow);

        let _ = app.update(Message::WindowResized(Size::new(2560.0, 1440.0)));
        assert_eq!(carousel(&app).mode(), Mode::Slideshow);
    }

    #[test]
    fn resize_switches_presentation() {
        let mut app = wide_app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 800.0)));
        assert_eq!(carousel(&app).mode(), Mode::Slideshow);
        assert_eq!(app.viewport.width, 600.0);

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 800.0)));
        assert_eq!(carousel(&app).mode(), Mode::Queue);
    }

    #[test]
    fn committed_swipe_schedules_transition() {
        let mut app = wide_app();
        swipe(&mut app, 500.0, 300.0);

        assert!(app.transition.is_some());
        assert!(carousel(&app).is_transitioning());
        assert_eq!(carousel(&app).display_order().map(|o| o.front()), Some(0));

        assert!(matches!(
            carousel(&app).events().last().map(|event| &event.kind),
            Some(CarouselEventKind::RotationScheduled { .. })
        ));
    }

    #[test]
    fn transition_elapsed_applies_rotation_and_clears_handle() {
        let mut app = wide_app();
        let effect = app
            .carousel
            .as_mut()
            .map(|carousel| {
                carousel.gesture_start(Point::new(0.0, 0.0));
                carousel.gesture_move(Point::new(200.0, 0.0));
                carousel.gesture_end()
            })
            .expect("mounted carousel");
        let Effect::ScheduleTransition { ticket, .. } = effect else {
            panic!("expected scheduled transition, got {:?}", effect);
        };
        let _ = app.apply(effect);
        assert!(app.transition.is_some());

        let _ = app.update(Message::TransitionElapsed(ticket));
        assert!(app.transition.is_none());
        assert!(!carousel(&app).is_transitioning());
        assert_eq!(carousel(&app).display_order().map(|o| o.front()), Some(1));
    }

    #[test]
    fn short_drag_does_not_schedule() {
        let mut app = wide_app();
        swipe(&mut app, 500.0, 460.0);
        assert!(app.transition.is_none());
        assert!(!carousel(&app).is_transitioning());
    }

    #[test]
    fn mode_switch_aborts_pending_transition() {
        let mut app = wide_app();
        swipe(&mut app, 500.0, 200.0);
        assert!(app.transition.is_some());

        let _ = app.update(Message::WindowResized(Size::new(500.0, 800.0)));
        assert!(app.transition.is_none());
        assert!(!carousel(&app).is_transitioning());
        assert_eq!(carousel(&app).cursor(), Some(0));
    }

    #[test]
    fn resize_drops_gesture_in_progress() {
        let mut app = wide_app();
        let _ = app.update(Message::PointerMoved(Point::new(500.0, 100.0)));
        let _ = app.update(Message::PointerPressed);
        let _ = app.update(Message::PointerMoved(Point::new(200.0, 100.0)));
        assert!(carousel(&app).is_tracking());

        let _ = app.update(Message::WindowResized(Size::new(500.0, 800.0)));
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 800.0)));
        assert!(!carousel(&app).is_tracking());
        assert_eq!(carousel(&app).live_offset(), 0.0);

        let _ = app.update(Message::PointerReleased);
        assert!(app.transition.is_none());
        assert!(!carousel(&app).is_transitioning());
    }

    #[test]
    fn stale_transition_keeps_pending_handle() {
        let mut app = wide_app();
        let effect = app
            .carousel
            .as_mut()
            .map(|carousel| {
                carousel.gesture_start(Point::new(0.0, 0.0));
                carousel.gesture_move(Point::new(200.0, 0.0));
                carousel.gesture_end()
            })
            .expect("mounted carousel");
        let Effect::ScheduleTransition { ticket: stale, .. } = effect else {
            panic!("expected scheduled transition, got {:?}", effect);
        };
        let _ = app.update(Message::TransitionElapsed(stale));

        swipe(&mut app, 500.0, 200.0);
        assert!(app.transition.is_some());

        // A delivery for an already applied rotation leaves the live one alone
        let _ = app.update(Message::TransitionElapsed(stale));
        assert!(app.transition.is_some());
        assert!(carousel(&app).is_transitioning());
    }

    #[test]
    fn tap_on_card_selects_it() {
        let mut app = wide_app();
        let _ = app.update(Message::PointerMoved(Point::new(900.0, 100.0)));
        let _ = app.update(Message::PointerPressed);
        let _ = app.update(Message::SelectItem(2));
        let _ = app.update(Message::PointerReleased);

        assert_eq!(carousel(&app).display_order().map(|o| o.front()), Some(2));
        assert!(!carousel(&app).is_tracking());
    }

    #[test]
    fn touch_swipe_commits_like_mouse() {
        let mut app = wide_app();
        let _ = app.update(Message::FingerPressed(Point::new(100.0, 50.0)));
        let _ = app.update(Message::FingerMoved(Point::new(250.0, 60.0)));
        let _ = app.update(Message::FingerLifted);
        assert!(app.transition.is_some());
    }

    #[test]
    fn lost_finger_cancels_gesture() {
        let mut app = wide_app();
        let _ = app.update(Message::FingerPressed(Point::new(100.0, 50.0)));
        let _ = app.update(Message::FingerMoved(Point::new(400.0, 50.0)));
        let _ = app.update(Message::FingerLost);
        let _ = app.update(Message::FingerLifted);
        assert!(app.transition.is_none());
        assert!(!carousel(&app).is_tracking());
    }

    #[test]
    fn frame_step_is_capped() {
        let mut app = wide_app();
        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        let _ = app.update(Message::Frame(start + Duration::from_secs(5)));

        let phase = carousel(&app).marquee().map(|m| m.phase()).unwrap_or_default();
        // 40 px/s over at most 100 ms
        assert!(phase <= 4.0 + f32::EPSILON);
        assert!(phase > 0.0);
    }

    #[test]
    fn auto_advance_moves_slideshow() {
        let mut app = App::with_catalog(Config::default(), catalog(), Size::new(400.0, 800.0));
        let _ = app.update(Message::AutoAdvance(Instant::now()));
        assert_eq!(carousel(&app).cursor(), Some(1));
    }

    #[test]
    fn shutdown_unmounts_carousel() {
        let mut app = wide_app();
        swipe(&mut app, 500.0, 200.0);
        app.shutdown();
        assert!(app.carousel.is_none());
        assert!(app.transition.is_none());

        // Late timer deliveries have nothing left to mutate
        let _ = app.update(Message::AutoAdvance(Instant::now()));
        assert!(app.carousel.is_none());
    }

    #[test]
    fn title_names_active_item() {
        assert_eq!(wide_app().title(), "Item 1 - Showcase");
    }
}
