use std::sync::Arc;
use std::time::{Duration, Instant};

use vitrine_core::marquee::MarqueeEngine;
use vitrine_core::typewriter::{Mode as TypeMode, Typewriter};
use vitrine_core::AppConfig;

use crate::cards::CardStrip;
use crate::input::MouseRoute;

/// How long a toast stays visible.
const TOAST_TTL: Duration = Duration::from_secs(3);

/// If the frame clock falls further behind than this, resynchronize
/// instead of replaying the backlog (prevents snapping after long stalls).
const MAX_FRAME_LAG: Duration = Duration::from_millis(250);

/// Entries of the popup menu, in display order.
pub const MENU_ITEMS: [&str; 3] = ["Home", "Projects", "Quit"];

/// Current focus section in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Hero,
    Projects,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Popup menu with the selected entry
    Menu(usize),
}

/// Toast severity, mirrored in the status bar styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Typewriter headline engine
    pub typewriter: Typewriter,
    /// Dual-band marquee engine
    pub marquee: MarqueeEngine,
    /// Project cards strip (the marquee's excluded region)
    pub cards: CardStrip,
    /// Current focus section
    pub focus: Focus,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    toast: Option<Toast>,
    next_type_tick: Instant,
    next_frame: Instant,
    frame_duration: Duration,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        tracing::debug!(cards = config.content.cards.len(), "app state created");
        let typewriter = Typewriter::new(
            config.content.headline_phrases.clone(),
            config.typewriter.clone(),
        );
        let marquee = MarqueeEngine::new(config.marquee.clone());
        let cards = CardStrip::new(config.content.cards.clone());
        let frame_duration = if config.ui.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(config.ui.animation_fps))
        };

        let now = Instant::now();
        Self {
            config,
            typewriter,
            marquee,
            cards,
            focus: Focus::Hero,
            mode: Mode::Normal,
            should_quit: false,
            toast: None,
            next_type_tick: now,
            next_frame: now,
            frame_duration,
        }
    }

    /// Advance both engines to the present and expire stale toasts.
    ///
    /// Called once per loop iteration; the typewriter ticks when its own
    /// delay has elapsed, the marquee replays whole frames so its speed is
    /// independent of how often the loop happens to run.
    pub fn update_animation(&mut self) {
        let now = Instant::now();

        if now >= self.next_type_tick {
            let delay = self.typewriter.tick();
            self.next_type_tick = now + delay;
        }

        if self.marquee.is_live() {
            if now.duration_since(self.next_frame.min(now)) > MAX_FRAME_LAG {
                self.next_frame = now;
            }
            while self.next_frame <= now {
                self.marquee.advance();
                self.next_frame += self.frame_duration;
            }
        } else {
            self.next_frame = now + self.frame_duration;
        }

        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.shown_at.elapsed() >= TOAST_TTL)
        {
            self.toast = None;
        }
    }

    /// Whether the loop should poll at the animation rate instead of the
    /// idle tick rate.
    pub fn needs_animation(&self) -> bool {
        self.marquee.is_live() || self.typewriter.mode() == TypeMode::Deleting
    }

    /// Apply a routed mouse gesture to the owning component.
    pub fn handle_mouse(&mut self, route: MouseRoute) {
        match route {
            MouseRoute::WheelCards(delta) => self.cards.scroll_by(delta),
            MouseRoute::WheelMarquee(delta) => self.marquee.wheel(delta),
            MouseRoute::DragBeginCards(x) => self.cards.drag_begin(x),
            MouseRoute::DragBeginMarquee(y) => self.marquee.drag_begin(y),
            MouseRoute::DragMove { x, y } => {
                // Only the component that anchored the drag reacts.
                self.cards.drag_move(x);
                self.marquee.drag_move(y);
            }
            MouseRoute::DragEnd => {
                self.cards.drag_end();
                self.marquee.drag_end();
            }
            MouseRoute::None => {}
        }
    }

    /// Set an informational toast
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind: ToastKind::Info,
            shown_at: Instant::now(),
        });
    }

    /// Set an error toast
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind: ToastKind::Error,
            shown_at: Instant::now(),
        });
    }

    /// The toast to display, if it has not expired yet.
    pub fn status(&self) -> Option<(&str, ToastKind)> {
        self.toast
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < TOAST_TTL)
            .map(|t| (t.message.as_str(), t.kind))
    }

    pub fn toggle_menu(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Menu(0),
            Mode::Menu(_) => Mode::Normal,
        };
    }

    pub fn menu_next(&mut self) {
        if let Mode::Menu(selected) = &mut self.mode {
            *selected = (*selected + 1) % MENU_ITEMS.len();
        }
    }

    pub fn menu_prev(&mut self) {
        if let Mode::Menu(selected) = &mut self.mode {
            *selected = selected
                .checked_sub(1)
                .unwrap_or(MENU_ITEMS.len() - 1);
        }
    }

    /// Act on the selected menu entry and close the menu.
    pub fn menu_select(&mut self) {
        if let Mode::Menu(selected) = self.mode {
            match MENU_ITEMS[selected] {
                "Home" => self.focus = Focus::Hero,
                "Projects" => self.focus = Focus::Projects,
                "Quit" => self.should_quit = true,
                _ => {}
            }
            self.mode = Mode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()))
    }

    #[test]
    fn test_wheel_routes_do_not_cross() {
        let mut app = app();
        app.handle_mouse(MouseRoute::WheelCards(4.0));
        assert_eq!(app.marquee.velocity(), 0.0);

        let cards_scroll = app.cards.scroll_columns();
        app.handle_mouse(MouseRoute::WheelMarquee(30.0));
        assert!(app.marquee.velocity() > 0.0);
        assert_eq!(app.cards.scroll_columns(), cards_scroll);
    }

    #[test]
    fn test_drag_move_reaches_only_anchored_component() {
        let mut app = app();
        app.handle_mouse(MouseRoute::DragBeginMarquee(20.0));
        app.handle_mouse(MouseRoute::DragMove { x: 10.0, y: 10.0 });
        assert!(app.marquee.velocity() > 0.0);
        assert_eq!(app.cards.scroll_columns(), 0);
        app.handle_mouse(MouseRoute::DragEnd);
        assert!(!app.cards.is_dragging());
    }

    #[test]
    fn test_menu_cycle() {
        let mut app = app();
        app.toggle_menu();
        assert_eq!(app.mode, Mode::Menu(0));
        app.menu_prev();
        assert_eq!(app.mode, Mode::Menu(MENU_ITEMS.len() - 1));
        app.menu_next();
        assert_eq!(app.mode, Mode::Menu(0));
        app.menu_next();
        app.menu_select(); // "Projects"
        assert_eq!(app.focus, Focus::Projects);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_menu_quit() {
        let mut app = app();
        app.toggle_menu();
        app.menu_prev(); // wrap to "Quit"
        app.menu_select();
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_toast() {
        let mut app = app();
        assert!(app.status().is_none());
        app.set_error("boom");
        let (message, kind) = app.status().unwrap();
        assert_eq!(message, "boom");
        assert_eq!(kind, ToastKind::Error);
    }
}
