use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Focus, Mode};
use crate::cards::WHEEL_STEP;

/// Wheel delta fed to the marquee per scroll notch. A terminal notch is
/// one event, unlike the pixel deltas a browser reports, so it stands in
/// for a small wheel movement.
pub const WHEEL_NOTCH: f64 = 20.0;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleMenu,
    SwitchFocus,
    CardPrev,
    CardNext,
    OpenCard,
    MenuUp,
    MenuDown,
    MenuSelect,
    CloseMenu,
    None,
}

/// Where a mouse gesture is delivered.
///
/// The cards strip is the excluded region: gestures that start inside it
/// never reach the marquee, so the two scroll surfaces do not fight over
/// the same input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseRoute {
    /// Horizontal scroll of the cards strip, in columns
    WheelCards(f64),
    /// Wheel delta for the marquee velocity
    WheelMarquee(f64),
    /// Grab-scroll start inside the cards strip, at column x
    DragBeginCards(f64),
    /// Marquee drag start, at row y
    DragBeginMarquee(f64),
    /// Drag movement; the component that anchored the drag consumes it
    DragMove { x: f64, y: f64 },
    /// Button released, ending any drag
    DragEnd,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if let Mode::Menu(_) = app.mode {
        return handle_menu_mode(key);
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Menu
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,

        // Section focus
        (KeyCode::Tab, KeyModifiers::NONE) => Action::SwitchFocus,

        // Cards navigation when the strip has focus
        (KeyCode::Char('h'), KeyModifiers::NONE) if app.focus == Focus::Projects => {
            Action::CardPrev
        }
        (KeyCode::Char('l'), KeyModifiers::NONE) if app.focus == Focus::Projects => {
            Action::CardNext
        }
        (KeyCode::Left, KeyModifiers::NONE) if app.focus == Focus::Projects => Action::CardPrev,
        (KeyCode::Right, KeyModifiers::NONE) if app.focus == Focus::Projects => Action::CardNext,
        (KeyCode::Enter, KeyModifiers::NONE) if app.focus == Focus::Projects => Action::OpenCard,
        (KeyCode::Char('o'), KeyModifiers::NONE) if app.focus == Focus::Projects => {
            Action::OpenCard
        }

        _ => Action::None,
    }
}

/// Handle key events while the popup menu is open
fn handle_menu_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Enter => Action::MenuSelect,
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => Action::CloseMenu,
        _ => Action::None,
    }
}

/// Route a mouse event by position against the cards strip's area.
pub fn route_mouse_event(mouse: MouseEvent, cards_area: Rect) -> MouseRoute {
    let position = Position::new(mouse.column, mouse.row);
    let in_cards = cards_area.contains(position);
    let x = f64::from(mouse.column);
    let y = f64::from(mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if in_cards {
                MouseRoute::WheelCards(WHEEL_STEP)
            } else {
                MouseRoute::WheelMarquee(WHEEL_NOTCH)
            }
        }
        MouseEventKind::ScrollUp => {
            if in_cards {
                MouseRoute::WheelCards(-WHEEL_STEP)
            } else {
                MouseRoute::WheelMarquee(-WHEEL_NOTCH)
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if in_cards {
                MouseRoute::DragBeginCards(x)
            } else {
                MouseRoute::DragBeginMarquee(y)
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => MouseRoute::DragMove { x, y },
        MouseEventKind::Up(MouseButton::Left) => MouseRoute::DragEnd,
        _ => MouseRoute::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wheel_inside_cards_is_excluded_from_marquee() {
        let cards_area = Rect::new(0, 10, 80, 9);
        let route = route_mouse_event(mouse(MouseEventKind::ScrollDown, 40, 12), cards_area);
        assert_eq!(route, MouseRoute::WheelCards(WHEEL_STEP));
    }

    #[test]
    fn test_wheel_outside_cards_reaches_marquee() {
        let cards_area = Rect::new(0, 10, 80, 9);
        let route = route_mouse_event(mouse(MouseEventKind::ScrollDown, 40, 2), cards_area);
        assert_eq!(route, MouseRoute::WheelMarquee(WHEEL_NOTCH));

        let route = route_mouse_event(mouse(MouseEventKind::ScrollUp, 40, 2), cards_area);
        assert_eq!(route, MouseRoute::WheelMarquee(-WHEEL_NOTCH));
    }

    #[test]
    fn test_drag_routing_by_origin() {
        let cards_area = Rect::new(0, 10, 80, 9);
        let begin_inside =
            route_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 11), cards_area);
        assert_eq!(begin_inside, MouseRoute::DragBeginCards(5.0));

        let begin_outside =
            route_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1), cards_area);
        assert_eq!(begin_outside, MouseRoute::DragBeginMarquee(1.0));

        let up = route_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 1), cards_area);
        assert_eq!(up, MouseRoute::DragEnd);
    }

    #[test]
    fn test_card_keys_require_projects_focus() {
        let mut app = App::new(std::sync::Arc::new(vitrine_core::AppConfig::default()));
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app), Action::None);

        app.focus = Focus::Projects;
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app), Action::CardNext);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::OpenCard);
    }

    #[test]
    fn test_menu_mode_captures_keys() {
        let mut app = App::new(std::sync::Arc::new(vitrine_core::AppConfig::default()));
        app.toggle_menu();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::MenuDown);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::CloseMenu);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::MenuSelect);
    }
}
