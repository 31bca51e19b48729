use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};

use vitrine_core::AppConfig;
use vitrine_tui::{
    app::{App, Focus, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, route_mouse_event, Action},
    widgets::{CardsWidget, HeroWidget, MenuWidget, RibbonWidget, Side, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    tracing::info!("starting vitrine");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Vitrine")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Create app state
    let mut app = App::new(config);

    // Track if we need high frame rate for live animations
    // This is checked at the END of each iteration to determine NEXT iteration's tick rate
    let mut needs_fast_update = false;

    // Cards area from the last layout pass; mouse events are routed
    // against it so strip gestures never reach the marquee.
    let mut cards_area = Rect::default();

    // Main loop
    loop {
        // Advance engines to the present
        app.update_animation();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Ribbons sandwich the page; status bar at the bottom
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // top ribbon
                    Constraint::Min(5),    // hero
                    Constraint::Length(9), // project cards
                    Constraint::Length(1), // bottom ribbon
                    Constraint::Length(1), // status bar
                ])
                .split(size);

            RibbonWidget::render(frame, rows[0], &mut app, Side::Top);
            HeroWidget::render(frame, rows[1], &app);
            CardsWidget::render(frame, rows[2], &mut app);
            RibbonWidget::render(frame, rows[3], &mut app, Side::Bottom);
            StatusBarWidget::render(frame, rows[4], &app);

            // Popup menu on top (if open)
            MenuWidget::render(frame, &app);

            cards_area = rows[2];
        })?;

        // Handle events (use the animation rate while something is moving)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let route = route_mouse_event(mouse, cards_area);
                    app.handle_mouse(route);
                }
                AppEvent::Resize(_, _) => {
                    // Band widths and the strip viewport re-measure on the
                    // next draw; nothing to do here.
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_animation();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ToggleMenu => app.toggle_menu(),
        Action::SwitchFocus => {
            app.focus = match app.focus {
                Focus::Hero => Focus::Projects,
                Focus::Projects => Focus::Hero,
            };
        }
        Action::CardPrev => app.cards.select_prev(),
        Action::CardNext => app.cards.select_next(),
        Action::OpenCard => {
            let target = app
                .cards
                .selected_card()
                .map(|card| (card.title.clone(), card.link.clone()));
            match target {
                Some((title, Some(link))) => {
                    if let Err(e) = open::that(&link) {
                        app.set_error(format!("Failed to open link: {}", e));
                    } else {
                        app.set_status(format!("Opening: {}", title));
                    }
                }
                Some((_, None)) => app.set_error("This card has no link"),
                None => {}
            }
        }
        Action::MenuUp => app.menu_prev(),
        Action::MenuDown => app.menu_next(),
        Action::MenuSelect => app.menu_select(),
        Action::CloseMenu => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}
