//! The hero section: greeting plus the typewriter headline.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Noir;

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        // Vertically center the three hero lines.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let greeting = Line::from(Span::styled(
            app.config.content.greeting.clone(),
            Style::default().fg(Noir::FG1),
        ));

        let headline = Line::from(vec![
            Span::styled(
                app.typewriter.current_text().to_string(),
                Style::default().fg(Noir::FG0).add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{258c}", Style::default().fg(Noir::ACCENT)),
        ]);

        let hint = Line::from(Span::styled(
            "scroll anywhere to move the ribbons",
            Style::default().fg(Noir::GREY),
        ));

        let paragraph = Paragraph::new(vec![greeting, headline, Line::default(), hint])
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, rows[1]);
    }
}
