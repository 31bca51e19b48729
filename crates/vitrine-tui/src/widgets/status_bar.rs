use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, Mode, ToastKind};
use crate::theme::Noir;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Menu(_) => "MENU",
        };

        let focus_str = match app.focus {
            Focus::Hero => "Home",
            Focus::Projects => "Projects",
        };

        let (status_text, status_fg) = if let Some((message, kind)) = app.status() {
            let fg = match kind {
                ToastKind::Info => Noir::ACCENT,
                ToastKind::Error => Noir::ERROR,
            };
            (format!(" {}", message), fg)
        } else {
            (
                format!(
                    " {} | {} | Projects: {}",
                    mode_str,
                    focus_str,
                    app.cards.cards().len()
                ),
                Noir::FG0,
            )
        };

        let help_hint = " q:quit m:menu tab:section h/l:cards \u{21b5}:open ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(status_fg).bg(Noir::BG2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(Noir::BG2)),
            Span::styled(
                help_hint,
                Style::default().fg(Noir::GREY).bg(Noir::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
