//! The horizontal project-card strip.
//!
//! Cards slide under a fixed frame as the strip scrolls. The selected
//! card gets the accent border; cards clipped by the viewport edge are
//! dimmed, standing in for the page's scale/opacity falloff.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::cards::{CARD_GAP, CARD_WIDTH};
use crate::theme::Noir;

pub struct CardsWidget;

impl CardsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let border_style = if app.focus == Focus::Projects {
            Style::default().fg(Noir::ACCENT)
        } else {
            Style::default().fg(Noir::GREY)
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" PROJECTS ")
            .title_style(Style::default().fg(Noir::FG0));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        app.cards.set_viewport(inner.width);
        let scroll = i32::from(app.cards.scroll_columns());
        let selected = app.cards.selected();

        for (idx, card) in app.cards.cards().iter().enumerate() {
            let start = i32::from(inner.x) + idx as i32 * i32::from(CARD_WIDTH + CARD_GAP) - scroll;
            let end = start + i32::from(CARD_WIDTH);
            let view_start = i32::from(inner.x);
            let view_end = i32::from(inner.x + inner.width);

            let clipped_start = start.max(view_start);
            let clipped_end = end.min(view_end);
            if clipped_end <= clipped_start {
                continue;
            }

            let fully_visible = clipped_start == start && clipped_end == end;
            let card_area = Rect::new(
                clipped_start as u16,
                inner.y,
                (clipped_end - clipped_start) as u16,
                inner.height,
            );

            let card_border = if idx == selected {
                Style::default().fg(Noir::ACCENT)
            } else if fully_visible {
                Style::default().fg(Noir::FG1)
            } else {
                Style::default().fg(Noir::GREY)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(card_border)
                .title(format!(" {} ", card.title))
                .title_style(if fully_visible {
                    Style::default().fg(Noir::FG0)
                } else {
                    Style::default().fg(Noir::GREY)
                });
            let body_area = block.inner(card_area);
            frame.render_widget(block, card_area);

            if !fully_visible || body_area.height == 0 {
                continue;
            }

            let mut lines = vec![Line::from(Span::styled(
                card.blurb.clone(),
                Style::default().fg(Noir::FG1),
            ))];
            if card.link.is_some() && idx == selected {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "\u{21b5} open",
                    Style::default().fg(Noir::ACCENT),
                )));
            }
            let body = Paragraph::new(lines).wrap(Wrap { trim: true });
            frame.render_widget(body, body_area);
        }
    }
}
