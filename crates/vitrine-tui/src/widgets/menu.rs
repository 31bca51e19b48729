//! The popup navigation menu.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Mode, MENU_ITEMS};
use crate::theme::Noir;

pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let Mode::Menu(selected) = app.mode else {
            return;
        };

        let area = centered_rect(frame.area(), 24, MENU_ITEMS.len() as u16 + 2);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Noir::ACCENT))
            .title(" MENU ")
            .title_style(Style::default().fg(Noir::FG0))
            .style(Style::default().bg(Noir::BG1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if idx == selected {
                    Line::from(Span::styled(
                        format!(" \u{25b8} {}", item),
                        Style::default()
                            .fg(Noir::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("   {}", item),
                        Style::default().fg(Noir::FG1),
                    ))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// A rect of the given size centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 24, 5);
        assert_eq!(rect, Rect::new(28, 9, 24, 5));

        // Larger than the area clamps instead of underflowing.
        let rect = centered_rect(Rect::new(0, 0, 10, 3), 24, 5);
        assert_eq!(rect, Rect::new(0, 0, 10, 3));
    }
}
