//! The two marquee ribbons.
//!
//! Each band renders its configured text tiled wide enough to cover the
//! viewport, then duplicated so the wraparound modulus (half the measured
//! width) lands on identical content. The band width is re-measured on
//! every layout pass, so terminal resizes take effect on the next frame.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::theme::Noir;

/// Which band this widget instance draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

pub struct RibbonWidget;

impl RibbonWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, side: Side) {
        let text = match side {
            Side::Top => app.config.content.ribbon_top.clone(),
            Side::Bottom => app.config.content.ribbon_bottom.clone(),
        };

        let tiled = tile_to_width(&text, area.width as usize);
        let duplicated_width = 2 * tiled.width();
        match side {
            Side::Top => app.marquee.measure_top(duplicated_width as f64),
            Side::Bottom => app.marquee.measure_bottom(duplicated_width as f64),
        }

        let offsets = app.marquee.offsets();
        let offset = match side {
            Side::Top => offsets.top,
            Side::Bottom => offsets.bottom,
        };
        let skip = (-offset).max(0.0).round() as usize;

        let duplicated = format!("{tiled}{tiled}");
        let visible = slice_columns(&duplicated, skip, area.width as usize);

        let style = match side {
            Side::Top => Style::default()
                .fg(Noir::FG0)
                .bg(Noir::BG1)
                .add_modifier(Modifier::BOLD),
            Side::Bottom => Style::default().fg(Noir::FG1).bg(Noir::BG1),
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(visible, style)))
            .style(Style::default().bg(Noir::BG1));
        frame.render_widget(paragraph, area);
    }
}

/// Repeat `text` until it is at least `min_width` columns wide.
fn tile_to_width(text: &str, min_width: usize) -> String {
    let unit = text.width();
    if unit == 0 {
        return String::new();
    }
    text.repeat(min_width / unit + 2)
}

/// The substring covering display columns `[skip, skip + take)`.
///
/// A wide character straddling the left edge is replaced by padding so
/// the slice keeps its column alignment.
fn slice_columns(s: &str, skip: usize, take: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    let mut used = 0usize;

    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used >= take {
            break;
        }
        if col + w <= skip {
            col += w;
            continue;
        }
        if col < skip {
            let overlap = (col + w - skip).min(take - used);
            out.extend(std::iter::repeat(' ').take(overlap));
            used += overlap;
            col += w;
            continue;
        }
        if used + w > take {
            break;
        }
        out.push(ch);
        used += w;
        col += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_covers_viewport() {
        let tiled = tile_to_width("abc ", 10);
        assert!(tiled.width() >= 10 + 4);
        assert!(tiled.starts_with("abc abc "));
    }

    #[test]
    fn test_tile_empty_text() {
        assert_eq!(tile_to_width("", 80), "");
    }

    #[test]
    fn test_slice_basic() {
        assert_eq!(slice_columns("abcdefgh", 2, 3), "cde");
        assert_eq!(slice_columns("abc", 0, 10), "abc");
        assert_eq!(slice_columns("abc", 5, 3), "");
    }

    #[test]
    fn test_slice_wide_char_edge() {
        // "日" is two columns; slicing through it pads instead of
        // emitting half a glyph.
        let sliced = slice_columns("日本語", 1, 3);
        assert_eq!(sliced, " 本");
    }
}
