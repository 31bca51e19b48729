//! Horizontally scrollable project-card strip.
//!
//! The strip owns its scroll offset in columns and the selection, and is
//! the excluded region for marquee input: wheel and drag gestures that
//! land on it scroll the strip instead of feeding the ribbons.

use vitrine_core::content::Card;

/// Rendered width of one card in columns.
pub const CARD_WIDTH: u16 = 32;
/// Gap between adjacent cards.
pub const CARD_GAP: u16 = 2;
/// Columns scrolled per wheel notch inside the strip.
pub const WHEEL_STEP: f64 = 4.0;
/// Drag distance is doubled, like the page's grab-scrolling.
const DRAG_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct CardStrip {
    cards: Vec<Card>,
    selected: usize,
    scroll: f64,
    viewport_width: u16,
    drag: Option<DragAnchor>,
}

#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    start_x: f64,
    start_scroll: f64,
}

impl CardStrip {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            selected: 0,
            scroll: 0.0,
            viewport_width: 0,
            drag: None,
        }
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.selected)
    }

    /// Scroll offset in whole columns, for rendering.
    #[inline]
    pub fn scroll_columns(&self) -> u16 {
        self.scroll.round().max(0.0) as u16
    }

    /// Full width of the laid-out strip content.
    pub fn content_width(&self) -> u16 {
        let n = self.cards.len() as u16;
        if n == 0 {
            return 0;
        }
        n * CARD_WIDTH + (n - 1) * CARD_GAP
    }

    fn max_scroll(&self) -> f64 {
        f64::from(self.content_width().saturating_sub(self.viewport_width))
    }

    /// Record the viewport width from layout and re-clamp the offset.
    pub fn set_viewport(&mut self, width: u16) {
        self.viewport_width = width;
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }

    /// Scroll by a signed column delta, clamped to the content extent.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
    }

    pub fn select_next(&mut self) {
        if !self.cards.is_empty() && self.selected < self.cards.len() - 1 {
            self.selected += 1;
            self.scroll_into_view();
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_into_view();
    }

    /// Bring the selected card fully inside the viewport.
    pub fn scroll_into_view(&mut self) {
        let card_start = f64::from(self.selected as u16 * (CARD_WIDTH + CARD_GAP));
        let card_end = card_start + f64::from(CARD_WIDTH);
        let view_end = self.scroll + f64::from(self.viewport_width);

        if card_start < self.scroll {
            self.scroll = card_start;
        } else if card_end > view_end {
            self.scroll = card_end - f64::from(self.viewport_width);
        }
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }

    /// Start a grab-scroll at horizontal position `x`.
    pub fn drag_begin(&mut self, x: f64) {
        self.drag = Some(DragAnchor {
            start_x: x,
            start_scroll: self.scroll,
        });
    }

    /// Continue a grab-scroll; inert when no drag is active.
    pub fn drag_move(&mut self, x: f64) {
        if let Some(anchor) = self.drag {
            let walk = (x - anchor.start_x) * DRAG_MULTIPLIER;
            self.scroll = (anchor.start_scroll - walk).clamp(0.0, self.max_scroll());
        }
    }

    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(n: usize) -> CardStrip {
        let cards = (0..n)
            .map(|i| Card {
                title: format!("Card {}", i),
                blurb: String::new(),
                link: None,
            })
            .collect();
        let mut strip = CardStrip::new(cards);
        strip.set_viewport(80);
        strip
    }

    #[test]
    fn test_scroll_clamps_to_extent() {
        let mut strip = strip(5);
        strip.scroll_by(-100.0);
        assert_eq!(strip.scroll_columns(), 0);

        strip.scroll_by(10_000.0);
        let max = f64::from(strip.content_width() - 80);
        assert!((strip.scroll - max).abs() < 1e-9);
    }

    #[test]
    fn test_short_strip_never_scrolls() {
        let mut strip = strip(2); // 66 columns < 80 viewport
        strip.scroll_by(50.0);
        assert_eq!(strip.scroll_columns(), 0);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut strip = strip(6);
        for _ in 0..5 {
            strip.select_next();
        }
        assert_eq!(strip.selected(), 5);
        let card_start = f64::from(5 * (CARD_WIDTH + CARD_GAP));
        let card_end = card_start + f64::from(CARD_WIDTH);
        assert!(strip.scroll <= card_start);
        assert!(strip.scroll + 80.0 >= card_end);

        for _ in 0..5 {
            strip.select_prev();
        }
        assert_eq!(strip.selected(), 0);
        assert_eq!(strip.scroll_columns(), 0);
    }

    #[test]
    fn test_drag_scrolls_doubled() {
        let mut strip = strip(6);
        strip.drag_begin(40.0);
        strip.drag_move(30.0); // 10 columns left, walk = -20
        assert!((strip.scroll - 20.0).abs() < 1e-9);
        strip.drag_end();
        strip.drag_move(0.0);
        assert!((strip.scroll - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_shrink_reclamps() {
        let mut strip = strip(6);
        strip.scroll_by(10_000.0);
        let before = strip.scroll;
        strip.set_viewport(200);
        assert!(strip.scroll <= before);
        assert!(strip.scroll <= f64::from(strip.content_width().saturating_sub(200)));
    }
}
