use ratatui::style::Color;

/// The built-in dark palette, matching the page this app is modeled on:
/// near-black background, off-white text, a single acid accent.
pub struct Noir;

impl Noir {
    /// Primary background
    pub const BG0: Color = Color::Rgb(0x0d, 0x0d, 0x0d);
    /// Raised background (cards, popups)
    pub const BG1: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
    /// Status bar background
    pub const BG2: Color = Color::Rgb(0x26, 0x26, 0x26);
    /// Primary foreground
    pub const FG0: Color = Color::Rgb(0xf2, 0xf2, 0xf2);
    /// Dimmed foreground
    pub const FG1: Color = Color::Rgb(0xa8, 0xa8, 0xa8);
    /// Faint foreground (hints, off-screen cards)
    pub const GREY: Color = Color::Rgb(0x5c, 0x5c, 0x5c);
    /// Accent
    pub const ACCENT: Color = Color::Rgb(0xd0, 0xf2, 0x2a);
    /// Error
    pub const ERROR: Color = Color::Rgb(0xea, 0x4e, 0x43);
}
