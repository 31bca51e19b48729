//! Dual-band marquee physics
//!
//! Drives two text ribbons scrolling in opposite horizontal directions,
//! accelerated by wheel/drag input and decelerated by per-frame friction,
//! with seamless modular wraparound.
//!
//! # Architecture
//!
//! - `band` - a single ribbon: offset, measured width, wraparound
//! - `input` - pure input integration: gains, drag anchoring, clamping
//! - `engine` - the controller combining both bands and the shared velocity
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_core::marquee::MarqueeEngine;
//!
//! let mut engine = MarqueeEngine::new(MarqueeConfig::default());
//! engine.measure_top(240.0);
//! engine.measure_bottom(300.0);
//!
//! // Input events feed the shared velocity.
//! engine.wheel(12.0);
//!
//! // One call per animation frame; render from the returned offsets.
//! let offsets = engine.advance();
//! ```

pub mod band;
pub mod engine;
pub mod input;

pub use band::{wrap_offset, Band};
pub use engine::{FrameOffsets, MarqueeEngine, VELOCITY_EPSILON};
pub use input::DragTracker;
