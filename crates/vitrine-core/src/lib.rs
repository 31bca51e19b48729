pub mod config;
pub mod content;
pub mod error;
pub mod marquee;
pub mod typewriter;

pub use config::{AppConfig, MarqueeConfig, TypewriterConfig, UiConfig};
pub use content::{Card, Content};
pub use error::{Error, Result};
pub use marquee::MarqueeEngine;
pub use typewriter::Typewriter;
