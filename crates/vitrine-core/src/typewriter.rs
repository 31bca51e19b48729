//! Typewriter headline engine
//!
//! Cycles through a fixed list of phrases, typing characters one tick at a
//! time, holding the completed phrase for a pause, deleting it at double
//! speed, then advancing to the next phrase forever.
//!
//! The engine owns no timers. Each call to [`Typewriter::tick`] advances
//! exactly one step and returns the delay the caller should wait before
//! the next tick, so the whole state machine can be single-stepped from a
//! test without a clock.

use std::time::Duration;

use crate::config::TypewriterConfig;

/// Current direction of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// Typewriter state machine
///
/// `char_count` is measured in characters, not bytes, and always stays
/// within `[0, len(current_phrase)]`. The mode flips only at the two
/// boundary values: a hold tick at full length (the pause frame), and a
/// flip-plus-advance in the same tick that reaches zero.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    mode: Mode,
    config: TypewriterConfig,
}

impl Typewriter {
    /// Create a new typewriter over `phrases`.
    ///
    /// An empty list is accepted; the engine then renders an empty string
    /// on every tick without erroring.
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            mode: Mode::Typing,
            config,
        }
    }

    /// The text currently rendered: the prefix of the current phrase of
    /// `char_count` characters.
    pub fn current_text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return "";
        };
        match phrase.char_indices().nth(self.char_count) {
            Some((byte_idx, _)) => &phrase[..byte_idx],
            None => phrase,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Character length of the phrase currently being typed.
    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    /// Advance one step and return the delay until the next tick.
    ///
    /// Typing ticks run at the configured interval, deleting ticks at half
    /// of it, and the tick that completes a phrase schedules the long
    /// pause before deletion begins.
    pub fn tick(&mut self) -> Duration {
        match self.mode {
            Mode::Typing => {
                if self.char_count < self.current_len() {
                    self.char_count += 1;
                } else {
                    // Hold the completed phrase for one frame, then delete.
                    self.mode = Mode::Deleting;
                }
            }
            Mode::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.mode = Mode::Typing;
                    if !self.phrases.is_empty() {
                        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                        tracing::debug!(phrase = self.phrase_index, "typewriter advanced");
                    }
                }
            }
        }
        self.next_delay()
    }

    fn next_delay(&self) -> Duration {
        let interval = Duration::from_millis(self.config.typing_interval_ms);
        match self.mode {
            Mode::Typing if self.char_count > 0 && self.char_count == self.current_len() => {
                Duration::from_millis(self.config.pause_ms)
            }
            Mode::Typing => interval,
            Mode::Deleting => interval / 2,
        }
    }
}
