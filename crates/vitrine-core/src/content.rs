//! Portfolio content: the strings and cards the widgets display.
//!
//! Content lives in the same config file as the tunables so a user can
//! replace every visible string without recompiling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Static greeting shown above the typewriter headline
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Phrases the typewriter headline cycles through
    #[serde(default = "default_headline_phrases")]
    pub headline_phrases: Vec<String>,
    /// Text repeated along the top marquee band
    #[serde(default = "default_ribbon_top")]
    pub ribbon_top: String,
    /// Text repeated along the bottom marquee band
    #[serde(default = "default_ribbon_bottom")]
    pub ribbon_bottom: String,
    /// Project cards shown in the horizontal strip
    #[serde(default = "default_cards")]
    pub cards: Vec<Card>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            headline_phrases: default_headline_phrases(),
            ribbon_top: default_ribbon_top(),
            ribbon_bottom: default_ribbon_bottom(),
            cards: default_cards(),
        }
    }
}

/// One project card: a title, a short blurb, and a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub link: Option<String>,
}

fn default_greeting() -> String {
    "Hi, I'm Aditya".to_string()
}

fn default_headline_phrases() -> Vec<String> {
    vec![
        "I'm a Software Developer.".to_string(),
        "I build things for the Web".to_string(),
        "Innovating from idea to execution".to_string(),
    ]
}

fn default_ribbon_top() -> String {
    "LET'S WORK TOGETHER \u{2022} ".to_string()
}

fn default_ribbon_bottom() -> String {
    "OPEN TO OPPORTUNITIES \u{2022} ".to_string()
}

fn default_cards() -> Vec<Card> {
    vec![
        Card {
            title: "Portfolio".to_string(),
            blurb: "This site, as a terminal application".to_string(),
            link: Some("https://github.com".to_string()),
        },
        Card {
            title: "Sample Project".to_string(),
            blurb: "Replace these cards in the config file".to_string(),
            link: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = Content::default();
        assert_eq!(content.headline_phrases.len(), 3);
        assert!(!content.ribbon_top.is_empty());
        assert!(!content.ribbon_bottom.is_empty());
        assert!(!content.cards.is_empty());
    }

    #[test]
    fn test_card_defaults_from_toml() {
        let card: Card = toml::from_str(r#"title = "Thing""#).unwrap();
        assert_eq!(card.title, "Thing");
        assert!(card.blurb.is_empty());
        assert!(card.link.is_none());
    }
}
