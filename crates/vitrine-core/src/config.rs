use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::content::Content;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while the marquee is in motion
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Delay between typed characters in milliseconds
    #[serde(default = "default_typing_interval")]
    pub typing_interval_ms: u64,
    /// Hold time on a completed phrase in milliseconds
    #[serde(default = "default_pause")]
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: default_typing_interval(),
            pause_ms: default_pause(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Columns moved per frame per unit of velocity
    #[serde(default = "default_base_speed")]
    pub base_speed: f64,
    /// Per-frame multiplicative velocity decay, in (0, 1)
    #[serde(default = "default_friction")]
    pub friction: f64,
    /// Velocity added per unit of wheel delta
    #[serde(default = "default_wheel_gain")]
    pub wheel_gain: f64,
    /// Velocity added per column of drag movement
    #[serde(default = "default_drag_gain")]
    pub drag_gain: f64,
    /// Magnitude cap applied after every input event
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            base_speed: default_base_speed(),
            friction: default_friction(),
            wheel_gain: default_wheel_gain(),
            drag_gain: default_drag_gain(),
            max_velocity: default_max_velocity(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_typing_interval() -> u64 {
    100
}

fn default_pause() -> u64 {
    1500
}

fn default_base_speed() -> f64 {
    0.6
}

fn default_friction() -> f64 {
    0.9
}

fn default_wheel_gain() -> f64 {
    0.1
}

fn default_drag_gain() -> f64 {
    0.4
}

fn default_max_velocity() -> f64 {
    120.0
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrine")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.typewriter.typing_interval_ms, 100);
        assert_eq!(config.typewriter.pause_ms, 1500);
        assert!((config.marquee.base_speed - 0.6).abs() < 1e-9);
        assert!((config.marquee.friction - 0.9).abs() < 1e-9);
        assert!((config.marquee.wheel_gain - 0.1).abs() < 1e-9);
        assert!((config.marquee.drag_gain - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [marquee]
            friction = 0.85
            "#,
        )
        .unwrap();
        assert!((config.marquee.friction - 0.85).abs() < 1e-9);
        assert!((config.marquee.base_speed - 0.6).abs() < 1e-9);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.content.headline_phrases.is_empty());
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.animation_fps, config.ui.animation_fps);
        assert_eq!(
            parsed.content.headline_phrases,
            config.content.headline_phrases
        );
    }
}
