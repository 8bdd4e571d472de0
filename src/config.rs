use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_lesson")]
    pub lesson: u32,
    #[serde(default = "default_speech_language")]
    pub speech_language: String,
    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,
    #[serde(default = "default_show_romaji")]
    pub show_romaji: bool,
}

fn default_lesson() -> u32 {
    1
}
fn default_speech_language() -> String {
    "ja-JP".to_string()
}
fn default_speech_rate() -> f32 {
    1.0
}
fn default_show_romaji() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lesson: default_lesson(),
            speech_language: default_speech_language(),
            speech_rate: default_speech_rate(),
            show_romaji: default_show_romaji(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kaiwa")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        // Simulates loading a config file written before a field existed
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.lesson, 1);
        assert_eq!(config.speech_language, "ja-JP");
        assert_eq!(config.speech_rate, 1.0);
        assert!(config.show_romaji);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.speech_rate = 0.5;
        config.lesson = 2;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.speech_rate, 0.5);
        assert_eq!(loaded.lesson, 2);
    }
}
