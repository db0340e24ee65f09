//! # Configuration Management Module
//!
//! Loads and writes the game's TOML configuration. Every section has serde
//! defaults, so a partial file (or none at all) still yields a playable game.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - default difficulty, base starting gold, optional RNG seed
//! - [`PriceList`] - shop buy prices (`[shop]`)
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use treasure_hunter::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     println!("Default mode: {}", config.game.difficulty);
//!     println!("Rope costs: {}", config.shop.rope);
//!
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! difficulty = "normal"
//! starting_gold = 20
//! # seed = 1234
//!
//! [shop]
//! water = 2
//! rope = 4
//! machete = 6
//! horse = 12
//! boat = 20
//! shovel = 8
//!
//! [logging]
//! level = "warn"
//! # file = "treasure-hunter.log"
//! ```
//!
//! Command line flags override the file: `--mode` beats `game.difficulty`,
//! `--seed` beats `game.seed`.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::hunt::{Difficulty, PriceList, BASE_STARTING_GOLD};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub shop: PriceList,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode used when the player gives a blank or unknown answer.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Gold before the difficulty bonus.
    #[serde(default = "default_starting_gold")]
    pub starting_gold: u32,
    /// Fixed RNG seed for reproducible runs. Random when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_starting_gold() -> u32 {
    BASE_STARTING_GOLD
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            starting_gold: default_starting_gold(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `Warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content).map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.game.difficulty, Difficulty::Normal);
        assert_eq!(config.game.starting_gold, 20);
        assert!(config.game.seed.is_none());
        assert_eq!(config.shop, PriceList::default());
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[shop]\nrope = 25\n").unwrap();
        assert_eq!(config.shop.rope, 25);
        assert_eq!(config.shop.boat, 20);
        assert_eq!(config.game.starting_gold, 20);
    }

    #[test]
    fn test_game_section_parses() {
        let config: Config =
            toml::from_str("[game]\ndifficulty = \"hard\"\nseed = 99\n").unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.seed, Some(99));
    }

    #[test]
    fn test_unknown_difficulty_is_an_error() {
        assert!(toml::from_str::<Config>("[game]\ndifficulty = \"nightmare\"\n").is_err());
    }

    #[test]
    fn test_invalid_log_level_falls_back() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
        let logging = LoggingConfig {
            level: "debug".to_string(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
    }
}
