// Configuration module for reading Isola.toml
// Holds the search depth, the evaluator's phase weights and the debug log settings

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub search: SearchConfig,
    pub evaluation: EvaluationConfig,
    pub board: BoardConfig,
    pub debug: DebugConfig,
}

/// Minimax search settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Fixed number of plies searched below the root
    pub depth: u8,
}

/// Phase-weighted mobility evaluation constants
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EvaluationConfig {
    /// Fraction of playable cells still free at which the early game ends
    pub early_game_threshold: f64,
    /// Fraction of playable cells still free at which the midgame ends
    pub midgame_threshold: f64,
    pub early_game_opponent_weight: f64,
    pub midgame_opponent_weight: f64,
    pub endgame_opponent_weight: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            early_game_threshold: 0.6,
            midgame_threshold: 0.3,
            early_game_opponent_weight: 3.0,
            midgame_opponent_weight: 2.0,
            endgame_opponent_weight: 1.0,
        }
    }
}

/// Board dimensions used by the match driver
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Isola.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Isola.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Isola.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Isola.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig { depth: 6 },
            evaluation: EvaluationConfig::default(),
            board: BoardConfig { rows: 7, cols: 7 },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "isola_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Isola.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.search.depth, 6);
        assert_eq!(config.evaluation.early_game_opponent_weight, 3.0);
        assert_eq!(config.evaluation.midgame_opponent_weight, 2.0);
        assert_eq!(config.evaluation.endgame_opponent_weight, 1.0);
    }

    #[test]
    fn test_isola_toml_can_be_parsed() {
        let result = Config::from_file("Isola.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Isola.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Isola.toml").expect("Isola.toml should be parseable");
        assert_eq!(file_config, Config::default_hardcoded());
    }

    #[test]
    fn test_thresholds_are_ordered() {
        let eval = Config::default_hardcoded().evaluation;
        assert!(eval.early_game_threshold > eval.midgame_threshold);
        assert!(eval.midgame_threshold > 0.0);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[search]\ndepth = 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
