use std::path::Path;

use crate::error::ConfigError;
use crate::game::{windows, Player, COLS, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

/// Search and evaluation constants, shared read-only by the evaluator and the search.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched ahead of the current position
    pub depth: u8,
    /// Sentinel for a forced win; a forced loss scores its negation
    pub win_score: i32,
    /// Seed for the selector's RNG; drawn from the OS when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub weights: WindowWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: 6,
            win_score: 10_000_000,
            seed: None,
            weights: WindowWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn lose_score(&self) -> i32 {
        -self.win_score
    }
}

/// Score deltas for a single four-cell window, seen from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowWeights {
    pub four: i32,
    pub three: i32,
    pub two: i32,
    pub opponent_three: i32,
    pub opponent_two: i32,
    /// Bonus per own piece in the centre column
    pub center: i32,
}

impl Default for WindowWeights {
    fn default() -> Self {
        WindowWeights {
            four: 10_000,
            three: 100,
            two: 5,
            opponent_three: -500,
            opponent_two: -3,
            center: 6,
        }
    }
}

impl WindowWeights {
    /// Largest magnitude a heuristic evaluation can reach with these weights.
    pub fn max_magnitude(&self) -> i64 {
        let per_window = [
            self.four,
            self.three,
            self.two,
            self.opponent_three,
            self.opponent_two,
        ]
        .iter()
        .map(|w| i64::from(*w).abs())
        .max()
        .unwrap_or(0);

        windows().count() as i64 * per_window + ROWS as i64 * i64::from(self.center).abs()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Colour played by the AI; Red always moves first
    pub ai_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ai_player: Player::Yellow,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        let weights = &engine.weights;

        if engine.depth == 0 {
            return Err(ConfigError::Validation("engine.depth must be >= 1".into()));
        }
        if usize::from(engine.depth) > ROWS * COLS {
            return Err(ConfigError::Validation("engine.depth must be <= 42".into()));
        }
        if engine.win_score <= 0 {
            return Err(ConfigError::Validation("engine.win_score must be > 0".into()));
        }
        if i64::from(engine.win_score) <= weights.max_magnitude() {
            return Err(ConfigError::Validation(format!(
                "engine.win_score must exceed the largest heuristic score ({})",
                weights.max_magnitude()
            )));
        }

        if weights.two < 0 || weights.center < 0 {
            return Err(ConfigError::Validation(
                "engine.weights.two and engine.weights.center must be >= 0".into(),
            ));
        }
        if weights.four < weights.three || weights.three < weights.two {
            return Err(ConfigError::Validation(
                "engine.weights must satisfy four >= three >= two".into(),
            ));
        }
        if weights.opponent_three > 0 || weights.opponent_two > 0 {
            return Err(ConfigError::Validation(
                "engine.weights.opponent_* penalties must be <= 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
