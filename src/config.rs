use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_LINE_LENGTH, DEFAULT_ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
}

/// Board geometry: grid dimensions and the number of pieces in a winning line.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub line_length: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show per-cell positional scores in empty cells.
    pub show_hints: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { show_hints: true }
    }
}

impl BoardConfig {
    /// Validate board geometry. A `line_length` longer than both dimensions is
    /// accepted; such a game simply cannot be won.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.line_length < 2 {
            return Err(ConfigError::Validation(
                "board.line_length must be >= 2".into(),
            ));
        }
        Ok(())
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
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
