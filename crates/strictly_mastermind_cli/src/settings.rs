//! Settings file for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_mastermind::{Difficulty, SessionConfig};
use tracing::{debug, info, instrument};

/// Settings loaded from TOML and overridden by command-line flags.
///
/// ```toml
/// seed = 42
///
/// [session]
/// difficulty = "hard"
/// num_colors = 6
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Session parameters.
    #[serde(default)]
    session: SessionConfig,

    /// Fixed seed for the random source.
    #[serde(default)]
    seed: Option<u64>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        settings
            .session
            .validate()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        info!(
            difficulty = %settings.session.difficulty(),
            num_colors = *settings.session.num_colors(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if given, else uses the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        num_colors: Option<u8>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.session = self.session.with_difficulty(difficulty);
        }
        if let Some(num_colors) = num_colors {
            self.session = self.session.with_num_colors(num_colors);
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new settings error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let settings = Settings::default().with_overrides(Some(Difficulty::Hard), Some(6), Some(9));
        assert_eq!(*settings.session().difficulty(), Difficulty::Hard);
        assert_eq!(*settings.session().num_colors(), 6);
        assert_eq!(*settings.seed(), Some(9));
    }

    #[test]
    fn test_missing_overrides_keep_values() {
        let settings = Settings::default().with_overrides(None, None, None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_config_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("settings.rs"));
        assert!(err.to_string().contains("boom"));
    }
}
