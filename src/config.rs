//! Tunable timings and thresholds for the page behaviours.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::model::DEFAULT_WARNING_RATIO;
use crate::storage::DEFAULT_DRAFT_PREFIX;

/// Errors that can occur while loading a [`PageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`PageConfig`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `warning_ratio` lies outside `0.0..=1.0`.
    #[error("warning_ratio must be between 0 and 1, got {0}")]
    InvalidWarningRatio(f64),
}

/// Page behaviour settings. Every field has a default, so a config file only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Share of a field's cap where the counter turns to warning.
    pub warning_ratio: f64,
    /// How long a character-limit notice stays up.
    pub warning_ms: u64,
    /// How long the submission banner stays up.
    pub banner_ms: u64,
    /// Length of the banner's exit animation, at the end of `banner_ms`.
    pub banner_exit_ms: u64,
    /// Delay between submission and the form reset.
    pub reset_delay_ms: u64,
    /// Quiet period before a coalesced draft save.
    pub debounce_ms: u64,
    /// How long the theme toggle shows as pressed.
    pub press_ms: u64,
    /// How long the root transition class stays on after a theme change.
    pub transition_ms: u64,
    /// Delay before faded localized text returns to full opacity.
    pub fade_restore_ms: u64,
    /// How long the text fade transition stays attached after a language change.
    pub fade_ms: u64,
    /// Prefix for per-field draft keys.
    pub draft_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            warning_ratio: DEFAULT_WARNING_RATIO,
            warning_ms: 2000,
            banner_ms: 5000,
            banner_exit_ms: 300,
            reset_delay_ms: 2000,
            debounce_ms: 500,
            press_ms: 150,
            transition_ms: 300,
            fade_restore_ms: 100,
            fade_ms: 300,
            draft_prefix: DEFAULT_DRAFT_PREFIX.to_string(),
        }
    }
}

impl PageConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(path = %path.display(), "loaded page config");
        Ok(config)
    }

    /// Loads `folio-contact/config.json` from the XDG config directory,
    /// falling back to defaults when there is no such file.
    pub fn load_default() -> Result<Self, ConfigError> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(Self::default());
        };
        match Self::load(&dir.join("folio-contact").join("config.json")) {
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.warning_ratio) {
            return Err(ConfigError::InvalidWarningRatio(self.warning_ratio));
        }
        Ok(())
    }

    pub fn warning_duration(&self) -> Duration {
        Duration::from_millis(self.warning_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    /// When the banner starts its exit animation, measured from submission.
    pub fn banner_exit_start(&self) -> Duration {
        Duration::from_millis(self.banner_ms.saturating_sub(self.banner_exit_ms))
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn press_duration(&self) -> Duration {
        Duration::from_millis(self.press_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn fade_restore_delay(&self) -> Duration {
        Duration::from_millis(self.fade_restore_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}
