//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock portfolio terminal:
//!
//! ```toml
//! prompt = "carlos@portfolio:~$"
//! typing_speed_ms = 18
//! sound_enabled = true
//! master_gain = 0.07
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// Runtime configuration for one terminal session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt text echoed in front of every submitted line.
    pub prompt: String,
    /// Milliseconds between revealed characters in typed output.
    pub typing_speed_ms: u32,
    /// Initial state of the keystroke click.
    pub sound_enabled: bool,
    /// Master output gain for keystroke clicks (0.0 - 1.0).
    pub master_gain: f32,
    /// Owner column in `ls -al` listings.
    pub owner: String,
    /// Group column in `ls -al` listings.
    pub group: String,
    /// Height of the bottom-anchored output window, in lines.
    pub visible_lines: usize,
    /// Whether Tab completion is active.
    pub autocomplete: bool,
    /// Whether the session opens with the typed welcome banner.
    pub show_intro: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "carlos@portfolio:~$".to_string(),
            typing_speed_ms: 18,
            sound_enabled: true,
            master_gain: 0.07,
            owner: "carlos".to_string(),
            group: "staff".to_string(),
            visible_lines: 24,
            autocomplete: true,
            show_intro: true,
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.master_gain) {
            return Err(TermfolioError::Config(format!(
                "master_gain must be within 0.0..=1.0, got {}",
                self.master_gain
            )));
        }
        if self.visible_lines == 0 {
            return Err(TermfolioError::Config(
                "visible_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
