//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
///
/// The `Display` text of the recoverable variants is exactly what the
/// terminal prints, so the dispatcher can render an error as a single line.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    /// Missing or malformed command argument. Carries the full usage hint.
    #[error("{0}")]
    Usage(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// The audio output could not be opened or driven.
    #[error("audio error: {0}")]
    Audio(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TermfolioError {
    /// Whether the terminal recovers from this error by printing it.
    ///
    /// Usage and lookup failures are part of normal interaction; the rest
    /// come from the environment.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Usage(_) | Self::CommandNotFound(_) | Self::ProjectNotFound(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_displays_message_verbatim() {
        let e = TermfolioError::Usage("Usage: sound on|off".into());
        assert_eq!(format!("{e}"), "Usage: sound on|off");
    }

    #[test]
    fn command_not_found_display() {
        let e = TermfolioError::CommandNotFound("foo".into());
        assert_eq!(format!("{e}"), "command not found: foo");
    }

    #[test]
    fn project_not_found_display() {
        let e = TermfolioError::ProjectNotFound("nope".into());
        assert_eq!(format!("{e}"), "Project not found: nope");
    }

    #[test]
    fn audio_error_display() {
        let e = TermfolioError::Audio("no device".into());
        assert_eq!(format!("{e}"), "audio error: no device");
    }

    #[test]
    fn config_error_display() {
        let e = TermfolioError::Config("bad gain".into());
        assert_eq!(format!("{e}"), "config error: bad gain");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermfolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: TermfolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: TermfolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn user_facing_classification() {
        assert!(TermfolioError::Usage("x".into()).is_user_facing());
        assert!(TermfolioError::CommandNotFound("x".into()).is_user_facing());
        assert!(TermfolioError::ProjectNotFound("x".into()).is_user_facing());
        assert!(!TermfolioError::Audio("x".into()).is_user_facing());
        assert!(!TermfolioError::Config("x".into()).is_user_facing());
    }
}
