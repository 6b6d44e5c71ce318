//! Error types for answer-box.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving locale resources.
///
/// The widget never surfaces these: it logs them and falls back to the
/// default label strings.
#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("invalid locale code {0:?}")]
    InvalidCode(String),

    #[error("locale {0} is not supported")]
    Unsupported(String),

    #[error("failed to read locale file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed strings for locale {locale}: {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading [`crate::config::AnswerBoxConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Locale(#[from] LocalizationError),
}
