//! Startup configuration.
//!
//! Read from the JSON file named by `$ANSWER_BOX_CONFIG`, else from
//! `answer-box.json` in the working directory when present. Every key is
//! optional.

use crate::error::{ConfigError, LocalizationError};
use crate::i18n::{DirectoryLocalization, EmbeddedLocalization, Locale, LocalizationProvider};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "answer-box.json";
pub const CONFIG_ENV: &str = "ANSWER_BOX_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerBoxConfig {
    /// Language of the built-in label strings.
    pub base_locale: String,
    /// Alternate locales with translated resources.
    pub supported_locales: Vec<String>,
    /// Directory holding `answer-box.<code>.json`; the shipped resources
    /// are used when unset.
    pub locales_dir: Option<PathBuf>,
    /// Locale at startup; defaults to the language of `$LANG`.
    pub initial_locale: Option<String>,
    pub speech_enabled: bool,
    /// Simulated speaking time per character of the announced text.
    pub speech_char_delay_ms: u64,
}

impl Default for AnswerBoxConfig {
    fn default() -> Self {
        Self {
            base_locale: "en".to_string(),
            supported_locales: vec!["es".to_string(), "fr".to_string()],
            locales_dir: None,
            initial_locale: None,
            speech_enabled: true,
            speech_char_delay_ms: 60,
        }
    }
}

impl AnswerBoxConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }
        let default_path = Path::new(CONFIG_FILE);
        if default_path.exists() {
            return Self::from_path(default_path);
        }
        tracing::debug!("no config file, using defaults");
        Ok(Self::default())
    }

    pub fn speech_char_delay(&self) -> Duration {
        Duration::from_millis(self.speech_char_delay_ms)
    }

    /// Locale to show first: `initial_locale`, else the language in
    /// `env_lang` (a `$LANG` style value), else the base locale.
    pub fn startup_locale(&self, env_lang: Option<&str>) -> String {
        self.initial_locale
            .clone()
            .or_else(|| {
                env_lang
                    .and_then(|lang| Locale::parse(lang).ok())
                    .map(|locale| locale.language().to_string())
            })
            .unwrap_or_else(|| self.base_locale.clone())
    }

    pub fn localization(&self) -> Result<Box<dyn LocalizationProvider>, ConfigError> {
        let base = Locale::parse(&self.base_locale)?;
        let supported = self
            .supported_locales
            .iter()
            .map(|code| Locale::parse(code))
            .collect::<Result<Vec<_>, LocalizationError>>()?;

        Ok(match &self.locales_dir {
            Some(dir) => Box::new(DirectoryLocalization::new(dir, base, supported)),
            None => Box::new(EmbeddedLocalization::new(base, supported)),
        })
    }
}
