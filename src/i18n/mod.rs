//! Label translations for the answer box.
//!
//! Locale resources are resolved through an injected [`LocalizationProvider`]
//! instead of a process-wide registry. Resources are JSON objects named
//! `answer-box.<language>.json` with the keys `yourAnswer`, `checkAnswer` and
//! `restartActivity`; keys missing from a resource keep their default text.

pub mod directory;
pub mod embedded;

pub use directory::DirectoryLocalization;
pub use embedded::EmbeddedLocalization;

use crate::error::LocalizationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale reduced to its primary language subtag (`fr-CA` -> `fr`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Accepts BCP 47 tags and POSIX locale names such as `en_US.UTF-8`.
    pub fn parse(code: &str) -> Result<Self, LocalizationError> {
        let language = code
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();

        let valid = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(LocalizationError::InvalidCode(code.to_string()));
        }
        Ok(Self(language.to_ascii_lowercase()))
    }

    /// Language used for the speech voice.
    pub fn language(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleStrings {
    pub your_answer: String,
    pub check_answer: String,
    pub restart_activity: String,
}

impl Default for LocaleStrings {
    fn default() -> Self {
        Self {
            your_answer: "Your answer".to_string(),
            check_answer: "Check answer".to_string(),
            restart_activity: "Restart activity".to_string(),
        }
    }
}

impl LocaleStrings {
    pub fn from_json(locale: &Locale, json: &str) -> Result<Self, LocalizationError> {
        serde_json::from_str(json).map_err(|source| LocalizationError::Parse {
            locale: locale.to_string(),
            source,
        })
    }
}

pub fn resource_name(locale: &Locale) -> String {
    format!("answer-box.{}.json", locale.language())
}

pub trait LocalizationProvider {
    /// Language of the default strings.
    fn base(&self) -> &Locale;

    /// Alternate locales with translated resources.
    fn supported(&self) -> &[Locale];

    /// Loads the translated strings of a supported alternate locale.
    fn load(&self, locale: &Locale) -> Result<LocaleStrings, LocalizationError>;

    /// Strings for `locale`, falling back to the defaults on any failure.
    fn resolve(&self, locale: &Locale) -> LocaleStrings {
        if locale == self.base() {
            return LocaleStrings::default();
        }
        if !self.supported().contains(locale) {
            tracing::debug!(%locale, "unsupported locale, using default strings");
            return LocaleStrings::default();
        }
        match self.load(locale) {
            Ok(strings) => strings,
            Err(e) => {
                tracing::warn!(%locale, error = %e, "failed to load locale strings");
                LocaleStrings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_reduces_to_language() {
        assert_eq!(Locale::parse("es").unwrap().language(), "es");
        assert_eq!(Locale::parse("fr-CA").unwrap().language(), "fr");
        assert_eq!(Locale::parse("en_US.UTF-8").unwrap().language(), "en");
        assert_eq!(Locale::parse("DE").unwrap().language(), "de");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("C").is_err());
        assert!(Locale::parse("12").is_err());
        assert!(Locale::parse("english").is_err());
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let locale = Locale::parse("es").unwrap();
        let strings =
            LocaleStrings::from_json(&locale, r#"{"yourAnswer": "Tu respuesta"}"#).unwrap();

        assert_eq!(
            strings,
            LocaleStrings {
                your_answer: "Tu respuesta".to_string(),
                ..LocaleStrings::default()
            }
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let locale = Locale::parse("es").unwrap();
        let err = LocaleStrings::from_json(&locale, "{").unwrap_err();

        assert!(matches!(err, LocalizationError::Parse { .. }));
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name(&Locale::parse("fr-FR").unwrap()), "answer-box.fr.json");
    }
}
