//! Locale resources compiled into the binary.
use super::{Locale, LocaleStrings, LocalizationProvider};
use crate::error::LocalizationError;

const SPANISH: &str = include_str!("../../locales/answer-box.es.json");
const FRENCH: &str = include_str!("../../locales/answer-box.fr.json");

pub struct EmbeddedLocalization {
    base: Locale,
    supported: Vec<Locale>,
}

impl EmbeddedLocalization {
    /// `supported` may only narrow the shipped set (`es`, `fr`); other
    /// locales fail to load and resolve to the defaults.
    pub fn new(base: Locale, supported: Vec<Locale>) -> Self {
        Self { base, supported }
    }

    fn resource(locale: &Locale) -> Option<&'static str> {
        match locale.language() {
            "es" => Some(SPANISH),
            "fr" => Some(FRENCH),
            _ => None,
        }
    }
}

impl Default for EmbeddedLocalization {
    fn default() -> Self {
        Self {
            base: Locale("en".to_string()),
            supported: vec![Locale("es".to_string()), Locale("fr".to_string())],
        }
    }
}

impl LocalizationProvider for EmbeddedLocalization {
    fn base(&self) -> &Locale {
        &self.base
    }

    fn supported(&self) -> &[Locale] {
        &self.supported
    }

    fn load(&self, locale: &Locale) -> Result<LocaleStrings, LocalizationError> {
        if !self.supported.contains(locale) {
            return Err(LocalizationError::Unsupported(locale.to_string()));
        }
        let json = Self::resource(locale)
            .ok_or_else(|| LocalizationError::Unsupported(locale.to_string()))?;
        LocaleStrings::from_json(locale, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let provider = EmbeddedLocalization::default();

        assert_eq!(provider.base().language(), "en");
        assert_eq!(provider.supported().len(), 2);
    }

    #[test]
    fn test_resolves_french() {
        let provider = EmbeddedLocalization::default();
        let strings = provider.resolve(&Locale::parse("fr").unwrap());

        assert_eq!(strings.check_answer, "Vérifier la réponse");
        assert_eq!(strings.restart_activity, "Recommencer l'activité");
    }

    #[test]
    fn test_base_locale_uses_defaults() {
        let provider = EmbeddedLocalization::default();

        assert_eq!(provider.resolve(&Locale::parse("en-GB").unwrap()), LocaleStrings::default());
    }

    #[test]
    fn test_supported_without_resource_falls_back() {
        let provider = EmbeddedLocalization::new(
            Locale::parse("en").unwrap(),
            vec![Locale::parse("it").unwrap()],
        );
        let italian = Locale::parse("it").unwrap();

        assert!(provider.load(&italian).is_err());
        assert_eq!(provider.resolve(&italian), LocaleStrings::default());
    }
}
