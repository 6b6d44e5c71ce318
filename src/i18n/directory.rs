//! Locale resources read from a directory on disk.
use super::{Locale, LocaleStrings, LocalizationProvider, resource_name};
use crate::error::LocalizationError;
use std::fs;
use std::path::PathBuf;

pub struct DirectoryLocalization {
    dir: PathBuf,
    base: Locale,
    supported: Vec<Locale>,
}

impl DirectoryLocalization {
    pub fn new(dir: impl Into<PathBuf>, base: Locale, supported: Vec<Locale>) -> Self {
        Self {
            dir: dir.into(),
            base,
            supported,
        }
    }
}

impl LocalizationProvider for DirectoryLocalization {
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
        let path = self.dir.join(resource_name(locale));
        let json = fs::read_to_string(&path).map_err(|source| LocalizationError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(%locale, path = %path.display(), "loaded locale strings");
        LocaleStrings::from_json(locale, &json)
    }
}
