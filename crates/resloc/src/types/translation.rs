use serde::{Deserialize, Serialize};

use super::{LanguageTag, ResourceKey};

/// One stored translation: a language and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub language: LanguageTag,
    pub value: String,
}

impl Translation {
    pub fn new(language: LanguageTag, value: impl Into<String>) -> Self {
        Self {
            language,
            value: value.into(),
        }
    }
}

/// A stored resource and all of its translations.
///
/// Translations keep insertion order and hold at most one entry per
/// language: setting a language that already exists replaces its text in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedResource {
    pub key: ResourceKey,
    translations: Vec<Translation>,
}

impl TranslatedResource {
    /// Create a resource with no translations.
    pub fn new(key: ResourceKey) -> Self {
        Self {
            key,
            translations: Vec::new(),
        }
    }

    /// Set the text for a language, replacing any existing text for it.
    pub fn set(&mut self, language: LanguageTag, value: impl Into<String>) {
        let value = value.into();
        match self
            .translations
            .iter_mut()
            .find(|t| t.language == language)
        {
            Some(existing) => existing.value = value,
            None => self.translations.push(Translation::new(language, value)),
        }
    }

    /// Builder-style variant of [`TranslatedResource::set`].
    pub fn with(mut self, language: LanguageTag, value: impl Into<String>) -> Self {
        self.set(language, value);
        self
    }

    /// The text stored for exactly this language, if any.
    pub fn by_language(&self, language: &LanguageTag) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| &t.language == language)
            .map(|t| t.value.as_str())
    }

    /// The first text found while probing `languages` in order.
    pub fn first_available<'a>(
        &'a self,
        languages: &[LanguageTag],
    ) -> Option<(&'a LanguageTag, &'a str)> {
        languages.iter().find_map(|language| {
            self.translations
                .iter()
                .find(|t| &t.language == language)
                .map(|t| (&t.language, t.value.as_str()))
        })
    }

    /// Returns true if a translation exists for this language.
    pub fn has_language(&self, language: &LanguageTag) -> bool {
        self.by_language(language).is_some()
    }

    /// All translations in insertion order.
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }
}
