//! The translation storage collaborator and the lookup adapter over it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::LoadError;
use crate::keys::TypeRegistry;
use crate::types::{LanguageTag, ResourceKey, TranslatedResource};

/// Storage of translated resources, consumed read-only by the core.
///
/// Implementations own persistence and any caching. Lookups are exact:
/// no key prefix or wildcard matching, case-sensitive language comparison.
pub trait TranslationStore: Send + Sync {
    /// The text stored for exactly this key and language.
    fn lookup(&self, key: &ResourceKey, language: &LanguageTag) -> Option<String>;

    /// Every stored resource with all of its translations.
    fn all_resources(&self) -> Vec<TranslatedResource>;
}

impl<S: TranslationStore + ?Sized> TranslationStore for Arc<S> {
    fn lookup(&self, key: &ResourceKey, language: &LanguageTag) -> Option<String> {
        (**self).lookup(key, language)
    }

    fn all_resources(&self) -> Vec<TranslatedResource> {
        (**self).all_resources()
    }
}

/// Probes an ordered language list against a store.
#[derive(Clone, Copy)]
pub struct TranslationLookup<'a> {
    store: &'a dyn TranslationStore,
}

impl<'a> TranslationLookup<'a> {
    pub fn new(store: &'a dyn TranslationStore) -> Self {
        Self { store }
    }

    /// The first stored text for `key` in probe order.
    pub fn lookup(&self, key: &ResourceKey, languages: &[LanguageTag]) -> Option<String> {
        let hit = languages.iter().enumerate().find_map(|(position, language)| {
            self.store
                .lookup(key, language)
                .map(|text| (position, language, text))
        });

        match hit {
            Some((0, language, text)) => {
                trace!(%key, %language, "exact translation hit");
                Some(text)
            }
            Some((_, language, text)) => {
                debug!(%key, %language, "translation resolved through fallback");
                Some(text)
            }
            None => {
                debug!(%key, probed = languages.len(), "no translation in any probed language");
                None
            }
        }
    }
}

/// An in-memory [`TranslationStore`].
///
/// Used to seed translations in tests and small applications, and as the
/// target of the JSON loader:
///
/// ```json
/// {
///   "Pages.Home.title": { "en": "Welcome", "sv": "Välkommen", "": "Welcome" }
/// }
/// ```
///
/// The empty language holds the invariant (default) text.
///
/// # Example
///
/// ```
/// use resloc::{InMemoryStore, LanguageTag, ResourceKey, TranslationStore};
///
/// let en = LanguageTag::parse("en").unwrap();
/// let key = ResourceKey::parse("Pages.Home.title").unwrap();
///
/// let mut store = InMemoryStore::new();
/// store.insert(key.clone(), en.clone(), "Welcome");
///
/// assert_eq!(store.lookup(&key, &en).as_deref(), Some("Welcome"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    resources: BTreeMap<ResourceKey, TranslatedResource>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text of `key` in `language`, replacing an existing text.
    pub fn insert(&mut self, key: ResourceKey, language: LanguageTag, value: impl Into<String>) {
        self.resources
            .entry(key.clone())
            .or_insert_with(|| TranslatedResource::new(key))
            .set(language, value);
    }

    /// Builder-style variant of [`InMemoryStore::insert`].
    pub fn with(mut self, key: ResourceKey, language: LanguageTag, value: impl Into<String>) -> Self {
        self.insert(key, language, value);
        self
    }

    /// Insert a whole resource, replacing any resource with the same key.
    pub fn insert_resource(&mut self, resource: TranslatedResource) {
        self.resources.insert(resource.key.clone(), resource);
    }

    /// The stored resource for `key`.
    pub fn resource(&self, key: &str) -> Option<&TranslatedResource> {
        self.resources.get(key)
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if no resources are stored.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Store every declared default text of the registered types as the
    /// invariant translation of its key.
    ///
    /// Existing invariant texts are left untouched. Returns how many
    /// translations were added.
    pub fn seed_defaults(&mut self, registry: &TypeRegistry) -> usize {
        let invariant = LanguageTag::invariant();
        let mut added = 0;
        for discovered in registry.discovered() {
            let Some(text) = discovered.default_text else {
                continue;
            };
            let resource = self
                .resources
                .entry(discovered.key.clone())
                .or_insert_with(|| TranslatedResource::new(discovered.key));
            if !resource.has_language(&invariant) {
                resource.set(invariant.clone(), text);
                added += 1;
            }
        }
        debug!(added, "seeded invariant translations from declared defaults");
        added
    }

    /// Parse a JSON dump (`{ key: { language: text } }`).
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::parse(content, PathBuf::from("<string>"))
    }

    /// Read and parse a JSON dump file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path.to_path_buf())
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, LoadError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(content).map_err(|e| LoadError::from_json(path.clone(), &e))?;

        let mut store = Self::new();
        for (key, translations) in raw {
            let key = ResourceKey::parse(&key).map_err(|_| LoadError::InvalidKey {
                path: path.clone(),
                key: key.clone(),
            })?;
            for (language, text) in translations {
                let tag = LanguageTag::try_from(language.clone()).map_err(|e| {
                    LoadError::InvalidLanguage {
                        path: path.clone(),
                        tag: language,
                        message: e.to_string(),
                    }
                })?;
                store.insert(key.clone(), tag, text);
            }
        }
        Ok(store)
    }
}

impl TranslationStore for InMemoryStore {
    fn lookup(&self, key: &ResourceKey, language: &LanguageTag) -> Option<String> {
        self.resources
            .get(key)
            .and_then(|resource| resource.by_language(language))
            .map(ToString::to_string)
    }

    fn all_resources(&self) -> Vec<TranslatedResource> {
        self.resources.values().cloned().collect()
    }
}
