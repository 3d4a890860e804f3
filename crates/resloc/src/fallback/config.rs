//! Serializable form of the fallback chains.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::fallback::chain::FallbackChainRegistry;
use crate::types::LanguageTag;

/// Fallback chains as they appear in a configuration file.
///
/// ```json
/// {
///   "default": ["sv", "no", "en"],
///   "scoped": { "fr-BE": ["fr", "en"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    #[serde(default)]
    pub default: Vec<LanguageTag>,
    #[serde(default)]
    pub scoped: BTreeMap<LanguageTag, Vec<LanguageTag>>,
}

impl FallbackConfig {
    /// Parse a JSON configuration string.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::parse(content, PathBuf::from("<string>"))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path.to_path_buf())
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::from_json(path, &e))
    }

    /// Build the frozen registry through the regular builder API.
    pub fn into_registry(self) -> FallbackChainRegistry {
        let mut builder = FallbackChainRegistry::builder();

        let mut default = self.default.into_iter();
        if let Some(first) = default.next() {
            default.fold(builder.try_first(first), |chain, next| chain.then(next));
        }

        for (trigger, languages) in self.scoped {
            let mut languages = languages.into_iter();
            if let Some(first) = languages.next() {
                languages.fold(builder.when(trigger).try_first(first), |chain, next| {
                    chain.then(next)
                });
            }
        }

        builder.build()
    }
}

impl From<&FallbackChainRegistry> for FallbackConfig {
    fn from(registry: &FallbackChainRegistry) -> Self {
        Self {
            default: registry.default_chain().to_vec(),
            scoped: registry
                .scoped_chains()
                .map(|(trigger, chain)| (trigger.clone(), chain.to_vec()))
                .collect(),
        }
    }
}
