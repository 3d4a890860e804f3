//! CLI command implementations.

mod coverage;
mod lookup;
mod probe;

use std::fs::read_to_string;
use std::path::Path;

use miette::{Result, miette};
use resloc::{
    ConfigurationContext, FallbackChainRegistry, FallbackConfig, InMemoryStore, LanguageTag,
    LoadError,
};

use crate::output::LoadDiagnostic;

pub use coverage::{CoverageArgs, run_coverage};
pub use lookup::{LookupArgs, run_lookup};
pub use probe::{ProbeArgs, run_probe};

/// Parse a language argument; `""` and `invariant` select the invariant language.
pub fn parse_language(tag: &str) -> Result<LanguageTag> {
    if tag.is_empty() || tag.eq_ignore_ascii_case("invariant") {
        return Ok(LanguageTag::invariant());
    }
    LanguageTag::parse(tag).map_err(|e| miette!("{e}"))
}

/// Load fallback chains, or an empty registry when no file is given.
pub fn load_chains(path: Option<&Path>) -> Result<FallbackChainRegistry> {
    let Some(path) = path else {
        return Ok(FallbackChainRegistry::empty());
    };
    let content = read_source(path)?;
    FallbackConfig::from_json_str(&content)
        .map(FallbackConfig::into_registry)
        .map_err(|e| load_report(path, &content, e))
}

/// Load a translation dump.
pub fn load_store(path: &Path) -> Result<InMemoryStore> {
    let content = read_source(path)?;
    InMemoryStore::from_json_str(&content).map_err(|e| load_report(path, &content, e))
}

/// A configuration over the given chains with the invariant switch applied.
pub fn configuration(chains: FallbackChainRegistry, invariant: bool) -> ConfigurationContext {
    ConfigurationContext::builder()
        .fallback(chains)
        .enable_invariant_fallback(invariant)
        .build()
}

fn read_source(path: &Path) -> Result<String> {
    read_to_string(path).map_err(|e| miette!("Failed to read {}: {e}", path.display()))
}

fn load_report(path: &Path, content: &str, error: LoadError) -> miette::Report {
    match error {
        LoadError::Parse {
            line,
            column,
            message,
            ..
        } => LoadDiagnostic::at(path, content, line, column, message).into(),
        LoadError::InvalidLanguage { tag, message, .. } => {
            LoadDiagnostic::near(path, content, &tag, format!("invalid language tag '{tag}': {message}"))
                .into()
        }
        LoadError::InvalidKey { key, .. } => {
            LoadDiagnostic::near(path, content, &key, format!("invalid resource key '{key}'")).into()
        }
        LoadError::Io { .. } => miette!("{error}"),
    }
}
