//! Error types for resloc.

use std::path::PathBuf;

use thiserror::Error;

/// A programmer-facing failure at a public entry point.
///
/// A missing translation is not an error: lookups return `Ok(None)` so the
/// surrounding UI can pick its own fallback text. Formatting failures are not
/// errors either; they are recovered and reported through the diagnostic hook.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// A required argument was empty or blank.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A member reference does not resolve to a declared, localizable member.
    #[error("cannot resolve member '{path}' on '{owner}'{}", suggestion_suffix(suggestions))]
    InvalidReference {
        owner: String,
        path: String,
        suggestions: Vec<String>,
    },

    /// A custom key variant was requested but never registered.
    #[error("no handler registered for key variant '{variant}' (requested for '{key}')")]
    MissingCustomHandler { key: String, variant: String },
}

impl LocalizationError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        LocalizationError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Errors that occur while loading translations or configuration from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the source file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON of the expected shape.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A language tag in the content failed validation.
    #[error("{path}: invalid language tag '{tag}': {message}")]
    InvalidLanguage {
        path: PathBuf,
        tag: String,
        message: String,
    },

    /// A resource key in the content failed validation.
    #[error("{path}: invalid resource key '{key}'")]
    InvalidKey { path: PathBuf, key: String },
}

impl LoadError {
    pub(crate) fn from_json(path: PathBuf, error: &serde_json::Error) -> Self {
        LoadError::Parse {
            path,
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}
