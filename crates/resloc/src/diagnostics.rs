//! Recoverable problems reported to the embedding application.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::format::FormatError;
use crate::types::{LanguageTag, ResourceKey};

/// A recoverable event. None of these abort the operation that produced them.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// A message could not be formatted; the raw message was returned.
    FormattingFailure { message: String, error: FormatError },

    /// No probed language held a translation for the key.
    MissingTranslation {
        key: ResourceKey,
        probed: Vec<LanguageTag>,
    },

    /// A lookup ran without a configured translation store.
    MissingStore,

    /// A graph walk stopped descending at the depth limit.
    DepthLimit { path: String, limit: usize },
}

/// Callback that observes [`Diagnostic`] events.
///
/// The default hook forwards every event to `tracing`.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use resloc::{Diagnostic, DiagnosticHook};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let hook = DiagnosticHook::new(move |event: &Diagnostic| {
///     sink.lock().unwrap().push(format!("{event:?}"));
/// });
///
/// hook.emit(&Diagnostic::MissingStore);
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct DiagnosticHook(Arc<dyn Fn(&Diagnostic) + Send + Sync>);

impl DiagnosticHook {
    pub fn new(hook: impl Fn(&Diagnostic) + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    /// A hook that only logs through `tracing`.
    pub fn tracing() -> Self {
        Self::new(log_diagnostic)
    }

    /// A hook that discards every event.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn emit(&self, diagnostic: &Diagnostic) {
        (self.0)(diagnostic);
    }
}

impl Default for DiagnosticHook {
    fn default() -> Self {
        Self::tracing()
    }
}

impl Debug for DiagnosticHook {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("DiagnosticHook(..)")
    }
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::FormattingFailure { message, error } => {
            warn!(%message, %error, "message formatting failed; returning raw text");
        }
        Diagnostic::MissingTranslation { key, probed } => {
            debug!(%key, probed = probed.len(), "translation not found");
        }
        Diagnostic::MissingStore => {
            warn!("no translation store configured");
        }
        Diagnostic::DepthLimit { path, limit } => {
            warn!(%path, limit, "resource graph depth limit reached");
        }
    }
}
