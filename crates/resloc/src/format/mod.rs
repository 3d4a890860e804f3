//! Message formatting.
//!
//! The first argument selects the mode:
//! - no arguments: the message is returned unchanged;
//! - a scalar: positional composite formatting (`{0}`, `{1,-5}`, `{0:D3}`);
//! - an object: named substitution of `{Identifier}` tokens.
//!
//! Formatting never fails from the caller's point of view. On any error the
//! raw message is returned and the failure is reported to the diagnostic hook.

mod composite;
mod named;

use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticHook};
use crate::types::Arg;

/// Why a message could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The composite format string is malformed.
    #[error("malformed format string at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// A format item referenced an argument that was not supplied.
    #[error("format item {{{index}}} refers past the {count} supplied argument(s)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A format specifier does not apply to the argument.
    #[error("format specifier '{specifier}' cannot be applied to '{value}'")]
    InvalidSpecifier { specifier: String, value: String },

    /// A format item asked for an alignment too wide to render.
    #[error("alignment {alignment} is out of range")]
    AlignmentOutOfRange { alignment: i32 },

    /// A positional format item referenced an object argument.
    #[error("argument {index} is an object and cannot fill a positional item")]
    ObjectArgument { index: usize },
}

/// Formats messages, reporting failures to a [`DiagnosticHook`].
#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    hook: DiagnosticHook,
}

impl MessageFormatter {
    pub fn new(hook: DiagnosticHook) -> Self {
        Self { hook }
    }

    /// Format `message`, falling back to the raw message on failure.
    pub fn format(&self, message: &str, args: &[Arg<'_>]) -> String {
        match try_format(message, args) {
            Ok(formatted) => formatted,
            Err(error) => {
                self.hook.emit(&Diagnostic::FormattingFailure {
                    message: message.to_string(),
                    error,
                });
                message.to_string()
            }
        }
    }
}

/// Format `message` with `args`, returning the raw message on failure.
///
/// Failures are logged through `tracing`.
///
/// # Example
///
/// ```
/// use resloc::format;
///
/// assert_eq!(format("{0} of {1}", &[3.into(), 10.into()]), "3 of 10");
/// assert_eq!(format("{0:D3}", &[7.into()]), "007");
/// assert_eq!(format("broken {", &[1.into()]), "broken {");
/// ```
pub fn format(message: &str, args: &[Arg<'_>]) -> String {
    MessageFormatter::default().format(message, args)
}

/// Format `message` with `args`, returning the failure instead of recovering.
pub fn try_format(message: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    match args.first() {
        None => Ok(message.to_string()),
        Some(Arg::Scalar(_)) => composite::format_positional(message, args),
        Some(Arg::Object(source)) => Ok(named::format_named(message, *source)),
    }
}
