//! Miette diagnostic wrapper for translation dump and chain file errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a loaded JSON file.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(resloc::load))]
pub struct LoadDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

impl LoadDiagnostic {
    /// Point at a 1-based line and column reported by the JSON parser.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        Self::with_span(path, content, offset, 1, message)
    }

    /// Point at the first quoted occurrence of `needle`, or the file start.
    pub fn near(path: &Path, content: &str, needle: &str, message: String) -> Self {
        let quoted = format!("\"{needle}\"");
        let (offset, len) = content
            .find(&quoted)
            .map_or((0, 1), |offset| (offset, quoted.len()));

        Self::with_span(path, content, offset, len, message)
    }

    fn with_span(path: &Path, content: &str, offset: usize, len: usize, message: String) -> Self {
        // miette panics on spans past the end of the source
        let offset = offset.min(content.len());
        let len = len.min(content.len() - offset);

        LoadDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
        }
    }
}
