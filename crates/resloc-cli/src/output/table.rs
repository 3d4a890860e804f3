//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Normalized language tag.
    pub language: String,
    /// Keys stored in exactly this language.
    pub exact: usize,
    /// Keys resolved through a fallback language.
    pub fallback: usize,
    /// Keys with no text in any probed language.
    pub missing: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(total: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Exact", "Via fallback", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.exact, total),
            lang.fallback.to_string(),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

/// Format a probe order as a numbered table.
pub fn format_probe_table(languages: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Language"]);

    for (position, language) in languages.iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), language.clone()]);
    }

    table
}
