//! Shared resource key rules used by both runtime and macro validation.
//!
//! This crate centralizes how key segments are validated and joined so that
//! keys computed by `resloc-macros` at compile time and by the runtime
//! `KeyBuilder` can never drift apart.

/// Separator between key segments (`Pages.Header.Title`).
pub const SEGMENT_SEPARATOR: char = '.';

/// Separator between a key and a custom variant suffix (`Pages.Title-Description`).
pub const VARIANT_SEPARATOR: char = '-';

/// Separator used by Rust module paths (`my_app::resources`).
pub const MODULE_SEPARATOR: &str = "::";

/// Returns true if `segment` is a valid key segment.
///
/// A segment is an identifier: it starts with an ASCII letter or underscore
/// and continues with ASCII alphanumerics or underscores. Raw identifier
/// prefixes (`r#type`) must be stripped before validation.
pub fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Returns the first invalid segment of a dotted key prefix, if any.
///
/// Used to validate `key_prefix = "..."` overrides, which may contain
/// several segments.
pub fn invalid_prefix_segment(prefix: &str) -> Option<&str> {
    prefix
        .split(SEGMENT_SEPARATOR)
        .find(|segment| !is_valid_segment(segment))
}

/// Splits a Rust module path (`app::ui::pages`) into key segments.
///
/// Empty pieces are skipped so `module_path!()` output and hand-written
/// paths produce the same segments.
pub fn module_segments(module_path: &str) -> impl Iterator<Item = &str> {
    module_path
        .split(MODULE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
}

/// Joins key segments with [`SEGMENT_SEPARATOR`].
pub fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut key = String::new();
    for segment in segments {
        if !key.is_empty() {
            key.push(SEGMENT_SEPARATOR);
        }
        key.push_str(segment);
    }
    key
}

/// Appends a custom variant suffix to a key (`Title` + `Description` -> `Title-Description`).
pub fn variant_key(key: &str, variant: &str) -> String {
    format!("{key}{VARIANT_SEPARATOR}{variant}")
}

/// Strips a raw identifier prefix (`r#type` -> `type`).
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
