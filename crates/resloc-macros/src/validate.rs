//! Compile-time validation for the derive macros.
//!
//! Checks, per resource type:
//! 1. `key_prefix` is a dotted path of valid segments
//! 2. every member and constant segment is a valid key segment
//! 3. no two keyed members share a segment
//! 4. hidden members carry no key metadata
//!
//! Enums get checks 1-3 over their variants. Typo suggestions for unknown
//! attributes use Levenshtein distance.

use std::collections::HashSet;

use resloc_keys::{invalid_prefix_segment, is_valid_segment};
use strsim::levenshtein;
use syn::{Error, Path};

use crate::input::{EnumInput, FieldKind, PlaceholdersInput, ResourceInput, Spanned};

/// Validate a parsed `LocalizedResource` input.
pub fn validate_resource(input: &ResourceInput) -> syn::Result<()> {
    if let Some(prefix) = &input.key_prefix {
        validate_prefix(prefix)?;
    }

    let mut seen = SegmentSet::default();
    for field in &input.fields {
        if field.hidden {
            if let Some(default) = &field.default {
                return Err(Error::new(
                    default.span,
                    "hidden members are never localized and cannot declare a default",
                ));
            }
            if field.kind != FieldKind::Scalar {
                return Err(Error::new(
                    field.segment.span,
                    "hidden members cannot be `nested` or `collection`",
                ));
            }
            continue;
        }
        if field.kind != FieldKind::Scalar && field.default.is_some() {
            return Err(Error::new(
                field.segment.span,
                "only text members can declare a default",
            ));
        }
        validate_segment(&field.segment)?;
        seen.insert(&field.segment)?;
    }

    for constant in &input.constants {
        validate_segment(&constant.segment)?;
        seen.insert(&constant.segment)?;
    }

    Ok(())
}

/// Validate a parsed `LocalizedEnum` input.
pub fn validate_enum(input: &EnumInput) -> syn::Result<()> {
    if let Some(prefix) = &input.key_prefix {
        validate_prefix(prefix)?;
    }

    let mut seen = SegmentSet::default();
    for variant in &input.variants {
        validate_segment(&variant.segment)?;
        seen.insert(&variant.segment)?;
    }
    Ok(())
}

/// Validate a parsed `Placeholders` input.
pub fn validate_placeholders(input: &PlaceholdersInput) -> syn::Result<()> {
    let mut seen = SegmentSet::default();
    for field in &input.fields {
        if field.name.value.is_empty() {
            return Err(Error::new(field.name.span, "placeholder name must not be empty"));
        }
        seen.insert(&field.name)?;
    }
    Ok(())
}

/// Error for an attribute name outside `known`, with typo suggestions.
pub fn unknown_attribute(path: &Path, known: &[&str]) -> Error {
    let name = path
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default();
    let suggestions = compute_suggestions(&name, known);
    let message = if suggestions.is_empty() {
        format!(
            "unknown attribute '{name}'\nnote: expected one of: {}",
            known.join(", ")
        )
    } else {
        format!(
            "unknown attribute '{name}'\nhelp: did you mean '{}'?",
            suggestions.join("' or '")
        )
    };
    Error::new_spanned(path, message)
}

fn validate_prefix(prefix: &Spanned) -> syn::Result<()> {
    match invalid_prefix_segment(&prefix.value) {
        None => Ok(()),
        Some(bad) => Err(Error::new(
            prefix.span,
            format!(
                "invalid key prefix '{}': segment '{bad}' is not an identifier\nhelp: use dotted identifiers such as \"Pages.Home\"",
                prefix.value
            ),
        )),
    }
}

fn validate_segment(segment: &Spanned) -> syn::Result<()> {
    if is_valid_segment(&segment.value) {
        Ok(())
    } else {
        Err(Error::new(
            segment.span,
            format!(
                "invalid key segment '{}'\nhelp: key segments must be identifiers",
                segment.value
            ),
        ))
    }
}

/// Segments already used by a type.
#[derive(Default)]
struct SegmentSet {
    seen: HashSet<String>,
}

impl SegmentSet {
    fn insert(&mut self, segment: &Spanned) -> syn::Result<()> {
        if self.seen.insert(segment.value.clone()) {
            Ok(())
        } else {
            Err(Error::new(
                segment.span,
                format!("duplicate key segment '{}'", segment.value),
            ))
        }
    }
}

/// Candidates within edit distance of `name`, closest first, at most three.
fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
