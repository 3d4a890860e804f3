//! Integration tests for language tags.

use resloc::{LanguageTag, LocalizationError};

// =========================================================================
// Parsing and Normalization
// =========================================================================

#[test]
fn parse_normalizes_case() {
    assert_eq!(LanguageTag::parse("fr-be").unwrap().as_str(), "fr-BE");
    assert_eq!(LanguageTag::parse("EN").unwrap().as_str(), "en");
}

#[test]
fn parse_accepts_underscore_separator() {
    assert_eq!(LanguageTag::parse("en_US").unwrap().as_str(), "en-US");
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(LanguageTag::parse("  sv ").unwrap().as_str(), "sv");
}

#[test]
fn parse_rejects_blank() {
    let err = LanguageTag::parse("   ").unwrap_err();
    assert!(matches!(
        err,
        LocalizationError::InvalidArgument {
            name: "language",
            ..
        }
    ));
}

#[test]
fn parse_rejects_garbage() {
    assert!(LanguageTag::parse("not a tag!").is_err());
}

#[test]
fn from_str_matches_parse() {
    let parsed: LanguageTag = "lv-lv".parse().unwrap();
    assert_eq!(parsed, LanguageTag::parse("lv-LV").unwrap());
}

// =========================================================================
// Neutral and Invariant
// =========================================================================

#[test]
fn neutral_strips_region() {
    let tag = LanguageTag::parse("lv-LV").unwrap();
    assert_eq!(tag.neutral(), Some(LanguageTag::parse("lv").unwrap()));
    assert!(tag.is_specific());
}

#[test]
fn neutral_strips_script_and_region() {
    let tag = LanguageTag::parse("zh-Hant-TW").unwrap();
    assert_eq!(tag.neutral().unwrap().as_str(), "zh");
}

#[test]
fn neutral_of_neutral_is_none() {
    let tag = LanguageTag::parse("en").unwrap();
    assert_eq!(tag.neutral(), None);
    assert!(!tag.is_specific());
}

#[test]
fn invariant_is_empty_and_distinct() {
    let invariant = LanguageTag::invariant();
    assert!(invariant.is_invariant());
    assert_eq!(invariant.as_str(), "");
    assert_eq!(invariant.to_string(), "<invariant>");
    assert_ne!(invariant, LanguageTag::parse("en").unwrap());
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn deserialize_empty_string_is_invariant() {
    let tags: Vec<LanguageTag> = serde_json::from_str(r#"["", "fr_be"]"#).unwrap();
    assert_eq!(tags, vec![LanguageTag::invariant(), LanguageTag::parse("fr-BE").unwrap()]);
}

#[test]
fn deserialize_rejects_invalid_tag() {
    let result: Result<LanguageTag, _> = serde_json::from_str(r#""???""#);
    assert!(result.is_err());
}

#[test]
fn serialize_writes_normalized_tag() {
    let tag = LanguageTag::parse("pt_br").unwrap();
    assert_eq!(serde_json::to_string(&tag).unwrap(), r#""pt-BR""#);
}
