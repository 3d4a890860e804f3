//! Integration tests for fallback chains and probe order resolution.

use std::io::Write;

use resloc::{FallbackChainRegistry, FallbackConfig, FallbackResolver, LanguageTag, LoadError};
use tempfile::NamedTempFile;

fn tag(s: &str) -> LanguageTag {
    LanguageTag::parse(s).unwrap()
}

fn tags(list: &[&str]) -> Vec<LanguageTag> {
    list.iter().map(|s| tag(s)).collect()
}

/// Default chain `sv -> no -> en`, plus `fr-BE -> fr -> en`.
fn nordic_registry() -> FallbackChainRegistry {
    let mut builder = FallbackChainRegistry::builder();
    builder.try_first(tag("sv")).then(tag("no")).then(tag("en"));
    builder.when(tag("fr-BE")).try_first(tag("fr")).then(tag("en"));
    builder.build()
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn empty_registry_has_no_chain() {
    let registry = FallbackChainRegistry::empty();
    assert!(registry.is_empty());
    assert!(registry.chain_for(&tag("en")).is_empty());
}

#[test]
fn chain_for_uses_scoped_chain_on_exact_trigger() {
    let registry = nordic_registry();
    assert_eq!(registry.chain_for(&tag("fr-BE")), tags(&["fr", "en"]).as_slice());
    assert_eq!(registry.chain_for(&tag("fr")), tags(&["sv", "no", "en"]).as_slice());
}

#[test]
fn redeclared_default_chain_replaces_earlier() {
    let mut builder = FallbackChainRegistry::builder();
    builder.try_first(tag("sv")).then(tag("en"));
    builder.try_first(tag("de")).then(tag("fr"));
    let registry = builder.build();

    assert_eq!(registry.default_chain(), tags(&["de", "fr"]).as_slice());
}

#[test]
fn redeclared_scoped_chain_replaces_earlier() {
    let mut builder = FallbackChainRegistry::builder();
    builder.when(tag("fr-BE")).try_first(tag("fr"));
    builder.when(tag("fr-BE")).try_first(tag("nl")).then(tag("en"));
    let registry = builder.build();

    assert_eq!(registry.chain_for(&tag("fr-BE")), tags(&["nl", "en"]).as_slice());
}

#[test]
fn chain_lists_each_language_once() {
    let mut builder = FallbackChainRegistry::builder();
    builder.try_first(tag("sv")).then(tag("en")).then(tag("sv"));
    assert_eq!(builder.build().default_chain(), tags(&["sv", "en"]).as_slice());
}

// =========================================================================
// Resolver
// =========================================================================

#[test]
fn resolve_starts_with_requested_tag() {
    let registry = nordic_registry();
    let order = FallbackResolver::new(&registry).resolve(&tag("de"));
    assert_eq!(order, tags(&["de", "sv", "no", "en"]));
}

#[test]
fn resolve_adds_neutral_before_chain() {
    let registry = nordic_registry();
    let order = FallbackResolver::new(&registry).resolve(&tag("lv-LV"));
    assert_eq!(order, tags(&["lv-LV", "lv", "sv", "no", "en"]));
}

#[test]
fn scoped_chain_replaces_neutral_and_default() {
    let registry = nordic_registry();
    let order = FallbackResolver::new(&registry).resolve(&tag("fr-BE"));
    assert_eq!(order, tags(&["fr-BE", "fr", "en"]));
    assert!(!order.contains(&tag("sv")));
}

#[test]
fn resolve_deduplicates_requested_within_chain() {
    let registry = nordic_registry();
    let order = FallbackResolver::new(&registry).resolve(&tag("no"));
    assert_eq!(order, tags(&["no", "sv", "en"]));
}

#[test]
fn resolve_with_empty_registry_is_tag_and_neutral() {
    let registry = FallbackChainRegistry::empty();
    let order = FallbackResolver::new(&registry).resolve(&tag("pt-BR"));
    assert_eq!(order, tags(&["pt-BR", "pt"]));
}

#[test]
fn resolve_with_invariant_appends_invariant_last() {
    let registry = nordic_registry();
    let order = FallbackResolver::new(&registry).resolve_with_invariant(&tag("sv"));
    assert_eq!(
        order,
        vec![tag("sv"), tag("no"), tag("en"), LanguageTag::invariant()]
    );
}

#[test]
fn resolve_is_deterministic() {
    let registry = nordic_registry();
    let resolver = FallbackResolver::new(&registry);
    assert_eq!(resolver.resolve(&tag("lv-LV")), resolver.resolve(&tag("lv-LV")));
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn config_from_json_builds_registry() {
    let config = FallbackConfig::from_json_str(
        r#"{ "default": ["sv", "no", "en"], "scoped": { "fr_be": ["fr", "en"] } }"#,
    )
    .unwrap();
    assert_eq!(config.into_registry(), nordic_registry());
}

#[test]
fn config_round_trips_registry() {
    let registry = nordic_registry();
    let config = FallbackConfig::from(&registry);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(FallbackConfig::from_json_str(&json).unwrap().into_registry(), registry);
}

#[test]
fn config_defaults_to_no_chains() {
    let config = FallbackConfig::from_json_str("{}").unwrap();
    assert!(config.into_registry().is_empty());
}

#[test]
fn config_rejects_unknown_fields() {
    let err = FallbackConfig::from_json_str(r#"{ "chains": [] }"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse { line: 1, .. }));
}

#[test]
fn config_rejects_invalid_tag() {
    let err = FallbackConfig::from_json_str(r#"{ "default": ["not a tag"] }"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "default": ["en"] }}"#).unwrap();

    let config = FallbackConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.default, tags(&["en"]));
}

#[test]
fn config_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FallbackConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
