//! Integration tests for the in-memory store, JSON loading and probe lookup.

use std::io::Write;

use resloc::{
    InMemoryStore, LanguageTag, LoadError, LocalizedResource, ResourceKey, TranslatedResource,
    TranslationLookup, TranslationStore, TypeRegistry,
};
use tempfile::NamedTempFile;

fn tag(s: &str) -> LanguageTag {
    LanguageTag::parse(s).unwrap()
}

fn key(s: &str) -> ResourceKey {
    ResourceKey::parse(s).unwrap()
}

#[derive(Default, LocalizedResource)]
#[resource(key_prefix = "Mail")]
struct Mail {
    #[resource(default = "Inbox")]
    inbox: String,
    #[resource(default = "Sent")]
    sent: String,
    drafts: String,
}

// =========================================================================
// Translated Resources
// =========================================================================

#[test]
fn translated_resource_replaces_same_language() {
    let mut resource = TranslatedResource::new(key("A.b"))
        .with(tag("en"), "one")
        .with(tag("sv"), "ett");
    resource.set(tag("en"), "uno");

    assert_eq!(resource.by_language(&tag("en")), Some("uno"));
    assert_eq!(resource.translations().len(), 2);
    assert_eq!(resource.translations()[0].language, tag("en"));
}

#[test]
fn first_available_follows_probe_order() {
    let resource = TranslatedResource::new(key("A.b"))
        .with(tag("en"), "one")
        .with(tag("no"), "en");

    let probe = [tag("sv"), tag("no"), tag("en")];
    assert_eq!(resource.first_available(&probe), Some((&tag("no"), "en")));
    assert_eq!(resource.first_available(&[tag("de")]), None);
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn lookup_is_exact_on_key_and_language() {
    let store = InMemoryStore::new().with(key("App.Title"), tag("en"), "Title");

    assert_eq!(store.lookup(&key("App.Title"), &tag("en")).as_deref(), Some("Title"));
    assert_eq!(store.lookup(&key("App.title"), &tag("en")), None);
    assert_eq!(store.lookup(&key("App"), &tag("en")), None);
    assert_eq!(store.lookup(&key("App.Title"), &tag("en-US")), None);
}

#[test]
fn translation_lookup_returns_first_hit() {
    let store = InMemoryStore::new()
        .with(key("K"), tag("en"), "english")
        .with(key("K"), tag("no"), "norsk");
    let lookup = TranslationLookup::new(&store);

    let probe = [tag("sv"), tag("no"), tag("en")];
    assert_eq!(lookup.lookup(&key("K"), &probe).as_deref(), Some("norsk"));
}

#[test]
fn translation_lookup_exact_match_wins() {
    let store = InMemoryStore::new()
        .with(key("K"), tag("en"), "english")
        .with(key("K"), tag("sv"), "svenska");
    let lookup = TranslationLookup::new(&store);

    let probe = [tag("sv"), tag("en")];
    assert_eq!(lookup.lookup(&key("K"), &probe).as_deref(), Some("svenska"));
}

#[test]
fn translation_lookup_misses_return_none() {
    let store = InMemoryStore::new();
    let lookup = TranslationLookup::new(&store);
    assert_eq!(lookup.lookup(&key("K"), &[tag("en")]), None);
}

// =========================================================================
// Seeding Defaults
// =========================================================================

#[test]
fn seed_defaults_writes_invariant_translations() {
    let mut registry = TypeRegistry::new();
    registry.register::<Mail>();

    let mut store = InMemoryStore::new().with(key("Mail.sent"), LanguageTag::invariant(), "Outbox");
    let added = store.seed_defaults(&registry);

    assert_eq!(added, 1);
    let invariant = LanguageTag::invariant();
    assert_eq!(store.lookup(&key("Mail.inbox"), &invariant).as_deref(), Some("Inbox"));
    assert_eq!(store.lookup(&key("Mail.sent"), &invariant).as_deref(), Some("Outbox"));
    assert!(store.resource("Mail.drafts").is_none());
}

#[test]
fn seed_defaults_is_idempotent() {
    let mut registry = TypeRegistry::new();
    registry.register::<Mail>();

    let mut store = InMemoryStore::new();
    assert_eq!(store.seed_defaults(&registry), 2);
    assert_eq!(store.seed_defaults(&registry), 0);
    assert_eq!(store.len(), 2);
}

// =========================================================================
// JSON Loading
// =========================================================================

#[test]
fn from_json_str_loads_translations() {
    let store = InMemoryStore::from_json_str(
        r#"{
            "Pages.Home.title": { "en": "Welcome", "sv": "Välkommen", "": "Welcome!" },
            "Pages.Home.body": { "fr_be": "Bienvenue" }
        }"#,
    )
    .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(
        store.lookup(&key("Pages.Home.title"), &tag("sv")).as_deref(),
        Some("Välkommen")
    );
    assert_eq!(
        store
            .lookup(&key("Pages.Home.title"), &LanguageTag::invariant())
            .as_deref(),
        Some("Welcome!")
    );
    assert_eq!(
        store.lookup(&key("Pages.Home.body"), &tag("fr-BE")).as_deref(),
        Some("Bienvenue")
    );
}

#[test]
fn all_resources_lists_everything() {
    let store = InMemoryStore::from_json_str(r#"{ "A": { "en": "a" }, "B": { "en": "b" } }"#)
        .unwrap();
    let keys: Vec<String> = store
        .all_resources()
        .into_iter()
        .map(|r| r.key.to_string())
        .collect();
    assert_eq!(keys, vec!["A", "B"]);
}

#[test]
fn from_json_str_reports_position_of_syntax_error() {
    let err = InMemoryStore::from_json_str("{\n  \"A\": {\n}").unwrap_err();
    match err {
        LoadError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn from_json_str_rejects_invalid_language() {
    let err = InMemoryStore::from_json_str(r#"{ "A": { "not a tag": "x" } }"#).unwrap_err();
    assert!(matches!(err, LoadError::InvalidLanguage { ref tag, .. } if tag == "not a tag"));
}

#[test]
fn from_json_str_rejects_blank_key() {
    let err = InMemoryStore::from_json_str(r#"{ " ": { "en": "x" } }"#).unwrap_err();
    assert!(matches!(err, LoadError::InvalidKey { .. }));
}

#[test]
fn from_json_file_loads_and_reports_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "Greeting": {{ "en": "Hello" }} }}"#).unwrap();

    let store = InMemoryStore::from_json_file(file.path()).unwrap();
    assert_eq!(store.lookup(&key("Greeting"), &tag("en")).as_deref(), Some("Hello"));

    let mut broken = NamedTempFile::new().unwrap();
    write!(broken, "[1, 2]").unwrap();
    let err = InMemoryStore::from_json_file(broken.path()).unwrap_err();
    assert!(err.to_string().contains(&broken.path().display().to_string()));
}
