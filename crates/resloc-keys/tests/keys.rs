use resloc_keys::{
    invalid_prefix_segment, is_valid_segment, join_segments, module_segments, unraw, variant_key,
};

#[test]
fn identifier_segments_are_valid() {
    assert!(is_valid_segment("Header"));
    assert!(is_valid_segment("hello_message"));
    assert!(is_valid_segment("_private"));
    assert!(is_valid_segment("Item2"));
}

#[test]
fn non_identifier_segments_are_rejected() {
    assert!(!is_valid_segment(""));
    assert!(!is_valid_segment("2fast"));
    assert!(!is_valid_segment("with space"));
    assert!(!is_valid_segment("dotted.name"));
    assert!(!is_valid_segment("dash-name"));
}

#[test]
fn prefix_validation_reports_first_bad_segment() {
    assert_eq!(invalid_prefix_segment("App.Pages"), None);
    assert_eq!(invalid_prefix_segment("App..Pages"), Some(""));
    assert_eq!(invalid_prefix_segment("App.9lives.Pages"), Some("9lives"));
}

#[test]
fn module_paths_split_into_segments() {
    let segments: Vec<&str> = module_segments("my_app::ui::pages").collect();
    assert_eq!(segments, vec!["my_app", "ui", "pages"]);

    let single: Vec<&str> = module_segments("tests").collect();
    assert_eq!(single, vec!["tests"]);
}

#[test]
fn segments_join_with_dots() {
    assert_eq!(join_segments(["A", "B", "c"]), "A.B.c");
    assert_eq!(join_segments(["Only"]), "Only");
    assert_eq!(join_segments(Vec::<&str>::new()), "");
}

#[test]
fn variant_keys_use_dash_suffix() {
    assert_eq!(variant_key("Pages.Title", "Description"), "Pages.Title-Description");
}

#[test]
fn raw_identifiers_are_unwrapped() {
    assert_eq!(unraw("r#type"), "type");
    assert_eq!(unraw("name"), "name");
}
