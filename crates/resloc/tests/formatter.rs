//! Integration tests for message formatting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use resloc::{
    Arg, Diagnostic, DiagnosticHook, FormatError, MessageFormatter, Placeholders, format,
    placeholders, try_format,
};

#[derive(Placeholders)]
struct Order {
    #[placeholder(rename = "Customer")]
    customer: String,
    #[placeholder(rename = "Count")]
    count: u32,
    #[placeholder(rename = "Notes")]
    notes: String,
}

fn order() -> Order {
    Order {
        customer: "Ada".to_string(),
        count: 3,
        notes: "fragile".to_string(),
    }
}

fn recording_formatter() -> (MessageFormatter, Arc<Mutex<Vec<Diagnostic>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let hook = DiagnosticHook::new(move |event: &Diagnostic| {
        sink.lock().unwrap().push(event.clone());
    });
    (MessageFormatter::new(hook), seen)
}

// =========================================================================
// No Arguments
// =========================================================================

#[test]
fn no_arguments_returns_message_unchanged() {
    assert_eq!(format("Hello {0} and {Name}", &[]), "Hello {0} and {Name}");
}

#[test]
fn no_arguments_keeps_malformed_message() {
    assert_eq!(try_format("unbalanced {", &[]).unwrap(), "unbalanced {");
}

// =========================================================================
// Positional
// =========================================================================

#[test]
fn positional_substitutes_in_order() {
    assert_eq!(
        format("{0} bought {1} items", &["Ada".into(), 3.into()]),
        "Ada bought 3 items"
    );
}

#[test]
fn positional_reuses_and_reorders_items() {
    assert_eq!(format("{1}-{0}-{1}", &["a".into(), "b".into()]), "b-a-b");
}

#[test]
fn positional_escaped_braces() {
    assert_eq!(format("{{{0}}}", &[7.into()]), "{7}");
}

#[test]
fn positional_alignment() {
    assert_eq!(format("[{0,5}]", &["ab".into()]), "[   ab]");
    assert_eq!(format("[{0,-5}]", &["ab".into()]), "[ab   ]");
    assert_eq!(format("[{0,1}]", &["long".into()]), "[long]");
}

#[test]
fn positional_numeric_specifiers() {
    assert_eq!(format("{0:D3}", &[7.into()]), "007");
    assert_eq!(format("{0:D3}", &[(-7).into()]), "-007");
    assert_eq!(format("{0:X}", &[255.into()]), "FF");
    assert_eq!(format("{0:x4}", &[255.into()]), "00ff");
    assert_eq!(format("{0:F1}", &[2.26.into()]), "2.3");
    assert_eq!(format("{0:F}", &[3.into()]), "3.00");
    assert_eq!(format("{0:N0}", &[1234567.into()]), "1,234,567");
    assert_eq!(format("{0:N2}", &[(-1234.5).into()]), "-1,234.50");
}

#[test]
fn positional_alignment_is_bounded() {
    assert_eq!(format("[{0,999999}]", &["ab".into()]).len(), 1_000_001);

    let err = try_format("{0,1000000}", &[1.into()]).unwrap_err();
    assert_eq!(err, FormatError::AlignmentOutOfRange { alignment: 1_000_000 });
    let err = try_format("{0,-2000000000}", &[1.into()]).unwrap_err();
    assert_eq!(err, FormatError::AlignmentOutOfRange { alignment: -2_000_000_000 });
}

#[test]
fn oversized_alignment_falls_back_to_raw_message() {
    let (formatter, seen) = recording_formatter();
    assert_eq!(formatter.format("{0,2000000000}", &[1.into()]), "{0,2000000000}");
    assert!(matches!(
        seen.lock().unwrap().as_slice(),
        [Diagnostic::FormattingFailure { error: FormatError::AlignmentOutOfRange { .. }, .. }]
    ));
}

#[test]
fn oversized_precision_is_invalid_specifier() {
    let err = try_format("{0:D2000000000}", &[1.into()]).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSpecifier { .. }));
}

#[test]
fn large_unsigned_values_keep_their_magnitude() {
    assert_eq!(format("{0}", &[u64::MAX.into()]), "18446744073709551615");
    assert_eq!(format("{0:X}", &[u64::MAX.into()]), "FFFFFFFFFFFFFFFF");
    assert_eq!(format("{0:D}", &[(i64::MAX as u64 + 1).into()]), "9223372036854775808");
    assert_eq!(format("{0}", &[(i64::MAX as u64).into()]), "9223372036854775807");
    assert_eq!(format("{0:N0}", &[u64::MAX.into()]), "18,446,744,073,709,551,616");
}

#[test]
fn positional_alignment_with_specifier() {
    assert_eq!(format("{0,6:F2}", &[1.5.into()]), "  1.50");
}

#[test]
fn positional_booleans_and_text_ignore_specifiers() {
    assert_eq!(format("{0} {1:D2}", &[true.into(), "x".into()]), "True x");
}

#[test]
fn positional_index_out_of_range_is_error() {
    let err = try_format("{0} {2}", &[1.into(), 2.into()]).unwrap_err();
    assert_eq!(err, FormatError::IndexOutOfRange { index: 2, count: 2 });
}

#[test]
fn positional_unknown_specifier_is_error() {
    let err = try_format("{0:Q}", &[1.into()]).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSpecifier { .. }));
}

#[test]
fn positional_decimal_specifier_rejects_floats() {
    assert!(try_format("{0:D2}", &[1.5.into()]).is_err());
}

#[test]
fn positional_object_in_later_position_is_error() {
    let model = order();
    let err = try_format("{0} {1}", &[1.into(), Arg::object(&model)]).unwrap_err();
    assert_eq!(err, FormatError::ObjectArgument { index: 1 });
}

#[test]
fn malformed_messages_never_fail() {
    for message in ["{", "}", "{0", "{x}", "{0,}", "a } b", "{-1}"] {
        assert_eq!(format(message, &[1.into()]), message);
    }
}

#[test]
fn malformed_message_reports_syntax_offset() {
    let err = try_format("ok } no", &[1.into()]).unwrap_err();
    assert!(matches!(err, FormatError::Syntax { offset: 3, .. }));
}

#[test]
fn formatting_failure_reaches_diagnostic_hook() {
    let (formatter, seen) = recording_formatter();
    assert_eq!(formatter.format("{3}", &[1.into()]), "{3}");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(matches!(
        &seen[0],
        Diagnostic::FormattingFailure { message, error: FormatError::IndexOutOfRange { .. } }
            if message == "{3}"
    ));
}

#[test]
fn successful_format_emits_nothing() {
    let (formatter, seen) = recording_formatter();
    assert_eq!(formatter.format("{0}", &[1.into()]), "1");
    assert!(seen.lock().unwrap().is_empty());
}

// =========================================================================
// Named
// =========================================================================

#[test]
fn named_substitutes_members() {
    let model = order();
    assert_eq!(
        format("{Customer} ordered {Count}", &[Arg::object(&model)]),
        "Ada ordered 3"
    );
}

#[test]
fn named_ignores_extra_members() {
    let model = order();
    assert_eq!(format("Hi {Customer}", &[Arg::object(&model)]), "Hi Ada");
}

#[test]
fn named_keeps_unknown_tokens() {
    let model = order();
    assert_eq!(
        format("{Customer} {Missing} {0}", &[Arg::object(&model)]),
        "Ada {Missing} {0}"
    );
}

#[test]
fn named_replaces_every_occurrence() {
    let model = placeholders! { "Name" => "Bo" };
    assert_eq!(format("{Name}, {Name}!", &[Arg::object(&model)]), "Bo, Bo!");
}

#[test]
fn named_fills_tokens_from_the_message_only() {
    let model = placeholders! { "A" => "{B}", "B" => "b" };
    assert_eq!(format("{A}", &[Arg::object(&model)]), "{B}");
}

#[test]
fn named_replaces_tokens_in_first_occurrence_order() {
    let model = placeholders! { "A" => "{B}", "B" => "x" };
    assert_eq!(format("{A} {B}", &[Arg::object(&model)]), "x x");
    assert_eq!(format("{B} {A}", &[Arg::object(&model)]), "x {B}");
}

#[test]
fn named_tokens_are_non_greedy() {
    let model = placeholders! { "Name" => "Bo" };
    assert_eq!(format("{Name}}", &[Arg::object(&model)]), "Bo}");
    assert_eq!(format("{{Name}", &[Arg::object(&model)]), "Bo");
}

#[test]
fn named_tolerates_unbalanced_braces() {
    let model = placeholders! { "Name" => "Bo" };
    assert_eq!(format("{ {Name} }", &[Arg::object(&model)]), "{ {Name} }");
    assert_eq!(format("tail {", &[Arg::object(&model)]), "tail {");
    assert_eq!(format("{line\n{Name}", &[Arg::object(&model)]), "{line\nBo");
}

#[test]
fn named_works_with_maps() {
    let model: HashMap<&str, f64> = HashMap::from([("Total", 9.5)]);
    assert_eq!(format("Total: {Total}", &[Arg::object(&model)]), "Total: 9.5");
}

// =========================================================================
// Dispatch
// =========================================================================

#[test]
fn first_scalar_selects_positional_mode() {
    let model = order();
    assert_eq!(format("{0} items", &["x".into(), Arg::object(&model)]), "x items");

    let err = try_format("{0} {Customer}", &["x".into(), Arg::object(&model)]).unwrap_err();
    assert!(matches!(err, FormatError::Syntax { .. }));
}

#[test]
fn first_object_selects_named_mode() {
    let model = order();
    assert_eq!(
        format("{Notes} {0}", &[Arg::object(&model), 5.into()]),
        "fragile {0}"
    );
}

#[test]
fn string_argument_is_scalar() {
    assert!(Arg::from("text").is_scalar());
    assert!(!Arg::object(&order()).is_scalar());
}
