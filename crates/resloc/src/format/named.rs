//! Named `{Identifier}` substitution from an object's readable members.

use crate::types::Placeholders;

/// Replace every `{Name}` token whose name `source` can supply.
///
/// A token runs from a `{` to the nearest following `}` on the same line;
/// braces are trimmed from both ends to get the name. Unknown names leave
/// the token untouched.
///
/// Tokens are collected from `message` first. Each distinct known token is
/// then replaced throughout the running result in first-occurrence order,
/// so a substituted value containing a later token gets that token filled
/// too.
pub(crate) fn format_named(message: &str, source: &dyn Placeholders) -> String {
    let mut replacements: Vec<(&str, String)> = Vec::new();
    for token in tokens(message) {
        if replacements.iter().any(|(seen, _)| *seen == token) {
            continue;
        }
        let name = token.trim_matches(|c| c == '{' || c == '}');
        if let Some(value) = source.placeholder(name) {
            replacements.push((token, value));
        }
    }

    replacements
        .iter()
        .fold(message.to_string(), |current, (token, value)| {
            current.replace(*token, value)
        })
}

/// Every token in `message`, left to right, duplicates included.
fn tokens(message: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        let candidate = &rest[open..];
        match token_end(candidate) {
            Some(close) => {
                found.push(&candidate[..=close]);
                rest = &candidate[close + 1..];
            }
            None => rest = &candidate[1..],
        }
    }

    found
}

/// Byte offset of the `}` closing the token that starts at `candidate[0]`.
fn token_end(candidate: &str) -> Option<usize> {
    candidate
        .char_indices()
        .skip(1)
        .take_while(|&(_, c)| c != '\n')
        .find(|&(_, c)| c == '}')
        .map(|(i, _)| i)
}
