//! Positional composite formatting: `{0}`, `{1,-8}`, `{0:D3}`, `{{` and `}}`.
//!
//! Format strings are parsed with winnow into literal runs and format items,
//! then rendered against the argument list.

use std::iter::repeat_n;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::format::FormatError;
use crate::types::{Arg, Value};

/// One piece of a parsed composite format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Item(FormatItem),
}

/// Alignments and precisions must stay below this magnitude.
const MAX_WIDTH: u32 = 1_000_000;

/// A `{index[,alignment][:specifier]}` format item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormatItem {
    pub index: usize,
    pub alignment: Option<i32>,
    pub specifier: Option<String>,
}

/// Parse and render `message` with positional `args`.
pub(crate) fn format_positional(message: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let segments = parse_composite(message)?;
    let mut out = String::with_capacity(message.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Item(item) => render_item(&mut out, &item, args)?,
        }
    }
    Ok(out)
}

/// Parse a composite format string.
pub(crate) fn parse_composite(input: &str) -> Result<Vec<Segment>, FormatError> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<Segment>> = repeat(0.., segment).parse_next(&mut remaining);
    let offset = input.len() - remaining.len();
    match parsed {
        Ok(segments) if remaining.is_empty() => Ok(merge_literals(segments)),
        Ok(_) => Err(FormatError::Syntax {
            offset,
            message: format!(
                "unexpected '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        }),
        Err(e) => Err(FormatError::Syntax {
            offset,
            message: e.to_string(),
        }),
    }
}

fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match (result.last_mut(), segment) {
            (Some(Segment::Literal(prev)), Segment::Literal(text)) => prev.push_str(&text),
            (_, other) => result.push(other),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, format_item, literal_run)).parse_next(input)
}

/// `{{` -> `{`, `}}` -> `}`
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

fn format_item(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', item_body, '}')
        .map(Segment::Item)
        .parse_next(input)
}

fn item_body(input: &mut &str) -> ModalResult<FormatItem> {
    (
        preceded(ws, index),
        preceded(ws, opt(preceded((',', ws), alignment))),
        preceded(ws, opt(preceded(':', specifier))),
    )
        .map(|(index, alignment, specifier)| FormatItem {
            index,
            alignment,
            specifier,
        })
        .parse_next(input)
}

fn index(input: &mut &str) -> ModalResult<usize> {
    digit1.parse_to().parse_next(input)
}

fn alignment(input: &mut &str) -> ModalResult<i32> {
    (opt('-'), digit1).take().parse_to().parse_next(input)
}

/// Everything up to the closing brace.
fn specifier(input: &mut &str) -> ModalResult<String> {
    take_while(0.., |c: char| c != '{' && c != '}')
        .map(|text: &str| text.to_string())
        .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., ' ').void().parse_next(input)
}

// =========================================================================
// Rendering
// =========================================================================

fn render_item(out: &mut String, item: &FormatItem, args: &[Arg<'_>]) -> Result<(), FormatError> {
    let value = match args.get(item.index) {
        Some(Arg::Scalar(value)) => value,
        Some(Arg::Object(_)) => return Err(FormatError::ObjectArgument { index: item.index }),
        None => {
            return Err(FormatError::IndexOutOfRange {
                index: item.index,
                count: args.len(),
            });
        }
    };

    let alignment = item.alignment.unwrap_or(0);
    if alignment.unsigned_abs() >= MAX_WIDTH {
        return Err(FormatError::AlignmentOutOfRange { alignment });
    }

    let text = match item.specifier.as_deref() {
        None | Some("") => value.to_string(),
        Some(specifier) => apply_specifier(value, specifier)?,
    };

    pad(out, &text, alignment);
    Ok(())
}

/// Right-align for positive widths, left-align for negative ones.
fn pad(out: &mut String, text: &str, alignment: i32) {
    let width = alignment.unsigned_abs() as usize;
    let fill = width.saturating_sub(text.chars().count());
    if alignment < 0 {
        out.push_str(text);
        out.extend(repeat_n(' ', fill));
    } else {
        out.extend(repeat_n(' ', fill));
        out.push_str(text);
    }
}

/// Standard numeric specifiers: `D`, `X`/`x`, `F`, `N`, each with an
/// optional precision. Text and booleans ignore specifiers.
fn apply_specifier(value: &Value, specifier: &str) -> Result<String, FormatError> {
    let invalid = || FormatError::InvalidSpecifier {
        specifier: specifier.to_string(),
        value: value.to_string(),
    };

    if matches!(value, Value::String(_) | Value::Bool(_)) {
        return Ok(value.to_string());
    }

    let mut chars = specifier.chars();
    let kind = chars.next().ok_or_else(invalid)?;
    let digits = chars.as_str();
    let precision = if digits.is_empty() {
        None
    } else {
        let precision = digits.parse::<u32>().map_err(|_| invalid())?;
        if precision >= MAX_WIDTH {
            return Err(invalid());
        }
        Some(precision as usize)
    };

    match (kind, value) {
        ('D' | 'd', Value::Number(n)) => {
            let width = precision.unwrap_or(0);
            let digits = format!("{:0width$}", n.unsigned_abs());
            Ok(if *n < 0 { format!("-{digits}") } else { digits })
        }
        ('D' | 'd', Value::Unsigned(n)) => {
            Ok(format!("{:0width$}", n, width = precision.unwrap_or(0)))
        }
        ('X', Value::Number(n)) => Ok(format!("{:0width$X}", n, width = precision.unwrap_or(0))),
        ('X', Value::Unsigned(n)) => Ok(format!("{:0width$X}", n, width = precision.unwrap_or(0))),
        ('x', Value::Number(n)) => Ok(format!("{:0width$x}", n, width = precision.unwrap_or(0))),
        ('x', Value::Unsigned(n)) => Ok(format!("{:0width$x}", n, width = precision.unwrap_or(0))),
        ('F' | 'f', _) => {
            let number = value.as_float().ok_or_else(invalid)?;
            Ok(format!("{:.prec$}", number, prec = precision.unwrap_or(2)))
        }
        ('N' | 'n', _) => {
            let number = value.as_float().ok_or_else(invalid)?;
            Ok(group_thousands(&format!(
                "{:.prec$}",
                number,
                prec = precision.unwrap_or(2)
            )))
        }
        _ => Err(invalid()),
    }
}

/// Insert `,` group separators into the integral part of a rendered number.
fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(rendered.len() * 2);
    for (i, c) in integral.chars().enumerate() {
        if i > 0 && (integral.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
