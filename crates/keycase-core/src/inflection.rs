// Keycase Inflection Engine
// Pure string conversions between snake_case, CamelCase, camelCase and dash-case
//
// Every conversion first normalizes its input with `underscore`, then
// reformats the snake_case form. All functions are total: any string is
// a legal input, and the empty string maps to itself.

use std::sync::LazyLock;

use regex::Regex;

/// Lowercase letter or digit followed by an uppercase letter (`someWord`)
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex"));

/// Run of capitals or digits followed by a capitalized word (`HTTPServer`)
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z0-9]+)([A-Z][a-z])").expect("static regex"));

/// Normalize an identifier into snake_case
///
/// # Examples
/// ```
/// use keycase_core::inflection::underscore;
/// assert_eq!(underscore("SomeKey"), "some_key");
/// assert_eq!(underscore("HTTPServer"), "http_server");
/// assert_eq!(underscore("some-key"), "some_key");
/// ```
pub fn underscore(identifier: &str) -> String {
    // Already canonical: nothing to split, dash or lowercase
    if identifier
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        return identifier.to_string();
    }

    let words = WORD_BOUNDARY.replace_all(identifier, "${1}_${2}");
    let acronyms = ACRONYM_BOUNDARY.replace_all(&words, "${1}_${2}");
    acronyms.replace('-', "_").to_lowercase()
}

/// Convert an identifier to UpperCamelCase
///
/// Empty segments (leading, trailing or doubled underscores) are dropped.
///
/// Adjacent single-letter segments run together as capitals, which
/// `underscore` later reads as one acronym: `a_b` becomes `AB`, and `AB`
/// becomes `Ab`. Repeating the conversion is only stable when no two
/// single-letter segments are adjacent.
pub fn camelize(identifier: &str) -> String {
    let snake = underscore(identifier);
    let mut out = String::with_capacity(snake.len());
    for segment in segments(&snake) {
        push_capitalized(&mut out, segment);
    }
    out
}

/// Convert an identifier to lowerCamelCase
pub fn camelize_lower(identifier: &str) -> String {
    let snake = underscore(identifier);
    let mut out = String::with_capacity(snake.len());
    let mut parts = segments(&snake);
    if let Some(first) = parts.next() {
        // underscore() already lowercased it
        out.push_str(first);
    }
    for segment in parts {
        push_capitalized(&mut out, segment);
    }
    out
}

/// Convert an identifier to dash-case
pub fn dasherize(identifier: &str) -> String {
    underscore(identifier).replace('_', "-")
}

/// Identity conversion, so every convention shares one signature
pub fn unaltered(identifier: &str) -> String {
    identifier.to_string()
}

fn segments(snake: &str) -> impl Iterator<Item = &str> {
    snake.split('_').filter(|s| !s.is_empty())
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
