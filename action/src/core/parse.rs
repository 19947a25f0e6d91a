//! Total parsers for raw host input strings.
//!
//! None of these functions fail: unrecognized or malformed input falls back to
//! an empty list or the caller-supplied default.

use std::num::IntErrorKind;

/// Split a comma-delimited list, trimming each entry and dropping empty ones.
///
/// Order of the remaining entries is preserved.
pub fn parse_string_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a boolean flag.
///
/// `true`/`1` and `false`/`0` are recognized case-insensitively after
/// trimming. Anything else, including an empty string, yields `default`.
pub fn parse_bool(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => default,
    }
}

/// Parse a base-10 integer, returning `default` when no number is present.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// decimal digits is used; trailing text is ignored (`"42s"` is 42, `"2.5"`
/// is 2). A digit run too large for `i64` saturates to `i64::MAX`/`i64::MIN`.
pub fn parse_int(raw: &str, default: i64) -> i64 {
    let text = raw.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => ("-", &text[1..]),
        Some(b'+') => ("", &text[1..]),
        _ => ("", text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return default;
    }
    match format!("{sign}{}", &rest[..digits_len]).parse::<i64>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::NegOverflow => i64::MIN,
            IntErrorKind::PosOverflow => i64::MAX,
            _ => default,
        },
    }
}
