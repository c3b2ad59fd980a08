//! Fixed validation patterns for contact fields.
//!
//! The patterns accept exactly what the stored contact lists have always
//! been validated against, so they must not be loosened or tightened.
//!
//! Whitespace and line terminators are spelled out instead of using `\s`
//! and `.`: the regex crate's Unicode whitespace counts U+0085 but not
//! U+FEFF, and its `.` would let `\r`, U+2028 and U+2029 through. The
//! classes below follow the browser definitions the stored data was
//! checked with.

use regex::Regex;
use std::sync::OnceLock;

/// Browser whitespace, for use inside a character class.
macro_rules! space_class {
    () => {
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

/// Browser line terminators, for use inside a character class.
macro_rules! line_break_class {
    () => {
        r"\n\r\x{2028}\x{2029}"
    };
}

/// At least one non-whitespace character, and the value must not start
/// with a line terminator.
pub const NOT_EMPTY: &str = concat!(
    r"(?s)^(?:[^",
    space_class!(),
    r"]|[^",
    line_break_class!(),
    r"].*[^",
    space_class!(),
    r"])"
);

/// `local@domain`, where the local part is dot-separated atoms or a quoted
/// string, and the domain is either a bracketed IPv4 literal or
/// dot-separated labels ending in two or more letters.
pub const EMAIL: &str = concat!(
    r"^(([^<>()\\\[\]\\.,;:",
    space_class!(),
    r#"@"]+(\.[^<>()\\\[\]\\.,;:"#,
    space_class!(),
    r#"@"]+)*)|("[^"#,
    line_break_class!(),
    r#"]+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#
);

/// Optional leading `+`, optional parenthesized prefix of 1-4 digits, then
/// digits, dashes, dots, slashes and whitespace.
pub const PHONE: &str = concat!(
    r"^[+]*[(]{0,1}[0-9]{1,4}[)]{0,1}[-",
    space_class!(),
    r"\\./0-9]*$"
);

pub(crate) fn not_empty() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NOT_EMPTY).expect("NOT_EMPTY pattern is valid"))
}

pub(crate) fn email() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL).expect("EMAIL pattern is valid"))
}

pub(crate) fn phone() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PHONE).expect("PHONE pattern is valid"))
}
