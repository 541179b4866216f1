//! Program error code extraction from execution logs.
//!
//! Runtimes report a failed instruction with a line such as
//! `Program log: Custom program error: 0x07D0`. Only the first such line in a
//! batch is significant; everything else is ignored.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Literal text that precedes the hex code in a failure line.
pub const ERROR_LINE_MARKER: &str = "Custom program error: ";

static ERROR_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Custom program error: (0x[a-f0-9]+)").expect("error line regex is valid")
});

/// Extract the program error code from the first matching log line.
///
/// Returns `None` when no line matches, or when the first matching line
/// carries a hex literal that does not fit an `i64`. Scanning stops at the
/// first match either way.
pub fn extract_code<S: AsRef<str>>(logs: &[S]) -> Option<i64> {
    for (index, line) in logs.iter().enumerate() {
        let Some(hex) = match_hex_literal(line.as_ref()) else {
            continue;
        };
        trace!(index, literal = hex, "matched program error line");
        return parse_hex(hex);
    }
    None
}

/// Return the `0x..` literal of a failure line, if the line is one.
fn match_hex_literal(line: &str) -> Option<&str> {
    ERROR_LINE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn parse_hex(literal: &str) -> Option<i64> {
    let digits = &literal[2..];
    match i64::from_str_radix(digits, 16) {
        Ok(code) => Some(code),
        Err(err) => {
            trace!(literal, %err, "hex literal did not parse");
            None
        }
    }
}
