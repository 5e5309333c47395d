//! JSON parsing helpers.
//!
//! The game reads `pack.json` with a lenient parser that tolerates `//`
//! and `/* */` comments plus trailing commas, so the manifest check
//! preprocesses the text the same way before handing it to serde.
//! Preprocessing preserves every newline, which keeps serde's reported
//! line numbers valid against the original text.

use std::collections::BTreeMap;

use serde_json::Value;

/// Parse lenient (commented, trailing-comma) JSON into a value.
pub fn parse_lenient_json(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&strip_trailing_commas(&strip_comments(text)))
}

/// Parse a localization document: a two-level mapping from category to
/// entry name to value. `BTreeMap` keeps key iteration deterministic.
pub fn parse_localization_map(
    text: &str,
) -> Result<BTreeMap<String, BTreeMap<String, Value>>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Strip single-line (`//`) and multi-line (`/* */`) comments, preserving
/// newlines for line counting.
fn strip_comments(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut result = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < len {
        if in_string {
            result.push(chars[i]);
            if chars[i] == '\\' && i + 1 < len {
                i += 1;
                result.push(chars[i]);
            } else if chars[i] == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if chars[i] == '"' {
            in_string = true;
            result.push(chars[i]);
            i += 1;
            continue;
        }

        if chars[i] == '/' && i + 1 < len {
            if chars[i + 1] == '/' {
                // Single-line comment: skip until end of line
                i += 2;
                while i < len && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            } else if chars[i + 1] == '*' {
                // Multi-line comment: skip until */
                i += 2;
                while i + 1 < len && !(chars[i] == '*' && chars[i + 1] == '/') {
                    if chars[i] == '\n' {
                        result.push('\n');
                    }
                    i += 1;
                }
                if i + 1 < len {
                    i += 2;
                }
                continue;
            }
        }

        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Drop a `,` whose next significant character closes an object or array.
/// Runs after comment stripping, so whitespace lookahead is sufficient.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut result = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < len {
        if in_string {
            result.push(chars[i]);
            if chars[i] == '\\' && i + 1 < len {
                i += 1;
                result.push(chars[i]);
            } else if chars[i] == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if chars[i] == '"' {
            in_string = true;
            result.push(chars[i]);
            i += 1;
            continue;
        }

        if chars[i] == ',' {
            let mut next = i + 1;
            while next < len && chars[next].is_whitespace() {
                next += 1;
            }
            if next < len && (chars[next] == '}' || chars[next] == ']') {
                i += 1;
                continue;
            }
        }

        result.push(chars[i]);
        i += 1;
    }

    result
}
