// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: raw field text in, comparable tokens out.
//!
//! Content bodies arrive with presentational markup inlined. Visible-text
//! extraction is a hard precondition of indexing: tag names and attribute
//! values must never become terms.
//!
//! # Algorithm
//!
//! 1. Strip markup (each `<...>` without an inner `<` becomes a space; any
//!    other `<` is plain text)
//! 2. Decode the handful of entities authors actually use (`&nbsp;`, `&amp;`, ...)
//! 3. Lowercase ASCII letters. Hebrew has no case and is left alone
//! 4. Split on whitespace
//! 5. Drop characters that are neither word characters (`[A-Za-z0-9_]`) nor in
//!    the Hebrew block (U+0590..=U+05FF)
//! 6. Discard tokens of [`MIN_TOKEN_CHARS`] - 1 characters or fewer
//!
//! Duplicates are preserved. Term frequency is a ranking signal downstream.
//!
//! No Unicode normalization is applied to Hebrew: final-letter forms and
//! niqqud are compared as written.

/// Shortest token that survives normalization, in characters.
pub const MIN_TOKEN_CHARS: usize = 3;

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
];

/// Is this character in the Hebrew Unicode block?
#[inline]
pub fn is_hebrew(c: char) -> bool {
    ('\u{0590}'..='\u{05FF}').contains(&c)
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Remove markup tags, replacing each with a single space so that words on
/// either side of a tag don't fuse.
///
/// A `<` only opens a tag when a `>` closes it before any other `<`. Otherwise
/// it is a literal "less than" (`eGFR <30`) and the text after it stays
/// visible. Entities are decoded after stripping, so an encoded `&lt;`
/// survives as visible text.
pub fn strip_markup(text: &str) -> String {
    if !text.contains('<') && !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(|c: char| c == '<' || c == '>') {
            Some(end) if after.as_bytes()[end] == b'>' => {
                out.push(' ');
                rest = &after[end + 1..];
            }
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if out.contains('&') {
        for (entity, replacement) in ENTITIES {
            if out.contains(entity) {
                out = out.replace(entity, replacement);
            }
        }
    }
    out
}

/// Visible text with markup removed and whitespace collapsed. Used for snippets.
pub fn visible_text(text: &str) -> String {
    strip_markup(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize one whitespace-delimited word. `None` if nothing useful is left.
pub fn normalize_token(word: &str) -> Option<String> {
    let token: String = word
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| is_word_char(c) || is_hebrew(c))
        .collect();

    if token.chars().count() >= MIN_TOKEN_CHARS {
        Some(token)
    } else {
        None
    }
}

/// Turn raw field text into an ordered token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_markup(text)
        .split_whitespace()
        .filter_map(normalize_token)
        .collect()
}

/// Length of the trimmed query in characters (not bytes: Hebrew is two bytes a letter).
pub fn trimmed_len(query: &str) -> usize {
    query.trim().chars().count()
}
