// SPDX-License-Identifier: GPL-3.0-or-later
//! Case conversions other than title case, plus the word renderers shared
//! with the title formatter.

use super::classifier::Verdict;

/// Renders `word` according to `verdict`.
pub fn render(word: &str, verdict: Verdict) -> String {
    match verdict {
        Verdict::Capitalize => capitalize(word),
        Verdict::Lowercase => word.to_lowercase(),
        Verdict::Preserve => word.to_string(),
        Verdict::Uppercase => word.to_uppercase(),
    }
}

/// Uppercases the first alphanumeric character if it is a letter and
/// lowercases every other letter.
///
/// Leading punctuation such as quotes or brackets is skipped, so `'single'`
/// becomes `'Single'`; a leading digit leaves `1st` as it is.
pub fn capitalize(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut seen_alphanumeric = false;
    for c in word.chars() {
        if !seen_alphanumeric && c.is_alphanumeric() {
            seen_alphanumeric = true;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Capitalizes the first letter of the text and of every sentence.
///
/// A sentence starts after `.`, `!` or `?` followed by whitespace.  Every
/// other letter is lowercased.  Paragraphs are not treated specially.
pub fn to_sentence_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphabetic() {
            if capitalize_next {
                result.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                result.extend(c.to_lowercase());
            }
            continue;
        }
        result.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|next| next.is_whitespace()) {
            capitalize_next = true;
        }
    }

    result
}

/// Capitalizes every whitespace-delimited word.  Words are re-joined with
/// single spaces.
pub fn to_first_letter_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Alternates uppercase and lowercase, starting with uppercase.
///
/// Only letters advance the alternation; digits, punctuation and whitespace
/// are copied through without consuming a slot.
pub fn to_alternating_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut upper = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if upper {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            result.push(c);
        }
    }
    result
}

/// Inverts the case of every letter.
///
/// Letters without a one-to-one case mapping (`ß`, `ǅ`, `İ`) are left alone
/// so that toggling twice always restores the input.
pub fn to_toggle_case(text: &str) -> String {
    text.chars().map(invert_case).collect()
}

fn invert_case(c: char) -> char {
    if c.is_lowercase() {
        single(c.to_uppercase())
            .filter(|upper| upper.is_uppercase() && single(upper.to_lowercase()) == Some(c))
            .unwrap_or(c)
    } else if c.is_uppercase() {
        single(c.to_lowercase())
            .filter(|lower| lower.is_lowercase() && single(lower.to_uppercase()) == Some(c))
            .unwrap_or(c)
    } else {
        c
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
