// SPDX-License-Identifier: GPL-3.0-or-later
//! Whitespace tokenization for title case.

use super::classifier::{AcronymSet, Position, alphanumeric_core, normalize};
use crate::constants::is_roman_numeral;

/// A run of non-whitespace characters with its position in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token exactly as it appeared in the input, punctuation included.
    pub raw: &'a str,
    /// Lowercased with leading and trailing punctuation trimmed.
    pub normalized: String,
    pub index: usize,
    pub is_first: bool,
    pub is_last: bool,
    /// The previous token ended with a colon.
    pub after_colon: bool,
    pub is_acronym_candidate: bool,
    pub is_roman_numeral_candidate: bool,
    /// `raw` split on `-`; a token without hyphens has a single segment.
    pub segments: Vec<&'a str>,
    /// Index of the first segment containing a letter or digit.
    pub head: usize,
    /// Index of the last segment containing a letter or digit.
    pub end: usize,
}

impl Token<'_> {
    /// Whether the first/last/after-colon rule applies to this token.
    pub fn is_boundary(&self) -> bool {
        self.is_first || self.is_last || self.after_colon
    }

    /// Whether more than one segment contains a letter or digit.
    pub fn is_compound(&self) -> bool {
        self.end > self.head
    }

    /// The position of the `index`-th hyphen segment.  Segments before the
    /// first lettered one carry nothing to case and are treated as interior.
    pub fn segment_position(&self, index: usize) -> Position {
        if index < self.head {
            Position::Interior
        } else if index == self.head {
            if self.is_boundary() {
                Position::Boundary
            } else if self.is_compound() {
                Position::CompoundHead
            } else {
                Position::Interior
            }
        } else if index == self.end && self.is_last {
            Position::CompoundEnd
        } else {
            Position::CompoundTail
        }
    }
}

/// Splits `text` on whitespace.  Spacing between tokens is not retained.
pub fn tokenize<'a>(text: &'a str, acronyms: &AcronymSet) -> Vec<Token<'a>> {
    let raws: Vec<&str> = text.split_whitespace().collect();
    let last = raws.len().saturating_sub(1);
    let mut after_colon = false;

    raws.iter()
        .enumerate()
        .map(|(index, &raw)| {
            let core = alphanumeric_core(raw);
            let segments: Vec<&str> = raw.split('-').collect();
            let lettered = |segment: &&str| segment.chars().any(char::is_alphanumeric);
            let head = segments.iter().position(lettered).unwrap_or(0);
            let end = segments.iter().rposition(lettered).unwrap_or(head);
            let token = Token {
                raw,
                normalized: normalize(raw),
                index,
                is_first: index == 0,
                is_last: index == last,
                after_colon,
                is_acronym_candidate: acronyms.contains(&core),
                is_roman_numeral_candidate: is_roman_numeral(&core),
                segments,
                head,
                end,
            };
            after_colon = raw.ends_with(':');
            token
        })
        .collect()
}
