// SPDX-License-Identifier: GPL-3.0-or-later
//! Quote normalization.
//!
//! Curly quotation marks are folded back to their ASCII equivalents.  This is
//! the last pass over converted text, so it runs after casing.

// Unicode constants for punctuation characters

/// Straight double quote (U+0022)
pub const STRAIGHT_DOUBLE_QUOTE: char = '\u{0022}';
/// Left double quotation mark (U+201C)
pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
/// Right double quotation mark (U+201D)
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

/// Straight single quote / apostrophe (U+0027)
pub const STRAIGHT_SINGLE_QUOTE: char = '\u{0027}';
/// Left single quotation mark (U+2018)
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
/// Right single quotation mark (U+2019) - also used as curly apostrophe
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Replaces curly single and double quotes (and curly apostrophes) with
/// straight ones.  Every other character is left unchanged.
pub fn straighten_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE => STRAIGHT_DOUBLE_QUOTE,
            LEFT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE => STRAIGHT_SINGLE_QUOTE,
            other => other,
        })
        .collect()
}
