// SPDX-License-Identifier: GPL-3.0-or-later
//! Citation-style title case.

use super::cache::ClassificationCache;
use super::classifier::{AcronymSet, ClassificationDecision, classify};
use super::token::{Token, tokenize};
use super::transform::render;
use crate::constants::StyleRule;

/// Converts `text` to title case under `rule`.
///
/// Tokens are re-joined with single spaces; whitespace-only input yields an
/// empty string.
pub fn to_title_case(
    text: &str,
    rule: &StyleRule,
    acronyms: &AcronymSet,
    preserve_uppercase: bool,
    cache: &mut ClassificationCache,
) -> String {
    let tokens = tokenize(text, acronyms);
    if tokens.is_empty() {
        return String::new();
    }
    cache.bind(acronyms);

    tokens
        .iter()
        .map(|token| {
            let decisions = classify(token, rule, acronyms, preserve_uppercase, cache);
            if token.is_acronym_candidate || token.is_roman_numeral_candidate {
                log::trace!("token {} ({:?}) -> {:?}", token.index, token.raw, decisions);
            }
            render_token(token, &decisions)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_token(token: &Token<'_>, decisions: &[ClassificationDecision]) -> String {
    token
        .segments
        .iter()
        .zip(decisions)
        .map(|(segment, decision)| render(segment, decision.verdict))
        .collect::<Vec<_>>()
        .join("-")
}
