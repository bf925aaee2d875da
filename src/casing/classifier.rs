// SPDX-License-Identifier: GPL-3.0-or-later
//! Per-word capitalization decisions for title case.

use std::collections::BTreeSet;

use super::cache::ClassificationCache;
use super::token::Token;
use crate::constants::{
    DEFAULT_ACRONYMS, HyphenPolicy, LengthScope, MinLength, StyleRule, is_roman_numeral,
};

/// How a word should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// First letter uppercase, the rest lowercase.
    Capitalize,
    /// Every letter lowercase.
    Lowercase,
    /// Keep the original text unchanged.
    Preserve,
    /// Every letter uppercase.
    Uppercase,
}

/// Why a [`Verdict`] was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    Acronym,
    RomanNumeral,
    StopWord,
    StyleRule,
    ForcedPosition,
    UserOverride,
}

/// The outcome of classifying one word or hyphen segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassificationDecision {
    pub verdict: Verdict,
    pub reason: Reason,
}

impl ClassificationDecision {
    const fn new(verdict: Verdict, reason: Reason) -> Self {
        Self { verdict, reason }
    }
}

/// Where a segment sits within the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// First lettered segment of the first word, the last word, or the word
    /// after a colon.
    Boundary,
    /// First lettered segment of any other word that is not a compound.
    Interior,
    /// First lettered segment of a hyphenated compound away from a boundary.
    CompoundHead,
    /// A later segment of a hyphenated compound.
    CompoundTail,
    /// The final lettered segment of a compound that ends the text.
    CompoundEnd,
}

/// The built-in acronyms plus any supplied by the caller.
///
/// Entries are matched on their alphanumeric core, case-insensitively, so
/// `"U.S."`, `"us"` and `"US"` are the same acronym.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymSet {
    user: BTreeSet<String>,
}

impl AcronymSet {
    /// Builds a set from user-supplied acronyms.  Entries without any
    /// alphanumeric character are ignored.
    pub fn new<I, S>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let user = acronyms
            .into_iter()
            .map(|acronym| alphanumeric_core(acronym.as_ref()))
            .filter(|core| !core.is_empty() && !DEFAULT_ACRONYMS.contains(&core.as_str()))
            .collect();
        Self { user }
    }

    /// Whether `core` (see [`alphanumeric_core`]) is an acronym.
    pub fn contains(&self, core: &str) -> bool {
        DEFAULT_ACRONYMS.contains(&core) || self.user.contains(core)
    }

    /// The user-supplied entries not already in the built-in list.
    pub fn user_entries(&self) -> impl Iterator<Item = &str> {
        self.user.iter().map(String::as_str)
    }
}

/// Lowercase alphanumeric characters of `word`, everything else dropped.
pub fn alphanumeric_core(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `word` lowercased with leading and trailing punctuation trimmed.
pub fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Whether every letter of `word` is uppercase and it has at least two.
fn is_shouted(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

/// Classifies a single segment.  Rules are tried in priority order and the
/// first match wins.
pub fn classify_segment(
    segment: &str,
    rule: &StyleRule,
    position: Position,
    acronyms: &AcronymSet,
    preserve_uppercase: bool,
) -> ClassificationDecision {
    let core = alphanumeric_core(segment);

    if is_roman_numeral(&core) {
        return ClassificationDecision::new(Verdict::Uppercase, Reason::RomanNumeral);
    }

    let shouted = preserve_uppercase && is_shouted(segment);

    if acronyms.contains(&core) && !shouted {
        return ClassificationDecision::new(Verdict::Uppercase, Reason::Acronym);
    }

    if shouted {
        return ClassificationDecision::new(Verdict::Preserve, Reason::UserOverride);
    }

    let every_segment = rule.hyphen_policy == HyphenPolicy::EverySegment;
    let at_boundary = match position {
        Position::Boundary => true,
        Position::CompoundEnd => every_segment,
        _ => false,
    };
    if at_boundary && rule.capitalizes_boundaries {
        return ClassificationDecision::new(Verdict::Capitalize, Reason::ForcedPosition);
    }

    let word = normalize(segment);
    let length = core.chars().count();

    // The head carries the compound's verdict, so "in-depth" is never
    // rendered "in-Depth" by these styles.
    if position == Position::CompoundHead && every_segment {
        return ClassificationDecision::new(Verdict::Capitalize, Reason::StyleRule);
    }

    if rule.is_stop_word(&word) {
        if rule.is_principal_word(&word) {
            return ClassificationDecision::new(Verdict::Capitalize, Reason::StyleRule);
        }
        if let (MinLength::Letters(threshold), LengthScope::MinorWords) =
            (rule.min_length, rule.length_scope)
            && length >= threshold
        {
            return ClassificationDecision::new(Verdict::Capitalize, Reason::StyleRule);
        }
        return ClassificationDecision::new(Verdict::Lowercase, Reason::StopWord);
    }

    if matches!(position, Position::CompoundTail | Position::CompoundEnd) && every_segment {
        return ClassificationDecision::new(Verdict::Capitalize, Reason::StyleRule);
    }

    if rule.is_forced_word(&word) {
        return ClassificationDecision::new(Verdict::Capitalize, Reason::StyleRule);
    }

    let verdict = match (rule.min_length, rule.length_scope) {
        (MinLength::Always, _) | (MinLength::Letters(_), LengthScope::MinorWords) => {
            Verdict::Capitalize
        }
        (MinLength::Letters(threshold), LengthScope::AllWords) if length >= threshold => {
            Verdict::Capitalize
        }
        (MinLength::Letters(_), LengthScope::AllWords) => Verdict::Lowercase,
    };
    ClassificationDecision::new(verdict, Reason::StyleRule)
}

/// Classifies every hyphen segment of `token`, consulting `cache` first.
///
/// Only the first lettered segment is eligible for the first/last/after-colon
/// rule; later segments follow the style's [`HyphenPolicy`].
pub fn classify(
    token: &Token<'_>,
    rule: &StyleRule,
    acronyms: &AcronymSet,
    preserve_uppercase: bool,
    cache: &mut ClassificationCache,
) -> Vec<ClassificationDecision> {
    token
        .segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let position = token.segment_position(i);
            cache.lookup_or_classify(segment, rule, position, acronyms, preserve_uppercase)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Style;

    fn decide(word: &str, style: Style, position: Position) -> ClassificationDecision {
        classify_segment(word, style.rule(), position, &AcronymSet::default(), false)
    }

    #[test]
    fn test_alphanumeric_core() {
        assert_eq!(alphanumeric_core("U.S."), "us");
        assert_eq!(alphanumeric_core("NASA,"), "nasa");
        assert_eq!(alphanumeric_core("--"), "");
    }

    #[test]
    fn test_normalize_keeps_inner_punctuation() {
        assert_eq!(normalize("\"What's,"), "what's");
        assert_eq!(normalize("(The"), "the");
    }

    #[test]
    fn test_roman_numeral_beats_position() {
        let decision = decide("ii", Style::Apa, Position::Boundary);
        assert_eq!(decision.verdict, Verdict::Uppercase);
        assert_eq!(decision.reason, Reason::RomanNumeral);
    }

    #[test]
    fn test_default_acronym() {
        let decision = decide("fbi", Style::Ap, Position::Interior);
        assert_eq!(
            decision,
            ClassificationDecision::new(Verdict::Uppercase, Reason::Acronym)
        );
    }

    #[test]
    fn test_user_acronym_case_insensitive() {
        let acronyms = AcronymSet::new(["SDK", "a.p.i."]);
        let decision =
            classify_segment("Api", Style::Apa.rule(), Position::Interior, &acronyms, false);
        assert_eq!(decision.reason, Reason::Acronym);
        let decision =
            classify_segment("sdk", Style::Apa.rule(), Position::Interior, &acronyms, true);
        assert_eq!(decision.reason, Reason::Acronym);
    }

    #[test]
    fn test_preserve_uppercase_acronym_falls_through() {
        let acronyms = AcronymSet::new(["api"]);
        let decision =
            classify_segment("API", Style::Apa.rule(), Position::Interior, &acronyms, true);
        assert_eq!(
            decision,
            ClassificationDecision::new(Verdict::Preserve, Reason::UserOverride)
        );
    }

    #[test]
    fn test_preserve_uppercase_requires_two_letters() {
        let decision = classify_segment(
            "A",
            Style::Apa.rule(),
            Position::Interior,
            &AcronymSet::default(),
            true,
        );
        assert_eq!(decision.reason, Reason::StopWord);
    }

    #[test]
    fn test_boundary_overrides_stop_word() {
        assert_eq!(
            decide("the", Style::Chicago, Position::Boundary).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("the", Style::Chicago, Position::Interior).verdict,
            Verdict::Lowercase
        );
    }

    #[test]
    fn test_principal_stop_word() {
        assert_eq!(
            decide("if", Style::Chicago, Position::Interior).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("if", Style::Ap, Position::Interior).verdict,
            Verdict::Lowercase
        );
    }

    #[test]
    fn test_apa_major_words_ignore_length() {
        assert_eq!(
            decide("war", Style::Apa, Position::Interior).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("is", Style::Apa, Position::Interior).verdict,
            Verdict::Capitalize
        );
    }

    #[test]
    fn test_length_threshold_for_all_words() {
        assert_eq!(
            decide("fox", Style::Ap, Position::Interior).verdict,
            Verdict::Lowercase
        );
        assert_eq!(
            decide("jumps", Style::Ap, Position::Interior).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("test", Style::Nyt, Position::Interior).verdict,
            Verdict::Lowercase
        );
    }

    #[test]
    fn test_nyt_forced_words() {
        assert_eq!(
            decide("new", Style::Nyt, Position::Interior).verdict,
            Verdict::Capitalize
        );
    }

    #[test]
    fn test_compound_tail_policy() {
        assert_eq!(
            decide("art", Style::Apa, Position::CompoundTail).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("art", Style::Nyt, Position::CompoundTail).verdict,
            Verdict::Lowercase
        );
        assert_eq!(
            decide("of", Style::Mla, Position::CompoundTail).verdict,
            Verdict::Lowercase
        );
    }

    #[test]
    fn test_compound_head_stop_word() {
        assert_eq!(
            decide("in", Style::Apa, Position::CompoundHead).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("up", Style::Mla, Position::CompoundHead).verdict,
            Verdict::Capitalize
        );
        assert_eq!(
            decide("in", Style::Chicago, Position::CompoundHead).verdict,
            Verdict::Lowercase
        );
        assert_eq!(
            decide("in", Style::Ap, Position::CompoundHead).verdict,
            Verdict::Lowercase
        );
    }

    #[test]
    fn test_compound_end() {
        let apa = decide("in", Style::Apa, Position::CompoundEnd);
        assert_eq!(
            apa,
            ClassificationDecision::new(Verdict::Capitalize, Reason::ForcedPosition)
        );
        assert_eq!(
            decide("in", Style::Nyt, Position::CompoundEnd).verdict,
            Verdict::Lowercase
        );
        assert_eq!(
            decide("up", Style::Chicago, Position::CompoundEnd).verdict,
            Verdict::Lowercase
        );
    }

    #[test]
    fn test_acronym_set_skips_defaults_and_empty() {
        let acronyms = AcronymSet::new(["NASA", "...", "gpu"]);
        assert_eq!(acronyms.user_entries().collect::<Vec<_>>(), vec!["gpu"]);
        assert!(acronyms.contains("nasa"));
    }
}
