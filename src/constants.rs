// SPDX-License-Identifier: GPL-3.0-or-later
//! Static lookup tables shared by every conversion.
//!
//! Everything in this module is `'static` and read-only: case types, citation
//! styles and their capitalization rules, stop words, default acronyms and
//! Roman numerals.  Concurrent conversions share these tables by reference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// Names of the supported case types, in their documented order.
pub const CASE_TYPE_NAMES: &[&str] = &[
    "title", "sentence", "upper", "lower", "first", "alt", "toggle",
];

/// Names of the supported citation styles, in their documented order.
pub const STYLE_NAMES: &[&str] = &["apa", "chicago", "ap", "mla", "nyt"];

/// Articles, coordinating conjunctions and prepositions lowercased by the
/// Chicago, AP and MLA styles.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "so",
    "the", "to", "up", "yet", "into", "with", "within", "between", "through", "after", "before",
    "under", "over", "from", "until", "unless", "upon", "while", "via", "toward", "towards",
];

/// APA only lowercases short minor words.
const APA_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "so", "the",
    "to", "up", "yet",
];

/// NYT additionally lowercases a handful of relative words.
const NYT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "nor", "of", "on", "or", "so",
    "the", "to", "up", "yet", "into", "with", "within", "between", "through", "after", "before",
    "under", "over", "from", "until", "unless", "upon", "while", "via", "toward", "towards",
    "that", "than", "who", "whom", "this", "when",
];

/// Subordinating conjunctions.  Styles that capitalize every major word treat
/// these as principal words even though some of them double as prepositions.
const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "if", "unless", "until", "while", "because", "although", "though", "since", "whereas",
];

/// Words NYT capitalizes even when they are shorter than its threshold.
const NYT_FORCED_WORDS: &[&str] = &["new", "york", "times"];

/// Acronyms rendered fully uppercase unless the caller opts out.
pub const DEFAULT_ACRONYMS: &[&str] = &[
    "nasa", "fbi", "cia", "un", "nato", "us", "uk", "uae", "eu",
];

/// The closed set of Roman numerals rendered uppercase.
pub const ROMAN_NUMERALS: &[&str] = &["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x"];

/// One of the seven case conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CaseType {
    /// Citation-style title case.
    #[default]
    Title,
    /// First letter of every sentence uppercase, everything else lowercase.
    Sentence,
    /// Everything uppercase.
    Upper,
    /// Everything lowercase.
    Lower,
    /// First letter of every word uppercase, the rest lowercase.
    First,
    /// Letters alternate between uppercase and lowercase.
    Alt,
    /// Every letter's case inverted.
    Toggle,
}

impl CaseType {
    /// All case types, in the same order as [`CASE_TYPE_NAMES`].
    pub const ALL: [CaseType; 7] = [
        CaseType::Title,
        CaseType::Sentence,
        CaseType::Upper,
        CaseType::Lower,
        CaseType::First,
        CaseType::Alt,
        CaseType::Toggle,
    ];

    /// The canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            CaseType::Title => "title",
            CaseType::Sentence => "sentence",
            CaseType::Upper => "upper",
            CaseType::Lower => "lower",
            CaseType::First => "first",
            CaseType::Alt => "alt",
            CaseType::Toggle => "toggle",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseType {
    type Err = ConvertError;

    /// Parses a case type name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        CaseType::ALL
            .into_iter()
            .find(|case_type| case_type.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConvertError::UnknownCaseType {
                value: s.to_string(),
                accepted: CASE_TYPE_NAMES,
            })
    }
}

impl TryFrom<String> for CaseType {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A citation style used for title case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Style {
    /// APA Style.
    #[default]
    Apa,
    /// Chicago Manual of Style.
    Chicago,
    /// Associated Press.
    Ap,
    /// MLA Style.
    Mla,
    /// New York Times.
    Nyt,
}

impl Style {
    /// All styles, in the same order as [`STYLE_NAMES`].
    pub const ALL: [Style; 5] = [Style::Apa, Style::Chicago, Style::Ap, Style::Mla, Style::Nyt];

    /// The canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Apa => "apa",
            Style::Chicago => "chicago",
            Style::Ap => "ap",
            Style::Mla => "mla",
            Style::Nyt => "nyt",
        }
    }

    /// The display name of the style.
    pub const fn label(self) -> &'static str {
        match self {
            Style::Apa => "APA",
            Style::Chicago => "Chicago",
            Style::Ap => "AP",
            Style::Mla => "MLA",
            Style::Nyt => "NYT",
        }
    }

    /// A one-line summary of the style's capitalization rule.
    pub const fn description(self) -> &'static str {
        match self {
            Style::Apa => {
                "APA Style - Capitalize the first word, all major words, and minor words of 4+ letters"
            }
            Style::Chicago => {
                "Chicago Manual of Style - Capitalize the first word and all major words"
            }
            Style::Ap => "Associated Press - Capitalize words with 4+ letters",
            Style::Mla => "MLA Style - Capitalize the first word and all principal words",
            Style::Nyt => "New York Times - Capitalize words with 5+ letters",
        }
    }

    /// The capitalization rule for this style.
    pub fn rule(self) -> &'static StyleRule {
        match self {
            Style::Apa => &APA,
            Style::Chicago => &CHICAGO,
            Style::Ap => &AP,
            Style::Mla => &MLA,
            Style::Nyt => &NYT,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ConvertError;

    /// Parses a style name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConvertError::UnknownStyle {
                value: s.to_string(),
                accepted: STYLE_NAMES,
            })
    }
}

impl TryFrom<String> for Style {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Minimum word length for length-based capitalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinLength {
    /// Every major word is capitalized regardless of length.
    Always,
    /// Words with at least this many alphanumeric characters are capitalized.
    Letters(usize),
}

/// Which words the length threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthScope {
    /// Every word that is not otherwise forced.
    AllWords,
    /// Only minor (stop) words; major words are always capitalized.
    MinorWords,
}

/// How the segments of a hyphenated compound after the first are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenPolicy {
    /// Every segment that is not a stop word is capitalized.
    EverySegment,
    /// Every segment is classified like a standalone interior word.
    Independent,
}

/// The capitalization parameters of one citation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub style: Style,
    pub min_length: MinLength,
    pub length_scope: LengthScope,
    /// Whether the first word, the last word and the first word after a
    /// colon are always capitalized.
    pub capitalizes_boundaries: bool,
    pub hyphen_policy: HyphenPolicy,
    stop_words: &'static [&'static str],
    principal_words: &'static [&'static str],
    forced_words: &'static [&'static str],
}

impl StyleRule {
    /// Whether `word` (lowercase, punctuation trimmed) is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word)
    }

    /// Whether a stop word still counts as a principal word.  Only styles that
    /// capitalize every major word regardless of length have principal words.
    pub fn is_principal_word(&self, word: &str) -> bool {
        self.min_length == MinLength::Always && self.principal_words.contains(&word)
    }

    /// Whether `word` is capitalized regardless of the length threshold.
    pub fn is_forced_word(&self, word: &str) -> bool {
        self.forced_words.contains(&word)
    }
}

static APA: StyleRule = StyleRule {
    style: Style::Apa,
    min_length: MinLength::Letters(4),
    length_scope: LengthScope::MinorWords,
    capitalizes_boundaries: true,
    hyphen_policy: HyphenPolicy::EverySegment,
    stop_words: APA_STOP_WORDS,
    principal_words: &[],
    forced_words: &[],
};

static CHICAGO: StyleRule = StyleRule {
    style: Style::Chicago,
    min_length: MinLength::Always,
    length_scope: LengthScope::AllWords,
    capitalizes_boundaries: true,
    hyphen_policy: HyphenPolicy::Independent,
    stop_words: STOP_WORDS,
    principal_words: SUBORDINATING_CONJUNCTIONS,
    forced_words: &[],
};

static AP: StyleRule = StyleRule {
    style: Style::Ap,
    min_length: MinLength::Letters(4),
    length_scope: LengthScope::AllWords,
    capitalizes_boundaries: true,
    hyphen_policy: HyphenPolicy::Independent,
    stop_words: STOP_WORDS,
    principal_words: &[],
    forced_words: &[],
};

static MLA: StyleRule = StyleRule {
    style: Style::Mla,
    min_length: MinLength::Always,
    length_scope: LengthScope::AllWords,
    capitalizes_boundaries: true,
    hyphen_policy: HyphenPolicy::EverySegment,
    stop_words: STOP_WORDS,
    principal_words: SUBORDINATING_CONJUNCTIONS,
    forced_words: &[],
};

static NYT: StyleRule = StyleRule {
    style: Style::Nyt,
    min_length: MinLength::Letters(5),
    length_scope: LengthScope::AllWords,
    capitalizes_boundaries: true,
    hyphen_policy: HyphenPolicy::Independent,
    stop_words: NYT_STOP_WORDS,
    principal_words: &[],
    forced_words: NYT_FORCED_WORDS,
};

/// Whether `core` (lowercase, alphanumeric only) is a Roman numeral.
pub fn is_roman_numeral(core: &str) -> bool {
    ROMAN_NUMERALS.contains(&core)
}
