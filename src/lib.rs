//! Titlefix converts text between case styles.  Title case follows the
//! capitalization rules of a citation style (APA, Chicago, AP, MLA or NYT):
//! stop words, length thresholds, hyphenated compounds, subtitles after a
//! colon, acronyms and Roman numerals.
//!
//! # Example
//!
//! ```
//! use titlefix::{Options, title_fix};
//!
//! let result = title_fix("the art of war: a guide to strategy", &Options::default());
//! assert_eq!(result.text, "The Art of War: A Guide to Strategy");
//! assert_eq!(result.word_count, 8);
//! ```

pub mod analyzer;
pub mod casing;
pub mod config;
pub mod constants;

#[cfg(feature = "wasm")]
mod wasm;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use casing::punctuation::straighten_quotes;
use casing::{AcronymSet, ClassificationCache, title, transform};
pub use constants::{CASE_TYPE_NAMES, CaseType, STYLE_NAMES, Style, StyleRule};

/// Conversion options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// The case conversion to apply. Default: title.
    pub case_type: CaseType,
    /// Citation style, used only for title case. Default: APA.
    pub style: Style,
    /// Replace curly quotes and apostrophes with straight ones. Default: false.
    pub straight_quotes: bool,
    /// Acronyms rendered uppercase in addition to the built-in list.
    pub acronyms: Vec<String>,
    /// Keep words that are already fully uppercase as they are. Default: false.
    pub preserve_uppercase: bool,
}

/// A conversion request with string selectors, as received from a caller
/// outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionRequest {
    pub text: String,
    pub case_type: String,
    pub style: String,
    pub straight_quotes: bool,
    pub acronyms: Vec<String>,
    pub preserve_uppercase: bool,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            case_type: CaseType::default().to_string(),
            style: Style::default().to_string(),
            straight_quotes: false,
            acronyms: Vec::new(),
            preserve_uppercase: false,
        }
    }
}

impl ConversionRequest {
    /// Validates the selectors and builds typed [`Options`].
    ///
    /// The style is ignored (and not validated) unless the case type is
    /// title.
    pub fn to_options(&self) -> Result<Options, ConvertError> {
        let case_type: CaseType = self.case_type.parse()?;
        let style = match case_type {
            CaseType::Title => self.style.parse()?,
            _ => Style::default(),
        };
        Ok(Options {
            case_type,
            style,
            straight_quotes: self.straight_quotes,
            acronyms: self.acronyms.clone(),
            preserve_uppercase: self.preserve_uppercase,
        })
    }
}

/// The outcome of one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub text: String,
    /// Whitespace-delimited tokens in `text`.
    pub word_count: usize,
    /// Unicode scalar values in `text`.
    pub char_count: usize,
    /// Heuristic headline quality, 0 to 100.
    pub headline_score: u8,
    pub case_type: CaseType,
    /// The style used; `None` unless `case_type` is title.
    pub style: Option<Style>,
}

/// A reusable converter.
///
/// Holds a classification cache that survives between calls.  The cache is
/// keyed on every classification input, so options may differ freely from
/// one call to the next.
#[derive(Debug, Default)]
pub struct Converter {
    cache: ClassificationCache,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter whose cache holds at most `capacity` entries;
    /// zero disables caching.
    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache: ClassificationCache::with_capacity(capacity),
        }
    }

    /// Converts `text` according to `options`.
    pub fn convert(&mut self, text: &str, options: &Options) -> ConversionResult {
        let acronyms = AcronymSet::new(&options.acronyms);
        self.convert_with_acronyms(text, options, &acronyms)
    }

    fn convert_with_acronyms(
        &mut self,
        text: &str,
        options: &Options,
        acronyms: &AcronymSet,
    ) -> ConversionResult {
        let converted = match options.case_type {
            CaseType::Title => title::to_title_case(
                text,
                options.style.rule(),
                acronyms,
                options.preserve_uppercase,
                &mut self.cache,
            ),
            CaseType::Sentence => transform::to_sentence_case(text),
            CaseType::Upper => transform::to_upper(text),
            CaseType::Lower => transform::to_lower(text),
            CaseType::First => transform::to_first_letter_case(text),
            CaseType::Alt => transform::to_alternating_case(text),
            CaseType::Toggle => transform::to_toggle_case(text),
        };
        let converted = if options.straight_quotes {
            straighten_quotes(&converted)
        } else {
            converted
        };

        let analysis = analyzer::analyze(&converted);
        log::debug!(
            "converted {} bytes as {} -> {} words, score {}",
            text.len(),
            options.case_type,
            analysis.word_count,
            analysis.headline_score
        );

        ConversionResult {
            text: converted,
            word_count: analysis.word_count,
            char_count: analysis.char_count,
            headline_score: analysis.headline_score,
            case_type: options.case_type,
            style: (options.case_type == CaseType::Title).then_some(options.style),
        }
    }
}

/// Converts `text` according to `options`.
pub fn title_fix(text: &str, options: &Options) -> ConversionResult {
    Converter::new().convert(text, options)
}

/// Validates `request` and converts its text.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownCaseType`] or [`ConvertError::UnknownStyle`]
/// before any text is processed.
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
    let options = request.to_options()?;
    Ok(title_fix(&request.text, &options))
}

/// Converts many texts in parallel.  Results are in input order.
pub fn convert_batch<S>(texts: &[S], options: &Options) -> Vec<ConversionResult>
where
    S: AsRef<str> + Sync,
{
    let acronyms = AcronymSet::new(&options.acronyms);
    texts
        .par_iter()
        .map_init(Converter::new, |converter, text| {
            converter.convert_with_acronyms(text.as_ref(), options, &acronyms)
        })
        .collect()
}

/// Checks the case type and, for title case, the style.  Does not look at
/// or process the text.
///
/// # Errors
///
/// Returns the first unrecognized selector, case type first.
pub fn validate_input(_text: &str, case_type: &str, style: &str) -> Result<(), ConvertError> {
    let case_type: CaseType = case_type.parse()?;
    if case_type == CaseType::Title {
        style.parse::<Style>()?;
    }
    Ok(())
}

/// Supported style names, in documented order.
pub fn supported_styles() -> &'static [&'static str] {
    STYLE_NAMES
}

/// Supported case type names, in documented order.
pub fn supported_case_types() -> &'static [&'static str] {
    CASE_TYPE_NAMES
}

/// Errors raised when a request names an unknown case type or style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The case type is not one of [`CASE_TYPE_NAMES`].
    UnknownCaseType {
        value: String,
        accepted: &'static [&'static str],
    },
    /// The style is not one of [`STYLE_NAMES`].
    UnknownStyle {
        value: String,
        accepted: &'static [&'static str],
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnknownCaseType { value, accepted } => write!(
                f,
                "invalid case type '{}': must be one of {}",
                value,
                accepted.join(", ")
            ),
            ConvertError::UnknownStyle { value, accepted } => write!(
                f,
                "invalid style '{}': must be one of {}",
                value,
                accepted.join(", ")
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = title_fix("", &Options::default());
        assert_eq!(result.text, "");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.char_count, 0);
        assert_eq!(result.headline_score, 0);
        assert_eq!(result.style, Some(Style::Apa));
    }

    #[test]
    fn test_style_absent_for_non_title() {
        let options = Options {
            case_type: CaseType::Upper,
            style: Style::Nyt,
            ..Options::default()
        };
        let result = title_fix("test text", &options);
        assert_eq!(result.text, "TEST TEXT");
        assert_eq!(result.style, None);
    }

    #[test]
    fn test_request_defaults() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"text": "hello world"}"#).unwrap();
        let result = convert(&request).unwrap();
        assert_eq!(result.text, "Hello World");
        assert_eq!(result.case_type, CaseType::Title);
    }

    #[test]
    fn test_request_ignores_style_for_non_title() {
        let request = ConversionRequest {
            text: "abc".to_string(),
            case_type: "upper".to_string(),
            style: "klingon".to_string(),
            ..ConversionRequest::default()
        };
        assert_eq!(convert(&request).unwrap().text, "ABC");
    }

    #[test]
    fn test_validate_input() {
        assert!(validate_input("x", "title", "apa").is_ok());
        assert!(validate_input("x", "upper", "anything").is_ok());
        assert!(matches!(
            validate_input("x", "title", "klingon"),
            Err(ConvertError::UnknownStyle { .. })
        ));
        assert!(matches!(
            validate_input("x", "bogus", "apa"),
            Err(ConvertError::UnknownCaseType { .. })
        ));
    }

    #[test]
    fn test_error_display_lists_accepted_values() {
        let err = validate_input("x", "title", "klingon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid style 'klingon': must be one of apa, chicago, ap, mla, nyt"
        );
    }

    #[test]
    fn test_result_serializes_lowercase_names() {
        let result = title_fix("x", &Options::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["case_type"], "title");
        assert_eq!(json["style"], "apa");

        let options = Options {
            case_type: CaseType::Lower,
            ..Options::default()
        };
        let json = serde_json::to_value(title_fix("x", &options)).unwrap();
        assert!(json["style"].is_null());
    }

    #[test]
    fn test_converter_reuse_with_different_acronyms() {
        let mut converter = Converter::new();
        let plain = converter.convert("the sdk guide", &Options::default());
        let with_sdk = converter.convert(
            "the sdk guide",
            &Options {
                acronyms: vec!["sdk".to_string()],
                ..Options::default()
            },
        );
        assert_eq!(plain.text, "The Sdk Guide");
        assert_eq!(with_sdk.text, "The SDK Guide");
    }

    #[test]
    fn test_cached_and_uncached_agree() {
        let text = "the state-of-the-art guide to nasa: a look at world war ii";
        for style in Style::ALL {
            let options = Options {
                style,
                ..Options::default()
            };
            let cached = Converter::new().convert(text, &options);
            let uncached = Converter::with_cache_capacity(0).convert(text, &options);
            assert_eq!(cached, uncached);
        }
    }

    #[test]
    fn test_supported_lists() {
        assert_eq!(supported_styles(), &["apa", "chicago", "ap", "mla", "nyt"]);
        assert_eq!(supported_case_types().len(), 7);
        assert_eq!(supported_case_types()[0], "title");
    }
}
