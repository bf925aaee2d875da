//! WebAssembly bindings for Titlefix.
//!
//! This module provides JavaScript-friendly bindings for the converter.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::{ConversionRequest, ConversionResult, ConvertError};

/// JavaScript-friendly conversion request.
///
/// Every field except `text` is optional and uses camelCase naming for
/// JavaScript conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsRequest {
    /// Text to convert.
    pub text: String,

    /// Case type name (default: "title").
    pub case_type: Option<String>,

    /// Style name, used only for title case (default: "apa").
    pub style: Option<String>,

    /// Replace curly quotes with straight ones (default: false).
    pub straight_quotes: Option<bool>,

    /// Additional acronyms, merged with the built-in list.
    pub acronyms: Option<Vec<String>>,

    /// Keep words that are already fully uppercase (default: false).
    pub preserve_uppercase: Option<bool>,
}

impl JsRequest {
    /// Convert a JavaScript request to a library request.
    fn to_request(&self) -> ConversionRequest {
        let mut request = ConversionRequest {
            text: self.text.clone(),
            ..ConversionRequest::default()
        };
        if let Some(v) = &self.case_type {
            request.case_type = v.clone();
        }
        if let Some(v) = &self.style {
            request.style = v.clone();
        }
        if let Some(v) = self.straight_quotes {
            request.straight_quotes = v;
        }
        if let Some(v) = &self.acronyms {
            request.acronyms = v.clone();
        }
        if let Some(v) = self.preserve_uppercase {
            request.preserve_uppercase = v;
        }
        request
    }
}

/// JavaScript-friendly conversion result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsConversionResult {
    pub text: String,
    pub word_count: usize,
    pub char_count: usize,
    pub headline_score: u8,
    pub case_type: String,
    /// `null` unless the case type is title.
    pub style: Option<String>,
}

impl From<ConversionResult> for JsConversionResult {
    fn from(result: ConversionResult) -> Self {
        Self {
            text: result.text,
            word_count: result.word_count,
            char_count: result.char_count,
            headline_score: result.headline_score,
            case_type: result.case_type.to_string(),
            style: result.style.map(|style| style.to_string()),
        }
    }
}

fn convert_js(request: &JsRequest) -> Result<JsConversionResult, ConvertError> {
    crate::convert(&request.to_request()).map(JsConversionResult::from)
}

/// Convert text.
///
/// # Arguments
///
/// * `request` - An object with `text` and optional `caseType`, `style`,
///   `straightQuotes`, `acronyms` and `preserveUppercase` fields
///
/// # Returns
///
/// An object with `text`, `wordCount`, `charCount`, `headlineScore`,
/// `caseType` and `style`.
#[wasm_bindgen]
pub fn convert(request: JsValue) -> Result<JsValue, JsError> {
    let js_request: JsRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsError::new(&e.to_string()))?;
    let result = convert_js(&js_request).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}

/// Supported style names.
#[wasm_bindgen(js_name = supportedStyles)]
pub fn supported_styles() -> Vec<String> {
    crate::supported_styles().iter().map(|s| s.to_string()).collect()
}

/// Supported case type names.
#[wasm_bindgen(js_name = supportedCaseTypes)]
pub fn supported_case_types() -> Vec<String> {
    crate::supported_case_types()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Validate a case type and style without converting anything.
#[wasm_bindgen(js_name = validateInput)]
pub fn validate_input(text: &str, case_type: &str, style: &str) -> Result<(), JsError> {
    crate::validate_input(text, case_type, style).map_err(|e| JsError::new(&e.to_string()))
}
