// SPDX-License-Identifier: GPL-3.0-or-later
//! Word and character counts and the headline score.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

static POWER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:how|why|what|when|top|best|new|ultimate|complete|guide)\b").unwrap()
});

static EMOTIONAL_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:amazing|incredible|shocking|secret|proven)\b").unwrap()
});

const LENGTH_BAND: RangeInclusive<usize> = 40..=60;
const LENGTH_POINTS: usize = 30;
/// Characters outside the band after which length earns nothing.
const LENGTH_FALLOFF: usize = 40;

const WORD_BAND: RangeInclusive<usize> = 6..=10;
const WORD_POINTS: usize = 30;
const WORD_FALLOFF: usize = 6;

const POWER_WORD_BONUS: usize = 20;
const EMOTIONAL_WORD_BONUS: usize = 10;
const DIGIT_BONUS: usize = 10;

/// Metrics computed over converted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub word_count: usize,
    pub char_count: usize,
    pub headline_score: u8,
}

/// Analyzes the final output text.
pub fn analyze(text: &str) -> Analysis {
    let word_count = word_count(text);
    let char_count = char_count(text);
    Analysis {
        word_count,
        char_count,
        headline_score: headline_score(text, word_count, char_count),
    }
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length in Unicode scalar values.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Scores a headline from 0 to 100.
///
/// Length and word count each earn up to 30 points inside their ideal band,
/// falling off linearly outside it.  A power word, an emotional word and a
/// digit in any script each add a fixed bonus.  Blank text scores 0.
pub fn headline_score(text: &str, word_count: usize, char_count: usize) -> u8 {
    if word_count == 0 {
        return 0;
    }

    let mut score = band_points(char_count, &LENGTH_BAND, LENGTH_POINTS, LENGTH_FALLOFF)
        + band_points(word_count, &WORD_BAND, WORD_POINTS, WORD_FALLOFF);
    if POWER_WORDS.is_match(text) {
        score += POWER_WORD_BONUS;
    }
    if EMOTIONAL_WORDS.is_match(text) {
        score += EMOTIONAL_WORD_BONUS;
    }
    if text.chars().any(char::is_numeric) {
        score += DIGIT_BONUS;
    }

    score.min(100) as u8
}

fn band_points(value: usize, band: &RangeInclusive<usize>, max: usize, falloff: usize) -> usize {
    let distance = if value < *band.start() {
        band.start() - value
    } else {
        value.saturating_sub(*band.end())
    };
    max * (falloff - distance.min(falloff)) / falloff
}
