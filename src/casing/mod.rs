// SPDX-License-Identifier: GPL-3.0-or-later
//! The casing engine: tokenization, per-word classification, title case and
//! the other case conversions.

pub mod cache;
pub mod classifier;
pub mod punctuation;
pub mod title;
pub mod token;
pub mod transform;

pub use cache::ClassificationCache;
pub use classifier::{AcronymSet, ClassificationDecision, Position, Reason, Verdict};
pub use token::Token;
