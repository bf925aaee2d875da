// SPDX-License-Identifier: GPL-3.0-or-later
//! Bounded memo table for segment classification.
//!
//! A cache holds decisions for exactly one acronym set at a time.  Binding a
//! different set empties it, and every other input of the classification
//! (segment text, style, position, preserve-uppercase flag) is part of the
//! key, so cached and uncached results are always identical.

use std::collections::HashMap;

use super::classifier::{AcronymSet, ClassificationDecision, Position, classify_segment};
use crate::constants::{Style, StyleRule};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    segment: String,
    style: Style,
    position: Position,
    preserve_uppercase: bool,
}

/// Memoizes [`classify_segment`] results.
#[derive(Debug)]
pub struct ClassificationCache {
    entries: HashMap<CacheKey, ClassificationDecision>,
    acronyms: Option<AcronymSet>,
    capacity: usize,
}

impl Default for ClassificationCache {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl ClassificationCache {
    /// Entries kept before the table is flushed.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Creates a cache holding at most `capacity` entries.  A capacity of zero
    /// disables caching.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            acronyms: None,
            capacity,
        }
    }

    /// Scopes the cache to `acronyms`, dropping entries computed for any
    /// other set.
    pub fn bind(&mut self, acronyms: &AcronymSet) {
        if self.acronyms.as_ref() == Some(acronyms) {
            return;
        }
        if !self.entries.is_empty() {
            log::trace!(
                "acronym set changed; dropping {} cached decisions",
                self.entries.len()
            );
        }
        self.entries.clear();
        self.acronyms = Some(acronyms.clone());
    }

    /// Returns the cached decision for `segment`, classifying it on a miss.
    ///
    /// The cache must already be bound to `acronyms` with [`bind`](Self::bind).
    pub fn lookup_or_classify(
        &mut self,
        segment: &str,
        rule: &StyleRule,
        position: Position,
        acronyms: &AcronymSet,
        preserve_uppercase: bool,
    ) -> ClassificationDecision {
        if self.capacity == 0 {
            return classify_segment(segment, rule, position, acronyms, preserve_uppercase);
        }
        debug_assert!(
            self.acronyms.as_ref() == Some(acronyms),
            "cache used with an acronym set it is not bound to"
        );

        let key = CacheKey {
            segment: segment.to_string(),
            style: rule.style,
            position,
            preserve_uppercase,
        };
        if let Some(decision) = self.entries.get(&key) {
            return *decision;
        }

        let decision = classify_segment(segment, rule, position, acronyms, preserve_uppercase);
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, decision);
        decision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
