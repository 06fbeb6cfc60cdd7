//! Action classification: decides what the current turn should do.

use serde::{Deserialize, Serialize};

use crate::extractor::CriteriaSet;
use crate::text;
use crate::vocabulary;

/// The retrieval action for one user turn. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ListAll,
    ListBrands,
    FilteredSearch,
    Unrecognized,
}

/// Pure function of the input text and the already-extracted criteria.
/// Trigger phrases outrank criteria; criteria outrank the help fallback.
pub fn classify(input: &str, criteria: &CriteriaSet) -> Action {
    let normalized = text::normalize(input);

    if vocabulary::LIST_BRANDS_TRIGGERS.iter().any(|phrase| normalized.contains(phrase)) {
        return Action::ListBrands;
    }
    if vocabulary::LIST_ALL_TRIGGERS.iter().any(|phrase| normalized.contains(phrase)) {
        return Action::ListAll;
    }
    if !criteria.is_empty() {
        return Action::FilteredSearch;
    }
    Action::Unrecognized
}
