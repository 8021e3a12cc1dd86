//! Skill matcher and result assembler.
//!
//! Matching is raw substring containment over normalized text, so a phrase
//! also matches inside larger words ("java" fires on "javascript"). Variant
//! heuristics run unconditionally after the vocabulary scan.

use std::collections::BTreeSet;

use crate::skills::heuristics::{self, HEURISTIC_RULES};
use crate::skills::normalize::normalize;
use crate::skills::vocabulary::{SkillVocabulary, VOCABULARY};

/// Extracts the sorted, deduplicated list of skills found in `text`.
///
/// `language` is accepted for callers that already send it but does not
/// select a vocabulary; there is a single English vocabulary.
pub fn extract_skills(text: &str, language: &str) -> Vec<String> {
    tracing::trace!(language, bytes = text.len(), "extracting skills");
    let normalized = normalize(text);
    assemble(match_skills(&normalized, &VOCABULARY))
}

/// Base vocabulary scan plus heuristic additions over already-normalized text.
pub fn match_skills(normalized: &str, vocabulary: &SkillVocabulary) -> BTreeSet<&'static str> {
    let mut found: BTreeSet<&'static str> = vocabulary.matches_in(normalized).collect();
    found.extend(heuristics::apply(HEURISTIC_RULES, normalized));
    found
}

/// Lowercases, deduplicates and sorts matches by code point.
pub fn assemble<'a>(matches: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    matches
        .into_iter()
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
