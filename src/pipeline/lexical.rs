//! Token-set overlap between the request and each knowledge-base record.
//!
//! The score divides the intersection by the LARGER of the two token sets,
//! so both terse and verbose inputs are penalized. This is not Jaccard
//! (which would divide by the union) and ranking depends on it.

use std::collections::HashSet;

use super::types::CandidateMatch;
use crate::knowledge::KnowledgeBase;

fn token_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Overlap score of two token sets, `None` when they share nothing.
pub fn overlap_score<'a>(user: &HashSet<&'a str>, record: &HashSet<&'a str>) -> Option<f64> {
    let shared = user.intersection(record).count();
    if shared == 0 {
        return None;
    }
    let denom = user.len().max(record.len());
    Some(shared as f64 / denom as f64)
}

/// Score every record against normalized input, best first.
///
/// Only records sharing at least one token are returned. Ties keep
/// knowledge-base order.
pub fn match_symptoms(normalized: &str, kb: &KnowledgeBase) -> Vec<CandidateMatch> {
    let user = token_set(normalized);
    if user.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<CandidateMatch> = kb
        .records()
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let record_tokens = token_set(&record.symptoms_text);
            overlap_score(&user, &record_tokens).map(|score| CandidateMatch::new(idx, score))
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
