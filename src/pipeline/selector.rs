//! Turns a ranked candidate list into the guidance text.

use std::fmt::Write as _;

use super::types::{
    CandidateMatch, Classification, EngineError, ResponseKind, CONFIDENCE_FLOOR, MAX_RESULTS,
};
use crate::knowledge::KnowledgeBase;

pub const RESULTS_HEADER: &str = "Based on your symptoms, here are the possible conditions:\n\n";

pub const DISCLAIMER: &str = "Please note: This is not a substitute for professional medical advice. \
If symptoms are severe or persist, please consult a healthcare provider.";

pub const NO_MATCH_MESSAGE: &str = "I couldn't identify any specific conditions based on your input. \
Please provide more detailed symptoms or try rephrasing your query.";

/// Render up to [`MAX_RESULTS`] candidates in the given order.
///
/// Candidates under [`CONFIDENCE_FLOOR`] are skipped. When nothing
/// survives, the no-match message is returned without the disclaimer.
pub fn render(
    candidates: &[CandidateMatch],
    kb: &KnowledgeBase,
) -> Result<Classification, EngineError> {
    let mut body = String::from(RESULTS_HEADER);
    let mut any_rendered = false;

    for (position, candidate) in candidates.iter().take(MAX_RESULTS).enumerate() {
        if !candidate.score.is_finite() {
            return Err(EngineError::NonFiniteScore(candidate.record_index));
        }
        if candidate.score < CONFIDENCE_FLOOR {
            continue;
        }
        let record = kb
            .get(candidate.record_index)
            .ok_or(EngineError::RecordOutOfRange(candidate.record_index))?;

        // Writing to a String cannot fail.
        let _ = write!(
            body,
            "{}. {} (Confidence: {:.1}%)\n   Recommended medications: {}\n   Precautions: {}\n\n",
            position + 1,
            record.disease_name,
            candidate.score * 100.0,
            record.medications,
            record.precautions,
        );
        any_rendered = true;
    }

    if !any_rendered {
        return Ok(Classification::new(ResponseKind::None, NO_MATCH_MESSAGE));
    }

    body.push_str(DISCLAIMER);
    Ok(Classification::new(ResponseKind::Guidance, body))
}
