use serde::Serialize;
use thiserror::Error;

use crate::knowledge::KnowledgeBaseError;

/// Minimum score a candidate needs to be shown.
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Maximum number of candidates rendered per request.
pub const MAX_RESULTS: usize = 3;

/// A knowledge-base record scored against one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMatch {
    /// Position of the record in the knowledge base.
    pub record_index: usize,
    /// Confidence in [0, 1]. Overlap ratio or posterior probability.
    pub score: f64,
}

impl CandidateMatch {
    pub fn new(record_index: usize, score: f64) -> Self {
        Self {
            record_index,
            score,
        }
    }
}

/// Ranked candidates tagged with the path that produced them.
///
/// The two paths never mix: statistical candidates exist only when the
/// lexical path came back empty.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSet {
    Lexical(Vec<CandidateMatch>),
    Statistical(Vec<CandidateMatch>),
}

impl MatchSet {
    pub fn candidates(&self) -> &[CandidateMatch] {
        match self {
            MatchSet::Lexical(c) | MatchSet::Statistical(c) => c,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            MatchSet::Lexical(_) => "lexical",
            MatchSet::Statistical(_) => "statistical",
        }
    }
}

/// What kind of answer a request produced.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Guidance,
    None,
    Greeting,
    Farewell,
}

/// Final answer handed to the transport layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Classification {
    pub kind: ResponseKind,
    pub body: String,
}

impl Classification {
    pub fn new(kind: ResponseKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Candidate references missing record {0}")]
    RecordOutOfRange(usize),

    #[error("Classifier label has no matching record: {0}")]
    UnknownLabel(String),

    #[error("Non-finite score for record {0}")]
    NonFiniteScore(usize),

    #[error("Invalid knowledge base: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),
}
