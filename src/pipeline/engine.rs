//! Classification entry point.
//!
//! `Engine` bundles the knowledge base with the vectorizer and model
//! trained on it. It is built once, never mutated, and shared read-only
//! across requests.

use super::bayes::MultinomialNb;
use super::conversation::{self, SmallTalk, FAREWELL_RESPONSE, GREETING_RESPONSE};
use super::lexical::match_symptoms;
use super::normalize::normalize;
use super::selector;
use super::types::{
    CandidateMatch, Classification, EngineError, MatchSet, ResponseKind, CONFIDENCE_FLOOR,
    MAX_RESULTS,
};
use super::vectorizer::{SparseVector, TfidfVectorizer};
use crate::knowledge::KnowledgeBase;

#[derive(Debug, Clone)]
pub struct Engine {
    kb: KnowledgeBase,
    vectorizer: TfidfVectorizer,
    model: MultinomialNb,
    /// Model class index → knowledge-base record index.
    class_records: Vec<usize>,
}

impl Engine {
    /// Train the fallback classifier on the knowledge base's symptom texts.
    pub fn new(kb: KnowledgeBase) -> Result<Self, EngineError> {
        let documents: Vec<&str> = kb
            .records()
            .iter()
            .map(|r| r.symptoms_text.as_str())
            .collect();
        let labels: Vec<String> = kb
            .records()
            .iter()
            .map(|r| r.disease_name.clone())
            .collect();

        let vectorizer = TfidfVectorizer::fit(&documents);
        let rows: Vec<SparseVector> = documents.iter().map(|d| vectorizer.transform(d)).collect();
        let model = MultinomialNb::fit(&rows, &labels, vectorizer.n_features());

        let class_records = model
            .classes()
            .iter()
            .map(|label| {
                kb.index_of(label)
                    .ok_or_else(|| EngineError::UnknownLabel(label.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            conditions = kb.len(),
            features = vectorizer.n_features(),
            "Symptom classifier trained"
        );

        Ok(Self {
            kb,
            vectorizer,
            model,
            class_records,
        })
    }

    /// Engine over the built-in knowledge base.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(KnowledgeBase::builtin()?)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Classify one raw request text.
    ///
    /// Small talk short-circuits before any matching. Otherwise the
    /// lexical matcher runs, and the statistical model only when the
    /// lexical matcher found nothing.
    pub fn classify(&self, raw: &str) -> Result<Classification, EngineError> {
        let normalized = normalize(raw);

        match conversation::detect(&normalized) {
            Some(SmallTalk::Greeting) => {
                return Ok(Classification::new(ResponseKind::Greeting, GREETING_RESPONSE))
            }
            Some(SmallTalk::Farewell) => {
                return Ok(Classification::new(ResponseKind::Farewell, FAREWELL_RESPONSE))
            }
            None => {}
        }

        let matches = self.find_matches(&normalized)?;
        tracing::debug!(
            source = matches.source(),
            candidates = matches.candidates().len(),
            "Symptom candidates ranked"
        );
        selector::render(matches.candidates(), &self.kb)
    }

    /// Ranked candidates for normalized text, tagged with their source.
    pub fn find_matches(&self, normalized: &str) -> Result<MatchSet, EngineError> {
        let lexical = match_symptoms(normalized, &self.kb);
        if !lexical.is_empty() {
            return Ok(MatchSet::Lexical(lexical));
        }
        self.predict(normalized).map(MatchSet::Statistical)
    }

    /// Top posterior classes at or above the confidence floor.
    pub fn predict(&self, normalized: &str) -> Result<Vec<CandidateMatch>, EngineError> {
        let row = self.vectorizer.transform(normalized);
        let proba = self.model.predict_proba(&row);

        let mut ranked: Vec<(usize, f64)> = proba.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .take(MAX_RESULTS)
            .filter(|&(_, p)| p >= CONFIDENCE_FLOOR)
            .map(|(class, p)| {
                let record = self.class_records[class];
                if !p.is_finite() {
                    return Err(EngineError::NonFiniteScore(record));
                }
                Ok(CandidateMatch::new(record, p))
            })
            .collect()
    }

    /// Full posterior over every record, indexed by record position.
    pub fn posteriors(&self, normalized: &str) -> Vec<f64> {
        let row = self.vectorizer.transform(normalized);
        let mut by_record = vec![0.0; self.kb.len()];
        for (class, p) in self.model.predict_proba(&row).into_iter().enumerate() {
            by_record[self.class_records[class]] = p;
        }
        by_record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::selector::{DISCLAIMER, NO_MATCH_MESSAGE};

    fn engine() -> Engine {
        Engine::builtin().unwrap()
    }

    #[test]
    fn flu_scenario() {
        let result = engine().classify("fever headache body ache").unwrap();
        assert_eq!(result.kind, ResponseKind::Guidance);
        assert!(result.body.contains("1. Influenza (Flu) (Confidence: 50.0%)"));
        assert!(result
            .body
            .contains("Recommended medications: Tamiflu, Acetaminophen, Rest, Fluids"));
        assert!(result.body.ends_with(DISCLAIMER));
    }

    #[test]
    fn farewell_scenario() {
        let result = engine().classify("thanks, bye").unwrap();
        assert_eq!(result, Classification::new(ResponseKind::Farewell, FAREWELL_RESPONSE));
    }

    #[test]
    fn empty_input_scenario() {
        let result = engine().classify("").unwrap();
        assert_eq!(result, Classification::new(ResponseKind::None, NO_MATCH_MESSAGE));
    }

    #[test]
    fn greeting_takes_precedence_over_symptoms() {
        let result = engine().classify("hello I have fever and cough").unwrap();
        assert_eq!(result.kind, ResponseKind::Greeting);
        assert_eq!(result.body, GREETING_RESPONSE);
    }

    #[test]
    fn greeting_pattern_inside_word_short_circuits() {
        let engine = engine();
        for input in ["they have a fever", "Othello"] {
            let result = engine.classify(input).unwrap();
            assert_eq!(result.kind, ResponseKind::Greeting, "{input}");
            assert_eq!(result.body, GREETING_RESPONSE);
        }
    }

    #[test]
    fn classify_is_idempotent() {
        let engine = engine();
        for input in ["fever headache body ache", "zzz qqq", "Fever, Cough!", ""] {
            assert_eq!(engine.classify(input).unwrap(), engine.classify(input).unwrap());
        }
    }

    #[test]
    fn input_is_normalized_before_matching() {
        let engine = engine();
        assert_eq!(
            engine.classify("  FEVER   headache\tbody ache ").unwrap(),
            engine.classify("fever headache body ache").unwrap()
        );
    }

    #[test]
    fn record_self_text_matches_lexically() {
        let engine = engine();
        for (idx, record) in engine.knowledge_base().records().iter().enumerate() {
            match engine.find_matches(&record.symptoms_text).unwrap() {
                MatchSet::Lexical(c) => {
                    assert_eq!(c[0], CandidateMatch::new(idx, 1.0));
                }
                other => panic!("expected lexical match, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_words_fall_back_to_statistical_and_find_nothing() {
        let engine = engine();
        let matches = engine.find_matches("the and with").unwrap();
        assert_eq!(matches, MatchSet::Statistical(vec![]));
        let result = engine.classify("purple elephant").unwrap();
        assert_eq!(result.body, NO_MATCH_MESSAGE);
        assert!(!result.body.contains(DISCLAIMER));
    }

    #[test]
    fn out_of_vocabulary_posterior_is_uniform() {
        let engine = engine();
        let posteriors = engine.posteriors("purple elephant");
        let uniform = 1.0 / 15.0;
        assert!(posteriors.iter().all(|p| (p - uniform).abs() < 1e-9));
        assert!(posteriors.iter().all(|&p| p < CONFIDENCE_FLOOR));
    }

    #[test]
    fn punctuated_input_reaches_statistical_path() {
        let engine = engine();
        // "fever," never equals the lexical token "fever"
        let matches = engine.find_matches("fever, headache,").unwrap();
        assert!(matches!(matches, MatchSet::Statistical(_)));

        let posteriors = engine.posteriors("fever, headache,");
        let best = posteriors
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(best, 0, "Influenza should have the highest posterior");
        assert!((posteriors.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn statistical_path_can_produce_guidance() {
        let engine = engine();
        let input = "rash, itching, hives,";
        let candidates = engine.predict(&normalize(input)).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].record_index, 4);
        assert!(candidates[0].score > 0.1 && candidates[0].score < 0.11);

        let result = engine.classify(input).unwrap();
        assert_eq!(result.kind, ResponseKind::Guidance);
        assert!(result.body.contains("1. Allergic Reaction (Confidence: 10.5%)"));
        assert!(result.body.ends_with(DISCLAIMER));
    }

    #[test]
    fn statistical_candidates_respect_floor_and_cap() {
        let engine = engine();
        for input in ["fever, headache,", "rash, itching, hives,", "wheezing,"] {
            let candidates = engine.predict(&normalize(input)).unwrap();
            assert!(candidates.len() <= MAX_RESULTS);
            assert!(candidates.iter().all(|c| c.score >= CONFIDENCE_FLOOR));
        }
    }
}
