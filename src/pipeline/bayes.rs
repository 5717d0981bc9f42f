//! Multinomial Naive Bayes over TF-IDF vectors.
//!
//! Laplace-smoothed (alpha = 1) feature likelihoods, class priors from
//! document counts, posteriors normalized with log-sum-exp.

use std::collections::BTreeMap;

use super::vectorizer::SparseVector;

const ALPHA: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Distinct labels in sorted order. Posterior vectors align with this.
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    /// `[class][feature]` log P(feature | class).
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit on row vectors and their labels. `rows` and `labels` must have
    /// equal length.
    pub fn fit(rows: &[SparseVector], labels: &[String], n_features: usize) -> Self {
        let mut class_ids: BTreeMap<&str, usize> = BTreeMap::new();
        for label in labels {
            class_ids.entry(label.as_str()).or_insert(0);
        }
        for (id, slot) in class_ids.values_mut().enumerate() {
            *slot = id;
        }
        let n_classes = class_ids.len();

        let mut doc_counts = vec![0usize; n_classes];
        let mut feature_counts = vec![vec![0.0f64; n_features]; n_classes];
        for (row, label) in rows.iter().zip(labels) {
            let c = class_ids[label.as_str()];
            doc_counts[c] += 1;
            for &(j, w) in row {
                feature_counts[c][j] += w;
            }
        }

        let total_docs = doc_counts.iter().sum::<usize>() as f64;
        let class_log_prior = doc_counts
            .iter()
            .map(|&n| (n as f64 / total_docs).ln())
            .collect();

        let feature_log_prob = feature_counts
            .into_iter()
            .map(|counts| {
                let denom = (counts.iter().sum::<f64>() + ALPHA * n_features as f64).ln();
                counts.into_iter().map(|fc| (fc + ALPHA).ln() - denom).collect()
            })
            .collect();

        Self {
            classes: class_ids.into_keys().map(str::to_string).collect(),
            class_log_prior,
            feature_log_prob,
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Posterior probability per class, aligned with [`classes`](Self::classes).
    ///
    /// An empty vector carries no evidence and returns the priors.
    pub fn predict_proba(&self, row: &SparseVector) -> Vec<f64> {
        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior + row.iter().map(|&(j, w)| w * log_probs[j]).sum::<f64>()
            })
            .collect();

        let max = joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let log_norm = max + joint.iter().map(|v| (v - max).exp()).sum::<f64>().ln();
        joint.iter().map(|v| (v - log_norm).exp()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::vectorizer::TfidfVectorizer;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fitted(docs: &[&str], names: &[&str]) -> (TfidfVectorizer, MultinomialNb) {
        let vectorizer = TfidfVectorizer::fit(docs);
        let rows: Vec<SparseVector> = docs.iter().map(|d| vectorizer.transform(d)).collect();
        let model = MultinomialNb::fit(&rows, &labels(names), vectorizer.n_features());
        (vectorizer, model)
    }

    #[test]
    fn classes_are_sorted() {
        let (_, model) = fitted(&["rash itching", "fever cough"], &["Zoster", "Angina"]);
        assert_eq!(model.classes(), &["Angina".to_string(), "Zoster".to_string()]);
    }

    #[test]
    fn posteriors_sum_to_one() {
        let (v, model) = fitted(
            &["fever cough", "rash itching", "nausea vomiting"],
            &["A", "B", "C"],
        );
        let proba = model.predict_proba(&v.transform("fever rash"));
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn evidence_favors_matching_class() {
        let (v, model) = fitted(
            &["fever cough", "rash itching", "nausea vomiting"],
            &["A", "B", "C"],
        );
        let proba = model.predict_proba(&v.transform("itching rash"));
        assert!(proba[1] > proba[0]);
        assert!(proba[1] > proba[2]);
    }

    #[test]
    fn empty_vector_returns_uniform_prior() {
        let (_, model) = fitted(
            &["fever cough", "rash itching", "nausea vomiting", "joint pain"],
            &["A", "B", "C", "D"],
        );
        let proba = model.predict_proba(&Vec::new());
        for p in proba {
            assert!((p - 0.25).abs() < 1e-12);
        }
    }
}
