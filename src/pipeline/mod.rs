pub mod bayes;
pub mod conversation; // Greeting / farewell short-circuit
pub mod engine;
pub mod lexical;
pub mod normalize;
pub mod selector;
pub mod stop_words;
pub mod types;
pub mod vectorizer; // TF-IDF over unigrams + bigrams

pub use engine::Engine;
pub use types::{CandidateMatch, Classification, EngineError, MatchSet, ResponseKind};
