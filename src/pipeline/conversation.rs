use std::sync::LazyLock;

use regex::Regex;

pub const GREETING_RESPONSE: &str = "Hello! I'm your medical assistant. I can help you identify possible \
conditions based on your symptoms. Please describe your symptoms in detail, and I'll provide you with \
information about potential conditions, medications, and precautions. Remember, this is not a substitute \
for professional medical advice.";

pub const FAREWELL_RESPONSE: &str = "Thank you for using our medical assistant. Take care of yourself! \
Remember to consult with a healthcare professional for proper medical diagnosis and treatment. \
Wishing you good health!";

/// Small talk recognized before any symptom matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalk {
    Greeting,
    Farewell,
}

static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"hello\b",
        r"hi\b",
        r"hey\b",
        r"greetings\b",
        r"good morning\b",
        r"good afternoon\b",
        r"good evening\b",
        r"howdy\b",
    ])
});

static FAREWELL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"thank\s*you\b",
        r"thanks\b",
        r"bye\b",
        r"goodbye\b",
        r"see\s*you\b",
        r"take\s*care\b",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("valid small-talk regex"))
        .collect()
}

pub fn is_greeting(text: &str) -> bool {
    GREETING_PATTERNS.iter().any(|re| re.is_match(text))
}

pub fn is_farewell(text: &str) -> bool {
    FAREWELL_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Greeting wins over farewell when both match.
pub fn detect(text: &str) -> Option<SmallTalk> {
    if is_greeting(text) {
        Some(SmallTalk::Greeting)
    } else if is_farewell(text) {
        Some(SmallTalk::Farewell)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_greetings() {
        for text in ["hello", "hi there", "Hey!", "good morning doctor", "howdy"] {
            assert_eq!(detect(text), Some(SmallTalk::Greeting), "{text}");
        }
    }

    #[test]
    fn detects_farewells() {
        for text in ["thanks, bye", "thank you", "thankyou", "goodbye", "see you", "take care"] {
            assert_eq!(detect(text), Some(SmallTalk::Farewell), "{text}");
        }
    }

    #[test]
    fn greeting_beats_farewell() {
        assert_eq!(detect("hello and goodbye"), Some(SmallTalk::Greeting));
    }

    #[test]
    fn greeting_with_symptoms_is_still_greeting() {
        assert_eq!(detect("hello i have fever and cough"), Some(SmallTalk::Greeting));
    }

    #[test]
    fn patterns_match_word_endings() {
        // Only a trailing boundary is required, so "they" and "othello" count.
        assert_eq!(detect("they have a fever"), Some(SmallTalk::Greeting));
        assert_eq!(detect("othello"), Some(SmallTalk::Greeting));
        assert_eq!(detect("my sushi was bad"), Some(SmallTalk::Greeting));
        assert_eq!(detect("chills and shivering"), None);
        assert_eq!(detect("byelaw"), None);
    }

    #[test]
    fn symptoms_alone_are_not_small_talk() {
        assert_eq!(detect("fever headache body ache"), None);
        assert_eq!(detect(""), None);
    }
}
