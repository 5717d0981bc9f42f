/// Lowercase, trim, and collapse internal whitespace runs to one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Fever HEADACHE  "), "fever headache");
    }

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize("fever\t\tcough\n\n  chills"), "fever cough chills");
    }

    #[test]
    fn empty_and_blank_become_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(normalize("Thanks, Bye"), "thanks, bye");
    }
}
