//! Sentence-level differences between two answers
//!
//! A grounded-answer sentence counts as a difference when no source-free
//! sentence contains it and it contains no source-free sentence, compared
//! case-insensitively. This is lexical overlap only: two unrelated sentences
//! sharing a short fragment still match, and a true contradiction worded like
//! the original does not register.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of sentence-ending punctuation
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Split text into sentence fragments on `.`, `!` and `?`.
///
/// Fragments are returned untrimmed; those that are blank after trimming are
/// dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .collect()
}

/// Sentences of `answer_with_source` with no containment match in
/// `answer_without_source`, trimmed, in their original order.
pub fn extract_differences(answer_without_source: &str, answer_with_source: &str) -> Vec<String> {
    let baseline: Vec<String> = split_sentences(answer_without_source)
        .into_iter()
        .map(str::to_lowercase)
        .collect();

    split_sentences(answer_with_source)
        .into_iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            !baseline
                .iter()
                .any(|other| other.contains(&lowered) || lowered.contains(other.as_str()))
        })
        .map(|sentence| sentence.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_terminal_punctuation() {
        let sentences = split_sentences("First one. Second one! Third one? ");

        assert_eq!(sentences, vec!["First one", " Second one", " Third one"]);
    }

    #[test]
    fn test_split_collapses_punctuation_runs() {
        let sentences = split_sentences("Really?! Yes... indeed");

        assert_eq!(sentences, vec!["Really", " Yes", " indeed"]);
    }

    #[test]
    fn test_split_drops_blank_fragments() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  . ! ?\n").is_empty());
    }

    #[test]
    fn test_identical_answers_have_no_differences() {
        let answer = "Water boils at 100 degrees. It freezes at zero!";

        assert!(extract_differences(answer, answer).is_empty());
    }

    #[test]
    fn test_new_sentence_is_reported_trimmed() {
        let differences = extract_differences(
            "The sky is blue.",
            "The sky is blue. I was wrong earlier.",
        );

        assert_eq!(differences, vec!["I was wrong earlier"]);
    }

    #[test]
    fn test_containment_is_case_insensitive() {
        let differences = extract_differences(
            "PARIS IS THE CAPITAL OF FRANCE",
            "Paris is the capital",
        );

        assert!(differences.is_empty());
    }

    #[test]
    fn test_containment_works_both_ways() {
        // grounded sentence contains the baseline sentence
        assert!(extract_differences("Rust", "Rust is a language").is_empty());
        // baseline sentence contains the grounded sentence
        assert!(extract_differences("Rust is a language", "Rust").is_empty());
    }

    #[test]
    fn test_short_fragments_match_trivially() {
        // "the" appears inside the grounded sentence, so it is not a difference
        let differences = extract_differences("The", "Einstein proposed the theory");

        assert!(differences.is_empty());
    }

    #[test]
    fn test_leading_whitespace_takes_part_in_matching() {
        // " mars is red" carries its leading space, which "Mars is red" lacks
        let differences = extract_differences("Mars is red", "Intro. Mars is red");

        assert_eq!(differences, vec!["Intro"]);

        let differences = extract_differences("Mars is red now", "Intro. Mars is red");

        assert_eq!(differences, vec!["Intro", "Mars is red"]);
    }

    #[test]
    fn test_empty_baseline_reports_every_sentence() {
        let differences = extract_differences("", "One. Two! Three?");

        assert_eq!(differences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_empty_grounded_answer_has_no_differences() {
        assert!(extract_differences("Something was said.", "").is_empty());
    }
}
