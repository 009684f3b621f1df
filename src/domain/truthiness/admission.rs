//! Error-admission detection

use serde::{Deserialize, Serialize};

/// Phrases that signal the model is walking back an earlier answer
pub const DEFAULT_ADMISSION_PHRASES: &[&str] = &[
    "i was incorrect",
    "i was wrong",
    "i made a mistake",
    "i apologize for the error",
    "correction",
    "incorrect information",
    "inaccurate",
    "mistaken",
    "error in my previous",
    "not accurate",
];

/// Ordered set of lowercase literal phrases searched for in a grounded answer.
///
/// Matching is plain substring search, so "correction" also fires inside an
/// unrelated sentence such as "course correction of the probe".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AdmissionPhrases {
    phrases: Vec<String>,
}

impl AdmissionPhrases {
    /// Build a phrase set, lowercasing each phrase and dropping blanks and
    /// repeats while keeping the first-seen order.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();

        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !normalized.contains(&phrase) {
                normalized.push(phrase);
            }
        }

        Self { phrases: normalized }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// First phrase found in `text`, if any
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.phrases
            .iter()
            .find(|phrase| lowered.contains(phrase.as_str()))
            .map(String::as_str)
    }

    /// Whether `text` contains any of the phrases
    pub fn detect(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }
}

impl Default for AdmissionPhrases {
    fn default() -> Self {
        Self::new(DEFAULT_ADMISSION_PHRASES)
    }
}

impl From<Vec<String>> for AdmissionPhrases {
    fn from(phrases: Vec<String>) -> Self {
        Self::new(phrases)
    }
}

impl From<AdmissionPhrases> for Vec<String> {
    fn from(phrases: AdmissionPhrases) -> Self {
        phrases.phrases
    }
}

/// Check `answer_with_source` against the default phrase set
pub fn detect_error_admission(answer_with_source: &str) -> bool {
    AdmissionPhrases::default().detect(answer_with_source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phrases_in_order() {
        let phrases = AdmissionPhrases::default();

        assert_eq!(phrases.len(), 10);
        assert_eq!(phrases.phrases()[0], "i was incorrect");
        assert_eq!(phrases.phrases()[9], "not accurate");
    }

    #[test]
    fn test_detects_case_insensitively() {
        assert!(detect_error_admission("Sorry, I Was Wrong about the date."));
        assert!(detect_error_admission("That figure is NOT ACCURATE."));
    }

    #[test]
    fn test_no_admission() {
        assert!(!detect_error_admission("The Eiffel Tower is in Paris."));
        assert!(!detect_error_admission(""));
    }

    #[test]
    fn test_false_positive_is_accepted() {
        assert!(detect_error_admission(
            "The probe performed a course correction near Mars."
        ));
    }

    #[test]
    fn test_find_returns_first_configured_match() {
        let phrases = AdmissionPhrases::default();

        // "inaccurate" precedes "mistaken" in the list
        assert_eq!(
            phrases.find_in("I was mistaken and the claim was inaccurate"),
            Some("inaccurate")
        );
    }

    #[test]
    fn test_custom_phrases_are_normalized() {
        let phrases = AdmissionPhrases::new(["  My Bad ", "", "my bad", "Oops"]);

        assert_eq!(phrases.phrases(), &["my bad".to_string(), "oops".to_string()]);
        assert!(phrases.detect("Oh, MY BAD."));
        assert!(!phrases.detect("I was wrong"));
    }

    #[test]
    fn test_empty_set_never_detects() {
        let phrases = AdmissionPhrases::new(Vec::<String>::new());

        assert!(phrases.is_empty());
        assert!(!phrases.detect("I was wrong, correction: inaccurate"));
    }

    #[test]
    fn test_serde_as_plain_list() {
        let phrases: AdmissionPhrases =
            serde_json::from_str(r#"["I Retract", "retraction"]"#).unwrap();

        assert_eq!(phrases.phrases(), &["i retract".to_string(), "retraction".to_string()]);
        assert_eq!(
            serde_json::to_string(&phrases).unwrap(),
            r#"["i retract","retraction"]"#
        );
    }
}
