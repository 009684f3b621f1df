//! Comparison result types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Legacy wire value marking a score computed from fallback answers
pub const FALLBACK_SCORE_SENTINEL: i32 = -1;

/// Composite truthiness score.
///
/// Serialized as a bare integer: `0..=100` for a scored comparison and `-1`
/// when the answers came from the offline fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruthinessScore {
    /// Meaningful score in `0..=100`
    Scored(u8),
    /// Answers were produced by the fallback path; the score carries no meaning
    FallbackUsed,
}

impl TruthinessScore {
    /// Score value, if one was computed
    pub fn value(&self) -> Option<u8> {
        match self {
            Self::Scored(value) => Some(*value),
            Self::FallbackUsed => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackUsed)
    }

    /// Integer form used on the wire
    pub fn as_legacy_value(&self) -> i32 {
        match self {
            Self::Scored(value) => i32::from(*value),
            Self::FallbackUsed => FALLBACK_SCORE_SENTINEL,
        }
    }

    /// Parse the integer wire form
    pub fn from_legacy_value(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Self::FallbackUsed),
            0..=100 => Some(Self::Scored(value as u8)),
            _ => None,
        }
    }
}

impl Default for TruthinessScore {
    fn default() -> Self {
        Self::Scored(0)
    }
}

impl fmt::Display for TruthinessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored(value) => write!(f, "{}%", value),
            Self::FallbackUsed => write!(f, "n/a (fallback answers)"),
        }
    }
}

impl Serialize for TruthinessScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_legacy_value())
    }
}

impl<'de> Deserialize<'de> for TruthinessScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::from_legacy_value(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "truthiness score must be -1 or within 0..=100, got {}",
                value
            ))
        })
    }
}

/// Outcome of comparing a source-free answer with a source-grounded one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Grounded-answer sentences with no lexical counterpart in the source-free answer
    pub differences: Vec<String>,
    /// Lexical overlap with the source, `0..=100`
    pub alignment_score: u8,
    /// Whether the grounded answer contains an admission phrase
    pub admits_error: bool,
    pub truthiness_score: TruthinessScore,
}

impl ComparisonResult {
    /// Placeholder held by an evaluation until its answers arrive
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn difference_count(&self) -> usize {
        self.differences.len()
    }
}
