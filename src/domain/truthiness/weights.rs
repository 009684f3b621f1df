//! Truthiness scoring weights

use serde::{Deserialize, Serialize};

/// Default penalty applied per difference
pub const DEFAULT_DIFFERENCE_WEIGHT: f64 = 10.0;

/// Default percentage of the alignment score added to the total
pub const DEFAULT_ALIGNMENT_WEIGHT: f64 = 50.0;

/// Default bonus when the grounded answer admits an error
pub const DEFAULT_ERROR_ADMISSION_BONUS: f64 = 20.0;

/// Caller-supplied overrides for the composite score.
///
/// Every knob is optional; unset knobs resolve to the defaults above when the
/// score is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruthinessWeights {
    /// Points subtracted per difference (total penalty capped at 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference_weight: Option<f64>,
    /// Percentage of the alignment score added to the total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_weight: Option<f64>,
    /// Points added when the grounded answer admits an error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_admission_bonus: Option<f64>,
}

impl TruthinessWeights {
    /// Create weights with every knob unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difference_weight(mut self, weight: f64) -> Self {
        self.difference_weight = Some(weight);
        self
    }

    pub fn with_alignment_weight(mut self, weight: f64) -> Self {
        self.alignment_weight = Some(weight);
        self
    }

    pub fn with_error_admission_bonus(mut self, bonus: f64) -> Self {
        self.error_admission_bonus = Some(bonus);
        self
    }

    /// Effective difference weight
    pub fn difference_weight(&self) -> f64 {
        self.difference_weight.unwrap_or(DEFAULT_DIFFERENCE_WEIGHT)
    }

    /// Effective alignment weight
    pub fn alignment_weight(&self) -> f64 {
        self.alignment_weight.unwrap_or(DEFAULT_ALIGNMENT_WEIGHT)
    }

    /// Effective error admission bonus
    pub fn error_admission_bonus(&self) -> f64 {
        self.error_admission_bonus
            .unwrap_or(DEFAULT_ERROR_ADMISSION_BONUS)
    }

    /// Layer these weights over `base`: knobs set here win, unset knobs are
    /// taken from `base`.
    pub fn over(&self, base: &TruthinessWeights) -> Self {
        Self {
            difference_weight: self.difference_weight.or(base.difference_weight),
            alignment_weight: self.alignment_weight.or(base.alignment_weight),
            error_admission_bonus: self.error_admission_bonus.or(base.error_admission_bonus),
        }
    }

    /// Check if no knob is set
    pub fn is_empty(&self) -> bool {
        self.difference_weight.is_none()
            && self.alignment_weight.is_none()
            && self.error_admission_bonus.is_none()
    }

    /// Names of the knobs holding NaN or infinite values
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("differenceWeight", self.difference_weight),
            ("alignmentWeight", self.alignment_weight),
            ("errorAdmissionBonus", self.error_admission_bonus),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let weights = TruthinessWeights::new();

        assert_eq!(weights.difference_weight(), 10.0);
        assert_eq!(weights.alignment_weight(), 50.0);
        assert_eq!(weights.error_admission_bonus(), 20.0);
        assert!(weights.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let weights = TruthinessWeights::new()
            .with_difference_weight(5.0)
            .with_alignment_weight(80.0)
            .with_error_admission_bonus(0.0);

        assert_eq!(weights.difference_weight(), 5.0);
        assert_eq!(weights.alignment_weight(), 80.0);
        assert_eq!(weights.error_admission_bonus(), 0.0);
        assert!(!weights.is_empty());
    }

    #[test]
    fn test_over_prefers_own_values() {
        let base = TruthinessWeights::new()
            .with_difference_weight(15.0)
            .with_alignment_weight(40.0);
        let overrides = TruthinessWeights::new().with_alignment_weight(70.0);

        let merged = overrides.over(&base);

        assert_eq!(merged.difference_weight, Some(15.0));
        assert_eq!(merged.alignment_weight, Some(70.0));
        assert_eq!(merged.error_admission_bonus, None);
    }

    #[test]
    fn test_partial_json_uses_legacy_names() {
        let weights: TruthinessWeights =
            serde_json::from_str(r#"{"differenceWeight": 20}"#).unwrap();

        assert_eq!(weights.difference_weight, Some(20.0));
        assert_eq!(weights.alignment_weight(), 50.0);

        let json = serde_json::to_value(weights).unwrap();
        assert_eq!(json, serde_json::json!({"differenceWeight": 20.0}));
    }

    #[test]
    fn test_non_finite_fields() {
        let weights = TruthinessWeights::new()
            .with_difference_weight(f64::NAN)
            .with_error_admission_bonus(f64::INFINITY);

        assert_eq!(
            weights.non_finite_fields(),
            vec!["differenceWeight", "errorAdmissionBonus"]
        );
        assert!(TruthinessWeights::new().non_finite_fields().is_empty());
    }
}
