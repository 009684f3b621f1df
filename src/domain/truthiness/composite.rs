//! Weighted composite truthiness score

use super::result::TruthinessScore;
use super::weights::TruthinessWeights;

/// Upper bound on the total difference penalty
pub const MAX_DIFFERENCE_PENALTY: f64 = 50.0;

const BASE_SCORE: f64 = 100.0;

/// Combine the comparison signals into a single score.
///
/// Only the final value is clamped to `0..=100` and rounded; the fallback
/// check overrides everything else.
pub fn truthiness_score(
    difference_count: usize,
    alignment_score: u8,
    admits_error: bool,
    used_fallback: bool,
    weights: &TruthinessWeights,
) -> TruthinessScore {
    let mut score = BASE_SCORE;
    score -= (difference_count as f64 * weights.difference_weight()).min(MAX_DIFFERENCE_PENALTY);
    score += f64::from(alignment_score) * weights.alignment_weight() / 100.0;

    if admits_error {
        score += weights.error_admission_bonus();
    }

    if used_fallback {
        return TruthinessScore::FallbackUsed;
    }

    // NaN (from non-finite weights) saturates to 0 in the cast
    TruthinessScore::Scored(score.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> TruthinessWeights {
        TruthinessWeights::default()
    }

    #[test]
    fn test_baseline_with_defaults() {
        let score = truthiness_score(3, 40, false, false, &defaults());

        assert_eq!(score, TruthinessScore::Scored(90));
    }

    #[test]
    fn test_admission_bonus_clamped_to_hundred() {
        let score = truthiness_score(0, 0, true, false, &defaults());

        assert_eq!(score, TruthinessScore::Scored(100));
    }

    #[test]
    fn test_penalty_is_capped() {
        let weights = TruthinessWeights::new().with_difference_weight(20.0);

        let score = truthiness_score(10, 0, false, false, &weights);

        assert_eq!(score, TruthinessScore::Scored(50));
    }

    #[test]
    fn test_fallback_overrides_everything() {
        assert_eq!(
            truthiness_score(0, 100, true, true, &defaults()),
            TruthinessScore::FallbackUsed
        );
        assert_eq!(
            truthiness_score(50, 0, false, true, &defaults()),
            TruthinessScore::FallbackUsed
        );
    }

    #[test]
    fn test_only_final_value_is_clamped() {
        // 100 - 50 + 150 - 120 = 80; clamping before the bonus would give 0
        let weights = TruthinessWeights::new()
            .with_alignment_weight(150.0)
            .with_error_admission_bonus(-120.0);

        let score = truthiness_score(5, 100, true, false, &weights);

        assert_eq!(score, TruthinessScore::Scored(80));
    }

    #[test]
    fn test_negative_total_clamps_to_zero() {
        let weights = TruthinessWeights::new().with_error_admission_bonus(-80.0);

        let score = truthiness_score(5, 0, true, false, &weights);

        assert_eq!(score, TruthinessScore::Scored(0));
    }

    #[test]
    fn test_half_points_round_up() {
        // 100 - 10 + 1 * 50 / 100 = 90.5
        let score = truthiness_score(1, 1, false, false, &defaults());

        assert_eq!(score, TruthinessScore::Scored(91));
    }

    #[test]
    fn test_zero_weights() {
        let weights = TruthinessWeights::new()
            .with_difference_weight(0.0)
            .with_alignment_weight(0.0)
            .with_error_admission_bonus(0.0);

        let score = truthiness_score(7, 100, true, false, &weights);

        assert_eq!(score, TruthinessScore::Scored(100));
    }
}
