//! Episode significance filter.
//!
//! Decides whether one behaviour episode is clinically significant enough
//! to appear in the narrative. Stateless; one episode's outcome never
//! affects another's.

use shiftnote_types::{DisruptionScore, ScaleScore};

/// Frequency × severity product above which a moderately-scored episode
/// counts as significant.
///
/// The comparison is strictly greater-than, so frequency 2 × severity 2
/// (product 4) does not qualify on its own. The clinical rationale for the
/// value is not recorded anywhere; treat it as a tunable constant and keep
/// the literal value and the strict comparison when adjusting the rule.
pub const SIGNIFICANCE_PRODUCT_THRESHOLD: u8 = 4;

/// Individual score at or above which an episode is always significant.
const SIGNIFICANT_SCORE: u8 = 3;

/// Returns whether an episode with these scores should be narrated.
///
/// An episode qualifies when it is individually frequent or severe
/// (either score ≥ 3), moderately scored on both axes at once (product
/// above [`SIGNIFICANCE_PRODUCT_THRESHOLD`]), or caused material
/// operational disruption (disruption ≥ 3) regardless of how mild it
/// otherwise scored.
pub fn is_significant(
    frequency: ScaleScore,
    severity: ScaleScore,
    disruption: DisruptionScore,
) -> bool {
    let frequency = frequency.get();
    let severity = severity.get();

    frequency >= SIGNIFICANT_SCORE
        || severity >= SIGNIFICANT_SCORE
        || frequency * severity > SIGNIFICANCE_PRODUCT_THRESHOLD
        || disruption.get() >= SIGNIFICANT_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(frequency: u8, severity: u8, disruption: u8) -> bool {
        is_significant(
            ScaleScore::new(frequency).expect("frequency in range"),
            ScaleScore::new(severity).expect("severity in range"),
            DisruptionScore::new(disruption).expect("disruption in range"),
        )
    }

    #[test]
    fn product_boundary_is_strictly_greater_than() {
        assert!(!sig(2, 2, 0));
        assert!(sig(2, 3, 0));
        assert!(sig(3, 2, 0));
    }

    #[test]
    fn high_individual_scores_qualify_alone() {
        assert!(sig(3, 1, 0));
        assert!(sig(4, 1, 0));
        assert!(sig(1, 3, 0));
        assert!(sig(1, 4, 0));
    }

    #[test]
    fn material_disruption_qualifies_regardless_of_other_scores() {
        assert!(sig(1, 1, 3));
        assert!(sig(1, 1, 4));
        assert!(!sig(1, 1, 2));
    }

    #[test]
    fn mild_episodes_are_not_significant() {
        assert!(!sig(1, 1, 0));
        assert!(!sig(1, 2, 0));
        assert!(!sig(2, 1, 2));
    }

    #[test]
    fn raising_any_score_never_revokes_significance() {
        for frequency in 1..=4u8 {
            for severity in 1..=4u8 {
                for disruption in 0..=4u8 {
                    if !sig(frequency, severity, disruption) {
                        continue;
                    }
                    if frequency < 4 {
                        assert!(sig(frequency + 1, severity, disruption));
                    }
                    if severity < 4 {
                        assert!(sig(frequency, severity + 1, disruption));
                    }
                    if disruption < 4 {
                        assert!(sig(frequency, severity, disruption + 1));
                    }
                }
            }
        }
    }
}
