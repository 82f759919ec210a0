//! Numeric-to-word rendering for score and count values.

use shiftnote_types::{DisruptionScore, ScaleScore};

/// Renders an episode frequency score as the phrase that opens the episode
/// sentence ("an isolated episode of", "frequent episodes of", ...).
pub fn frequency_phrase(frequency: ScaleScore) -> &'static str {
    match frequency.get() {
        1 => "an isolated episode of",
        2 => "occasional episodes of",
        3 => "frequent episodes of",
        _ => "persistent episodes of",
    }
}

/// Renders an episode severity score as a distress descriptor.
pub fn severity_word(severity: ScaleScore) -> &'static str {
    match severity.get() {
        1 => "minimal",
        2 => "mild",
        3 => "moderate",
        _ => "severe",
    }
}

/// Disruption wording for the disruption clause, which only exists for
/// scores 3 and 4; lower scores return `None` and the clause is omitted.
pub fn disruption_word(disruption: DisruptionScore) -> Option<&'static str> {
    match disruption.get() {
        3 => Some("moderate"),
        4 => Some("severe"),
        _ => None,
    }
}

/// Renders a small count with its noun, as words with pluralisation
/// ("one sensor mat", "two crash mats").
pub fn count_phrase(count: u8, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{} {}", count_word(count), noun)
}

fn count_word(count: u8) -> String {
    match count {
        0 => "no".to_string(),
        1 => "one".to_string(),
        2 => "two".to_string(),
        3 => "three".to_string(),
        4 => "four".to_string(),
        5 => "five".to_string(),
        6 => "six".to_string(),
        7 => "seven".to_string(),
        8 => "eight".to_string(),
        9 => "nine".to_string(),
        10 => "ten".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_phrases_cover_the_scale() {
        assert_eq!(
            frequency_phrase(ScaleScore::new(1).unwrap()),
            "an isolated episode of"
        );
        assert_eq!(
            frequency_phrase(ScaleScore::new(4).unwrap()),
            "persistent episodes of"
        );
    }

    #[test]
    fn disruption_word_exists_only_for_high_scores() {
        assert_eq!(disruption_word(DisruptionScore::new(0).unwrap()), None);
        assert_eq!(disruption_word(DisruptionScore::new(2).unwrap()), None);
        assert_eq!(
            disruption_word(DisruptionScore::new(3).unwrap()),
            Some("moderate")
        );
        assert_eq!(
            disruption_word(DisruptionScore::new(4).unwrap()),
            Some("severe")
        );
    }

    #[test]
    fn counts_render_as_words_with_pluralisation() {
        assert_eq!(count_phrase(1, "sensor mat", "sensor mats"), "one sensor mat");
        assert_eq!(count_phrase(2, "crash mat", "crash mats"), "two crash mats");
        assert_eq!(count_phrase(12, "sensor mat", "sensor mats"), "12 sensor mats");
    }
}
