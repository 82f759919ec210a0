//! Narrative composer.
//!
//! Assembles the final shift-note paragraph from a [`ShiftRecord`]. Each
//! topic is a (guard, renderer) pair; the pairs are evaluated in a fixed
//! order so the paragraph's topic sequence is explicit and testable rather
//! than buried in nested conditionals. The composed fragments are joined
//! and whitespace-normalised into a single line.

use crate::join::readable_join;
use crate::record::{EpisodeRecord, ShiftRecord};
use crate::words::{count_phrase, disruption_word, frequency_phrase, severity_word};

/// One narrative topic: a guard deciding whether the topic contributes to
/// this record's paragraph, and a renderer appending its fragments.
struct Topic {
    applies: fn(&ShiftRecord) -> bool,
    render: fn(&ShiftRecord, &mut Vec<String>),
}

/// Fixed topic order for the paragraph. Reordering entries changes the
/// document structure, so additions belong at the position the narrative
/// calls for, not at the end.
const TOPICS: &[Topic] = &[
    Topic {
        applies: |_| true,
        render: render_opener,
    },
    Topic {
        applies: |record| !record.adls_completed.is_empty(),
        render: render_adls,
    },
    Topic {
        applies: |record| record.behaviour_management,
        render: render_behaviour_management,
    },
    Topic {
        applies: |_| true,
        render: render_episodes,
    },
    Topic {
        applies: |_| true,
        render: render_engagement,
    },
    Topic {
        applies: |record| {
            record
                .visit
                .as_ref()
                .is_some_and(|visit| !visit.visitor_types.is_empty())
        },
        render: render_visitors,
    },
    Topic {
        applies: |_| true,
        render: render_intake,
    },
    Topic {
        applies: |_| true,
        render: render_care_requirements,
    },
    Topic {
        applies: |_| true,
        render: render_end_of_shift,
    },
];

/// Composes the complete narrative paragraph for one shift record.
///
/// Total over any structurally valid record; optional fields that are
/// empty or absent simply omit their clause. The result is a single
/// sentence-terminated line with normalised spacing and no embedded
/// newlines.
pub fn compose(record: &ShiftRecord) -> String {
    let mut fragments: Vec<String> = Vec::new();
    for topic in TOPICS {
        if (topic.applies)(record) {
            (topic.render)(record, &mut fragments);
        }
    }
    normalise_whitespace(&fragments.join(" "))
}

/// Collapses consecutive whitespace to single spaces and trims the ends.
///
/// Idempotent: normalising an already-normalised string is a no-op.
pub fn normalise_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cases a vocabulary value at the point of embedding. Display
/// transformation only; the record keeps its at-rest casing.
fn lower(value: impl ToString) -> String {
    value.to_string().to_lowercase()
}

fn lower_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

fn render_opener(record: &ShiftRecord, fragments: &mut Vec<String>) {
    fragments.push(format!(
        "Resident's baseline varied minimally throughout the {} shift.",
        lower(record.shift)
    ));
}

fn render_adls(record: &ShiftRecord, fragments: &mut Vec<String>) {
    fragments.push(format!(
        "ADLs completed included {}.",
        readable_join(&lower_all(&record.adls_completed))
    ));
}

fn render_behaviour_management(_record: &ShiftRecord, fragments: &mut Vec<String>) {
    fragments.push("Behaviour management strategies were implemented as required.".to_string());
}

fn render_episodes(record: &ShiftRecord, fragments: &mut Vec<String>) {
    let mut narrated_any = false;
    for episode in &record.episodes {
        if episode.is_significant() {
            fragments.push(episode_sentence(episode));
            narrated_any = true;
        } else {
            tracing::debug!(
                behaviour = episode.behaviour.as_str(),
                "episode below significance threshold, omitted from narrative"
            );
        }
    }
    if !narrated_any {
        fragments.push(
            "There was no notable change in behaviour, affect, cognition or functional ability."
                .to_string(),
        );
    }
}

/// Builds the sentence group for one significant episode. Clause order is
/// fixed: opening (behaviour, manifestations, frequency/severity wording,
/// time), triggers, disruption, preventative strategies, interventions,
/// effectiveness, medication.
fn episode_sentence(episode: &EpisodeRecord) -> String {
    let mut sentence = String::new();

    let manifestations = readable_join(&lower_all(&episode.manifestations));
    let manifestations_txt = if manifestations.is_empty() {
        String::new()
    } else {
        format!(" ({manifestations})")
    };
    sentence.push_str(&format!(
        "Resident demonstrated {} {}{} with {} distress at approximately {}.",
        frequency_phrase(episode.frequency),
        lower(episode.behaviour.as_str()),
        manifestations_txt,
        severity_word(episode.severity),
        episode.time_of_day
    ));

    let mut triggers = lower_all(&episode.modifiable_triggers);
    triggers.extend(lower_all(&episode.fixed_triggers));
    if let Some(note) = &episode.trigger_note {
        triggers.push(note.trim().to_string());
    }
    let triggers = readable_join(&triggers);
    if !triggers.is_empty() {
        sentence.push_str(&format!(" Potential triggers included {triggers}."));
    }

    if let Some(word) = disruption_word(episode.disruption) {
        sentence.push_str(&format!(
            " The episode caused {word} occupational disruption."
        ));
    }

    let preventative = readable_join(&lower_all(&episode.preventative_used));
    if !preventative.is_empty() {
        sentence.push_str(&format!(
            " Preventative strategies already in place included {preventative}."
        ));
    }

    let interventions = readable_join(&lower_all(&episode.interventions));
    if interventions.is_empty() {
        sentence.push_str(" Staff informed the care team.");
    } else {
        sentence.push_str(&format!(
            " Staff provided {interventions} and made the care team aware."
        ));
    }

    sentence.push_str(&format!(
        " Care strategies had {} overall effect.",
        lower(episode.effectiveness)
    ));

    if let Some(effect) = episode.medication {
        sentence.push_str(&format!(
            " Pharmacological intervention was administered with {} reduction in behaviours.",
            lower(effect)
        ));
    }

    sentence
}

fn render_engagement(record: &ShiftRecord, fragments: &mut Vec<String>) {
    fragments.push(format!(
        "Activity engagement: {}.",
        lower(record.engagement_level.as_str())
    ));
    if let Some(note) = &record.engagement_note {
        let note = note.trim();
        if !note.is_empty() {
            fragments.push(note.to_string());
        }
    }
}

fn render_visitors(record: &ShiftRecord, fragments: &mut Vec<String>) {
    // Guarded by the topic table: visit is present with at least one type.
    let Some(visit) = record.visit.as_ref() else {
        return;
    };
    let times = readable_join(&visit.times);
    let times_txt = if times.is_empty() {
        String::new()
    } else {
        format!(" at {times}")
    };
    fragments.push(format!(
        "Visited by {}{}.",
        readable_join(&lower_all(&visit.visitor_types)),
        times_txt
    ));
}

fn render_intake(record: &ShiftRecord, fragments: &mut Vec<String>) {
    fragments.push(format!(
        "Total intake during scheduled meal times was {}.",
        lower(record.intake_level.as_str())
    ));
    if !record.meal_assistance.is_empty() {
        fragments.push(format!(
            "Meal assistance required: {}.",
            readable_join(&lower_all(&record.meal_assistance))
        ));
    }
}

fn render_care_requirements(record: &ShiftRecord, fragments: &mut Vec<String>) {
    fragments.push(format!(
        "Resident was {} and required {} physical assistance with {} time to complete ADLs.",
        lower(record.receptiveness.as_str()),
        lower(record.assistance_level.as_str()),
        lower(record.adl_time.as_str())
    ));
}

fn render_end_of_shift(record: &ShiftRecord, fragments: &mut Vec<String>) {
    let end = &record.end_of_shift;
    let mut end_bits = vec![format!("resident appears {}", lower(end.settledness))];

    if end.in_bed {
        let mut bed_bits: Vec<String> = Vec::new();
        if end.call_bell_in_reach {
            bed_bits.push("call bell left within reach".to_string());
        }
        if end.sensor_mats > 0 {
            bed_bits.push(format!(
                "{} in situ",
                count_phrase(end.sensor_mats, "sensor mat", "sensor mats")
            ));
        }
        if end.crash_mats > 0 {
            bed_bits.push(format!(
                "{} in situ",
                count_phrase(end.crash_mats, "crash mat", "crash mats")
            ));
        }
        if !bed_bits.is_empty() {
            end_bits.push(bed_bits.join(", "));
        }
    }

    if let Some(note) = &end.ongoing_note {
        let note = note.trim();
        if !note.is_empty() {
            end_bits.push(format!("ongoing care: {note}"));
        }
    }

    fragments.push(format!("At time of report, {}.", end_bits.join("; ")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{
        Effectiveness, EndOfShift, EpisodeRecord, MedicationEffect, Settledness, ShiftRecord,
        ShiftType, VisitRecord,
    };
    use shiftnote_types::{DisruptionScore, NonEmptyText, ScaleScore};

    fn text(value: &str) -> NonEmptyText {
        NonEmptyText::new(value).expect("non-empty")
    }

    fn base_record() -> ShiftRecord {
        ShiftRecord {
            shift: ShiftType::Morning,
            adls_completed: Vec::new(),
            behaviour_management: false,
            receptiveness: text("Receptive to assistance"),
            assistance_level: text("1x"),
            adl_time: text("Moderate"),
            intake_level: text("All"),
            meal_assistance: Vec::new(),
            engagement_level: text("Observed only"),
            engagement_note: None,
            visit: None,
            episodes: Vec::new(),
            end_of_shift: EndOfShift {
                settledness: Settledness::Settled,
                in_bed: false,
                call_bell_in_reach: false,
                sensor_mats: 0,
                crash_mats: 0,
                ongoing_note: None,
            },
        }
    }

    fn episode(frequency: u8, severity: u8, disruption: u8) -> EpisodeRecord {
        EpisodeRecord {
            behaviour: text("Vocal disruption"),
            manifestations: Vec::new(),
            frequency: ScaleScore::new(frequency).expect("frequency in range"),
            severity: ScaleScore::new(severity).expect("severity in range"),
            disruption: DisruptionScore::new(disruption).expect("disruption in range"),
            time_of_day: text("09:30"),
            modifiable_triggers: Vec::new(),
            fixed_triggers: Vec::new(),
            trigger_note: None,
            preventative_used: Vec::new(),
            interventions: Vec::new(),
            effectiveness: Effectiveness::Good,
            medication: None,
        }
    }

    const FALLBACK: &str =
        "There was no notable change in behaviour, affect, cognition or functional ability.";

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn scenario_quiet_shift_emits_topics_once_in_order() {
        let note = compose(&base_record());

        let fallback = note.find(FALLBACK).expect("fallback sentence present");
        let engagement = note
            .find("Activity engagement: observed only.")
            .expect("engagement sentence present");
        let intake = note
            .find("Total intake during scheduled meal times was all.")
            .expect("intake sentence present");
        let settled = note
            .find("At time of report, resident appears settled.")
            .expect("end-of-shift sentence present");

        assert!(fallback < engagement);
        assert!(engagement < intake);
        assert!(intake < settled);

        assert_eq!(count_occurrences(&note, FALLBACK), 1);
        assert_eq!(count_occurrences(&note, "Activity engagement"), 1);
        assert_eq!(count_occurrences(&note, "Total intake"), 1);
        assert_eq!(count_occurrences(&note, "At time of report"), 1);

        assert!(!note.contains("ADLs completed included"));
        assert!(!note.contains("Visited by"));
        assert!(!note.contains('\n'));
    }

    #[test]
    fn scenario_frequent_episode_uses_care_team_fallback_clause() {
        let mut record = base_record();
        record.episodes.push(episode(4, 1, 0));

        let note = compose(&record);

        assert!(note.contains("persistent episodes of vocal disruption"));
        assert!(note.contains("Staff informed the care team."));
        assert!(!note.contains("Staff provided"));
        assert!(!note.contains("Pharmacological intervention"));
        assert!(!note.contains(FALLBACK));
    }

    #[test]
    fn scenario_in_bed_safety_details_omit_zero_counts() {
        let mut record = base_record();
        record.end_of_shift.in_bed = true;
        record.end_of_shift.call_bell_in_reach = true;
        record.end_of_shift.sensor_mats = 1;
        record.end_of_shift.crash_mats = 0;

        let note = compose(&record);

        assert!(note.contains("call bell left within reach"));
        assert!(note.contains("one sensor mat in situ"));
        assert!(!note.contains("crash mat"));
    }

    #[test]
    fn all_non_significant_episodes_fall_back_to_the_no_change_sentence() {
        let mut record = base_record();
        record.episodes.push(episode(1, 1, 0));
        record.episodes.push(episode(2, 2, 0));

        let note = compose(&record);

        assert_eq!(count_occurrences(&note, FALLBACK), 1);
        assert!(!note.contains("Resident demonstrated"));
    }

    #[test]
    fn significant_episodes_appear_in_entry_order_and_drop_the_rest() {
        let mut record = base_record();
        let mut first = episode(4, 1, 0);
        first.behaviour = text("Physical aggression");
        let quiet = episode(1, 1, 0);
        let mut second = episode(1, 1, 3);
        second.behaviour = text("Exit-seeking behaviour");
        record.episodes = vec![first, quiet, second];

        let note = compose(&record);

        let first_at = note.find("physical aggression").expect("first episode");
        let second_at = note.find("exit-seeking behaviour").expect("second episode");
        assert!(first_at < second_at);
        assert_eq!(count_occurrences(&note, "Resident demonstrated"), 2);
        assert!(!note.contains(FALLBACK));
    }

    #[test]
    fn medication_clause_present_only_when_medication_was_given() {
        let mut record = base_record();
        let mut with_medication = episode(3, 3, 2);
        with_medication.medication = Some(MedicationEffect::Partial);
        record.episodes.push(with_medication);

        let note = compose(&record);
        assert!(note.contains(
            "Pharmacological intervention was administered with partial reduction in behaviours."
        ));

        record.episodes[0].medication = None;
        let note = compose(&record);
        assert!(!note.contains("Pharmacological intervention"));
    }

    #[test]
    fn episode_clauses_follow_the_fixed_order() {
        let mut record = base_record();
        let mut full = episode(3, 4, 4);
        full.manifestations = vec!["Shouting".to_string(), "Swearing".to_string()];
        full.modifiable_triggers = vec!["Overstimulating environment".to_string()];
        full.fixed_triggers = vec!["Time of day (sundowning)".to_string()];
        full.trigger_note = Some("co-resident entered the room".to_string());
        full.preventative_used = vec!["Quiet environment provided".to_string()];
        full.interventions = vec!["Redirection".to_string(), "1:1 engagement".to_string()];
        full.effectiveness = Effectiveness::Limited;
        full.medication = Some(MedicationEffect::Effective);
        record.episodes.push(full);

        let note = compose(&record);

        let opening = note
            .find("frequent episodes of vocal disruption (shouting and swearing) with severe distress at approximately 09:30.")
            .expect("opening clause");
        let triggers = note
            .find("Potential triggers included overstimulating environment, time of day (sundowning), and co-resident entered the room.")
            .expect("trigger clause");
        let disruption = note
            .find("The episode caused severe occupational disruption.")
            .expect("disruption clause");
        let preventative = note
            .find("Preventative strategies already in place included quiet environment provided.")
            .expect("preventative clause");
        let interventions = note
            .find("Staff provided redirection and 1:1 engagement and made the care team aware.")
            .expect("intervention clause");
        let effectiveness = note
            .find("Care strategies had limited overall effect.")
            .expect("effectiveness clause");
        let medication = note
            .find("Pharmacological intervention was administered with effective reduction")
            .expect("medication clause");

        assert!(opening < triggers);
        assert!(triggers < disruption);
        assert!(disruption < preventative);
        assert!(preventative < interventions);
        assert!(interventions < effectiveness);
        assert!(effectiveness < medication);
    }

    #[test]
    fn moderate_disruption_uses_moderate_wording() {
        let mut record = base_record();
        record.episodes.push(episode(1, 1, 3));

        let note = compose(&record);
        assert!(note.contains("The episode caused moderate occupational disruption."));
    }

    #[test]
    fn visitors_clause_includes_times_only_when_recorded() {
        let mut record = base_record();
        record.visit = Some(VisitRecord {
            visitor_types: vec!["Family".to_string(), "Friends".to_string()],
            times: vec!["10:00".to_string(), "10:30".to_string()],
        });
        let note = compose(&record);
        assert!(note.contains("Visited by family and friends at 10:00 and 10:30."));

        record.visit = Some(VisitRecord {
            visitor_types: vec!["Family".to_string()],
            times: Vec::new(),
        });
        let note = compose(&record);
        assert!(note.contains("Visited by family."));

        record.visit = Some(VisitRecord {
            visitor_types: Vec::new(),
            times: vec!["10:00".to_string()],
        });
        let note = compose(&record);
        assert!(!note.contains("Visited by"));
    }

    #[test]
    fn adls_and_meal_assistance_render_joined_and_lowercased() {
        let mut record = base_record();
        record.adls_completed = vec![
            "Toileting".to_string(),
            "Shower".to_string(),
            "Oral Care".to_string(),
        ];
        record.meal_assistance = vec!["Set-up".to_string(), "Cut-up".to_string()];
        record.behaviour_management = true;

        let note = compose(&record);
        assert!(note.contains("ADLs completed included toileting, shower, and oral care."));
        assert!(note.contains("Meal assistance required: set-up and cut-up."));
        assert!(note.contains("Behaviour management strategies were implemented as required."));
    }

    #[test]
    fn care_requirements_sentence_combines_the_three_scales() {
        let note = compose(&base_record());
        assert!(note.contains(
            "Resident was receptive to assistance and required 1x physical assistance with moderate time to complete ADLs."
        ));
    }

    #[test]
    fn free_text_notes_render_verbatim() {
        let mut record = base_record();
        record.engagement_note =
            Some("Calm with intermittent calling out; benefited from 1:1.".to_string());
        record.end_of_shift.ongoing_note = Some("continue hourly rounding".to_string());

        let note = compose(&record);
        assert!(note.contains("Calm with intermittent calling out; benefited from 1:1."));
        assert!(note.contains("ongoing care: continue hourly rounding"));
    }

    #[test]
    fn afternoon_shift_changes_the_opener() {
        let mut record = base_record();
        record.shift = ShiftType::Afternoon;
        let note = compose(&record);
        assert!(note
            .starts_with("Resident's baseline varied minimally throughout the afternoon shift."));
    }

    #[test]
    fn whitespace_normalisation_is_idempotent() {
        let samples = [
            "  two   spaces\tand a tab \n newline ",
            "already normalised",
            "",
            "   ",
        ];
        for sample in samples {
            let once = normalise_whitespace(sample);
            assert_eq!(normalise_whitespace(&once), once);
        }
    }

    #[test]
    fn composed_note_is_a_single_normalised_line() {
        let mut record = base_record();
        record.engagement_note = Some("  spaced   note  ".to_string());
        let note = compose(&record);
        assert_eq!(normalise_whitespace(&note), note);
        assert!(!note.contains('\n'));
        assert!(!note.contains("  "));
    }
}
