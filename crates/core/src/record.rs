//! Shift record domain model.
//!
//! A [`ShiftRecord`] is constructed once per documentation session from
//! already-validated operator input, passed once into
//! [`crate::compose::compose`] and then discarded. Vocabulary-backed fields
//! are carried as opaque display strings; the core never checks them against
//! the reference lists (that sits with the input-collection surface).
//!
//! Range-checked fields use the validated newtypes from `shiftnote-types`,
//! so a structurally invalid record cannot be built or deserialised.

use serde::{Deserialize, Serialize};
use shiftnote_types::{DisruptionScore, NonEmptyText, ScaleScore};

/// The shift being documented. Selects the slot vocabulary and the opener
/// wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    Morning,
    Afternoon,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
        }
    }
}

/// How the resident presented at the end of the shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settledness {
    Settled,
    Unsettled,
}

impl std::fmt::Display for Settledness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Settled => write!(f, "Settled"),
            Self::Unsettled => write!(f, "Unsettled"),
        }
    }
}

/// Overall effect of the care strategies applied during an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    Good,
    Limited,
    #[serde(rename = "No effect")]
    NoEffect,
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Limited => write!(f, "Limited"),
            Self::NoEffect => write!(f, "No effect"),
        }
    }
}

/// Observed effect of sedative medication given during an episode.
///
/// Carried inside `EpisodeRecord::medication`; its presence is what records
/// that medication was given at all, so an effect can never exist without an
/// administration nor the reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationEffect {
    Effective,
    Partial,
    #[serde(rename = "No effect")]
    NoEffect,
}

impl std::fmt::Display for MedicationEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Effective => write!(f, "Effective"),
            Self::Partial => write!(f, "Partial"),
            Self::NoEffect => write!(f, "No effect"),
        }
    }
}

/// One observed behaviour instance during the shift.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Behaviour category label from the external taxonomy.
    pub behaviour: NonEmptyText,

    /// Specific manifestations observed within the category, if recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manifestations: Vec<String>,

    /// Episode frequency on the 1–4 scale.
    pub frequency: ScaleScore,

    /// Episode severity on the 1–4 scale.
    pub severity: ScaleScore,

    /// Occupational disruption caused, 0–4.
    pub disruption: DisruptionScore,

    /// Slot label for when the episode occurred (`HH:MM`).
    pub time_of_day: NonEmptyText,

    /// Triggers staff could address (environment, unmet needs, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiable_triggers: Vec<String>,

    /// Triggers outside staff control (condition, time of day, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_triggers: Vec<String>,

    /// Free-text trigger observation, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_note: Option<String>,

    /// Preventative strategies that were already in place.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preventative_used: Vec<String>,

    /// Interventions applied in response to the episode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interventions: Vec<String>,

    /// Overall effect of the care strategies.
    pub effectiveness: Effectiveness,

    /// Present exactly when sedative medication was administered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<MedicationEffect>,
}

impl EpisodeRecord {
    /// Whether this episode is clinically significant enough to narrate.
    ///
    /// Delegates to [`crate::significance::is_significant`]; evaluated
    /// independently per episode.
    pub fn is_significant(&self) -> bool {
        crate::significance::is_significant(self.frequency, self.severity, self.disruption)
    }
}

/// Visitor activity during the shift. Absent from the record when no visit
/// occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Visitor type labels, in the order recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visitor_types: Vec<String>,

    /// Visit slot labels (`HH:MM`), in the order recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<String>,
}

/// End-of-shift status block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOfShift {
    pub settledness: Settledness,

    /// Whether the resident was in bed at the time of report. Gates the
    /// safety detail clauses below.
    #[serde(default)]
    pub in_bed: bool,

    #[serde(default)]
    pub call_bell_in_reach: bool,

    /// Sensor mats in situ; zero means the clause is omitted.
    #[serde(default)]
    pub sensor_mats: u8,

    /// Crash mats in situ; zero means the clause is omitted.
    #[serde(default)]
    pub crash_mats: u8,

    /// Ongoing care or concerns, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ongoing_note: Option<String>,
}

/// The full shift record: one composition call's worth of observations.
///
/// Immutable for the duration of the call; `compose` takes it by shared
/// reference and never writes back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub shift: ShiftType,

    /// ADL labels completed this shift, in reference-list order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adls_completed: Vec<String>,

    /// Whether behaviour management strategies were undertaken.
    #[serde(default)]
    pub behaviour_management: bool,

    pub receptiveness: NonEmptyText,
    pub assistance_level: NonEmptyText,
    pub adl_time: NonEmptyText,
    pub intake_level: NonEmptyText,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meal_assistance: Vec<String>,

    pub engagement_level: NonEmptyText,

    /// Free-text engagement observation, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_note: Option<String>,

    /// Visitor activity; `None` when no visit occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit: Option<VisitRecord>,

    /// Behaviour episodes in operator entry order; that order is preserved
    /// in the output paragraph.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<EpisodeRecord>,

    pub end_of_shift: EndOfShift,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_deserialises_with_optional_fields_absent() {
        let json = r#"{
            "behaviour": "Vocal disruption",
            "frequency": 2,
            "severity": 1,
            "disruption": 0,
            "time_of_day": "09:30",
            "effectiveness": "Good"
        }"#;
        let episode: EpisodeRecord = serde_json::from_str(json).expect("valid episode");
        assert!(episode.manifestations.is_empty());
        assert!(episode.medication.is_none());
        assert!(!episode.is_significant());
    }

    #[test]
    fn episode_rejects_out_of_range_scores() {
        let json = r#"{
            "behaviour": "Vocal disruption",
            "frequency": 5,
            "severity": 1,
            "disruption": 0,
            "time_of_day": "09:30",
            "effectiveness": "Good"
        }"#;
        assert!(serde_json::from_str::<EpisodeRecord>(json).is_err());
    }

    #[test]
    fn effectiveness_no_effect_uses_display_text_on_the_wire() {
        let parsed: Effectiveness = serde_json::from_str(r#""No effect""#).expect("valid");
        assert_eq!(parsed, Effectiveness::NoEffect);
        assert_eq!(parsed.to_string(), "No effect");
    }
}
