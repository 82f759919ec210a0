//! Static reference vocabulary for shift documentation.
//!
//! These tables are the closed vocabularies the input surface offers to the
//! operator. The composition core treats the chosen values as opaque display
//! strings; this crate only supplies the lists and a category lookup, no
//! dispatch.

pub mod slots;

use serde::Serialize;

/// ADL options, in reference-list order.
pub const ADL_OPTIONS: &[&str] = &[
    "Toileting",
    "Change of incontinence aid",
    "Shower",
    "Sponge",
    "Dressing Upper and Lower Garments",
    "Dressing Upper Garments",
    "Dressing Lower Garments",
    "Skin Care",
    "Oral Care",
    "Shaving",
    "Donning Hearing Aids",
    "Donning Glasses",
    "Grooming hair",
    "Groomed nails",
];

/// Visitor type options.
pub const VISITOR_TYPES: &[&str] = &[
    "Family",
    "Friends",
    "Internal Companion",
    "NDIS Companion",
    "External carer",
    "Hair-Dresser",
    "Beautician",
];

/// Total food and fluid intake levels.
pub const INTAKE_LEVELS: &[&str] = &["None", "1/8", "1/4", "1/3", "1/2", "3/4", "All"];

/// Activity engagement levels.
pub const ENGAGEMENT_LEVELS: &[&str] = &[
    "Actively participated",
    "Observed only",
    "Engaged minimally",
    "Passively engaged",
    "Refused",
];

/// Receptiveness to care.
pub const RECEPTIVENESS: &[&str] = &["Not receptive", "Receptive to assistance"];

/// Physical assistance levels (number of staff).
pub const ASSISTANCE_LEVELS: &[&str] = &["1x", "2x", "3x"];

/// Time required to complete ADLs.
pub const ADL_TIME_LEVELS: &[&str] = &["Minimal", "Moderate", "Extensive"];

/// Meal assistance options.
pub const MEAL_ASSISTANCE_OPTIONS: &[&str] = &["Set-up", "Cut-up", "Minimal", "Moderate", "Full"];

/// Behaviour taxonomy: category label to its specific manifestations.
///
/// Categories follow the BRUA-style grouping of the behavioural assessment
/// measure; an episode records one category plus any observed
/// manifestations from that category's list.
pub const BEHAVIOUR_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Vocal disruption",
        &[
            "Repetitive calling out",
            "Shouting",
            "Swearing",
            "Excessive vocalisation",
            "Frequent questioning",
        ],
    ),
    (
        "Care refusal",
        &[
            "Refusal of care",
            "Demanding behaviour",
            "Seeking constant reassurance",
        ],
    ),
    (
        "Motor restlessness",
        &[
            "Restlessness",
            "Pacing",
            "Constant movement",
            "Climbing out of a chair or bed",
            "Repetitive motions such as organising, rearranging, rocking or tapping",
        ],
    ),
    (
        "Wandering and intrusion",
        &[
            "Walking without required aids",
            "Entering others' rooms",
            "Touching others' belongings",
            "Interfering with others",
            "Movement into unsafe areas",
            "Exit-seeking behaviour",
        ],
    ),
    (
        "Physical aggression",
        &[
            "Hitting",
            "Pushing",
            "Kicking",
            "Spitting",
            "Biting",
            "Throwing furniture",
            "Damaging property",
        ],
    ),
    (
        "Verbal aggression",
        &[
            "Verbal threats",
            "Easily angered",
            "Snapping at others",
            "Impatience",
            "Racial or sexual slurs",
        ],
    ),
    (
        "Socially inappropriate behaviour",
        &[
            "Public indecency",
            "Sexually or physically inappropriate touching",
            "Public displays of a sexual or physical nature",
            "Unsafe smoking or drinking habits",
        ],
    ),
    (
        "Withdrawal and low mood",
        &[
            "Reduced engagement and participation",
            "Lack of motivation",
            "Flat affect",
            "Tearfulness",
            "Social withdrawal",
            "Sleep or appetite changes",
        ],
    ),
    (
        "Anxiety and attention-seeking",
        &[
            "Preoccupied mind",
            "Verbalises irrational fear",
            "Hypervigilance",
            "Attempting to control care through guilt or emotional pressure",
            "Feigning illness",
            "Exaggerating symptoms",
            "Simulated falls",
        ],
    ),
    (
        "Self-harm risk",
        &["Self-harm", "Suicidal ideation"],
    ),
];

/// Triggers staff can address.
pub const MODIFIABLE_TRIGGERS: &[&str] = &[
    "Pain or discomfort",
    "Hunger or thirst",
    "Toileting needs",
    "Overstimulating environment",
    "Noise levels",
    "Unfamiliar staff",
    "Task complexity",
    "Room temperature",
];

/// Triggers outside staff control.
pub const FIXED_TRIGGERS: &[&str] = &[
    "Cognitive impairment",
    "Time of day (sundowning)",
    "Co-resident proximity",
    "Family departure",
    "Underlying medical condition",
    "Sensory impairment",
];

/// Preventative strategies.
pub const PREVENTATIVE_STRATEGIES: &[&str] = &[
    "Routine maintained",
    "Pre-emptive toileting",
    "Quiet environment provided",
    "Familiar staff allocated",
    "Pain relief offered",
    "Meaningful activity offered",
];

/// Intervention options.
pub const INTERVENTION_OPTIONS: &[&str] = &[
    "Verbal de-escalation",
    "Redirection",
    "1:1 engagement",
    "Environmental modification (quiet area)",
    "Diversional activity",
    "Offer food/fluids",
    "Toileting & hygiene needs",
    "Provide comfort/reassurance",
    "RN informed for review",
];

/// Looks up the manifestation list for a behaviour category label.
///
/// Returns `None` for labels outside the taxonomy; the core never calls
/// this (labels are opaque there), it exists for the input surfaces.
pub fn manifestations_for(category: &str) -> Option<&'static [&'static str]> {
    BEHAVIOUR_TAXONOMY
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, manifestations)| *manifestations)
}

/// The complete vocabulary set, as served to input surfaces.
#[derive(Debug, Serialize)]
pub struct Vocabulary {
    pub adl_options: &'static [&'static str],
    pub visitor_types: &'static [&'static str],
    pub intake_levels: &'static [&'static str],
    pub engagement_levels: &'static [&'static str],
    pub receptiveness: &'static [&'static str],
    pub assistance_levels: &'static [&'static str],
    pub adl_time_levels: &'static [&'static str],
    pub meal_assistance_options: &'static [&'static str],
    pub behaviour_taxonomy: Vec<BehaviourCategory>,
    pub modifiable_triggers: &'static [&'static str],
    pub fixed_triggers: &'static [&'static str],
    pub preventative_strategies: &'static [&'static str],
    pub intervention_options: &'static [&'static str],
}

/// One behaviour category with its manifestations, in serialisable form.
#[derive(Debug, Serialize)]
pub struct BehaviourCategory {
    pub category: &'static str,
    pub manifestations: &'static [&'static str],
}

/// Assembles the full vocabulary payload.
pub fn vocabulary() -> Vocabulary {
    Vocabulary {
        adl_options: ADL_OPTIONS,
        visitor_types: VISITOR_TYPES,
        intake_levels: INTAKE_LEVELS,
        engagement_levels: ENGAGEMENT_LEVELS,
        receptiveness: RECEPTIVENESS,
        assistance_levels: ASSISTANCE_LEVELS,
        adl_time_levels: ADL_TIME_LEVELS,
        meal_assistance_options: MEAL_ASSISTANCE_OPTIONS,
        behaviour_taxonomy: BEHAVIOUR_TAXONOMY
            .iter()
            .map(|&(category, manifestations)| BehaviourCategory {
                category,
                manifestations,
            })
            .collect(),
        modifiable_triggers: MODIFIABLE_TRIGGERS,
        fixed_triggers: FIXED_TRIGGERS,
        preventative_strategies: PREVENTATIVE_STRATEGIES,
        intervention_options: INTERVENTION_OPTIONS,
    }
}
