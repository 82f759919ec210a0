//! Shift time slots and schedule guide.
//!
//! Visit and episode times are recorded against fixed half-hour slot labels
//! (`HH:MM`), inclusive of both the start and end boundary of the shift
//! window.

use chrono::{NaiveTime, TimeDelta};
use shiftnote_core::ShiftType;

/// Shift window boundaries, as (start, end) hours.
const MORNING_WINDOW: (u32, u32) = (6, 14);
const AFTERNOON_WINDOW: (u32, u32) = (14, 21);

/// Schedule guide lines shown alongside the input form. Guidance only;
/// the composer never reads these.
pub fn schedule_guide(shift: ShiftType) -> &'static [&'static str] {
    match shift {
        ShiftType::Morning => &[
            "0600-0730 ADLs upon rising",
            "0730-0900 Breakfast",
            "0900-1130 Lifestyle / activity engagement",
            "1000-1030 Morning tea",
            "1200-1300 Lunch",
            "1300-1330 Activity engagement / Toileting / Transfers / Appointments",
            "1330-1400 End of shift / ATOR",
            "Variable: Visitors, behaviour management",
        ],
        ShiftType::Afternoon => &[
            "1400-1500 Afternoon tea",
            "1500-1700 Lifestyle / activity engagement",
            "1500-1600 Toileting / Shower / Change of clothes (if applicable)",
            "1700-1800 Dinner",
            "1800-1930 ADLs",
            "1930-2100 End of shift / ATOR",
            "Variable: Visitors, behaviour management",
        ],
    }
}

/// Returns the half-hour slot labels for a shift, both boundaries included.
pub fn shift_slots(shift: ShiftType) -> Vec<String> {
    let (start, end) = match shift {
        ShiftType::Morning => MORNING_WINDOW,
        ShiftType::Afternoon => AFTERNOON_WINDOW,
    };
    half_hour_slots(on_the_hour(start), on_the_hour(end))
}

/// Generates `HH:MM` labels from `start` to `end` inclusive at 30-minute
/// steps. Returns an empty list if `end` precedes `start`.
pub fn half_hour_slots(start: NaiveTime, end: NaiveTime) -> Vec<String> {
    let mut slots = Vec::new();
    let mut current = start;
    while current <= end {
        slots.push(current.format("%H:%M").to_string());
        if current == end {
            break;
        }
        current += TimeDelta::minutes(30);
    }
    slots
}

fn on_the_hour(hour: u32) -> NaiveTime {
    // Hours come from the window constants above, always < 24.
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}
