//! # Shiftnote Core
//!
//! Narrative composition engine for shift documentation.
//!
//! This crate turns a fully-populated [`record::ShiftRecord`] into a single
//! clinical narrative paragraph:
//! - [`join::readable_join`] renders phrase lists as readable prose
//! - [`significance`] decides which behaviour episodes are worth narrating
//! - [`compose::compose`] assembles the paragraph from an ordered topic table
//!
//! **No surface concerns**: input collection, vocabulary validation, HTTP and
//! file export belong to the `shiftnote-run` and `shiftnote-cli` binaries.

pub mod compose;
pub mod join;
pub mod record;
pub mod significance;
pub mod words;

pub use compose::{compose, normalise_whitespace};
pub use join::readable_join;
pub use record::{
    Effectiveness, EndOfShift, EpisodeRecord, MedicationEffect, Settledness, ShiftRecord,
    ShiftType, VisitRecord,
};
pub use significance::{is_significant, SIGNIFICANCE_PRODUCT_THRESHOLD};
