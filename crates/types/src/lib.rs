//! Validated scalar types shared across the shiftnote crates.
//!
//! Every type here enforces its own invariant at construction and at
//! deserialisation, so downstream code (the composer in particular) never
//! has to re-check ranges or emptiness.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating validated score types.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// The value fell outside the permitted range for the score
    #[error("score {value} is outside the permitted range {min}..={max}")]
    OutOfRange { value: u8, min: u8, max: u8 },
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. The input is automatically trimmed of leading
/// and trailing whitespace during construction. Vocabulary values carried in
/// a shift record (receptiveness, intake level, behaviour labels and so on)
/// use this type so a record can never hold a blank label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A behaviour episode score on the 1–4 clinical scale.
///
/// Used for episode frequency and severity. The range is enforced here once
/// so the significance filter and the composer can treat the value as
/// already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScaleScore(u8);

impl ScaleScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Creates a new `ScaleScore`, rejecting values outside 1..=4.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ScoreError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw score value.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// An occupational disruption score on the 0–4 scale.
///
/// Zero means the episode caused no disruption to normal care operations;
/// 4 means severe disruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisruptionScore(u8);

impl DisruptionScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;

    /// Creates a new `DisruptionScore`, rejecting values outside 0..=4.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw score value.
    pub fn get(self) -> u8 {
        self.0
    }
}

macro_rules! score_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u8(self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = u8::deserialize(deserializer)?;
                $ty::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

score_serde!(ScaleScore);
score_serde!(DisruptionScore);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_accepts() {
        let text = NonEmptyText::new("  Receptive to assistance  ").expect("valid");
        assert_eq!(text.as_str(), "Receptive to assistance");
    }

    #[test]
    fn non_empty_text_rejects_blank() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn scale_score_accepts_full_range() {
        for value in 1..=4 {
            assert_eq!(ScaleScore::new(value).expect("in range").get(), value);
        }
    }

    #[test]
    fn scale_score_rejects_zero_and_five() {
        assert!(matches!(
            ScaleScore::new(0),
            Err(ScoreError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            ScaleScore::new(5),
            Err(ScoreError::OutOfRange { value: 5, .. })
        ));
    }

    #[test]
    fn disruption_score_accepts_zero() {
        assert_eq!(DisruptionScore::new(0).expect("in range").get(), 0);
    }

    #[test]
    fn disruption_score_rejects_five() {
        assert!(matches!(
            DisruptionScore::new(5),
            Err(ScoreError::OutOfRange { value: 5, .. })
        ));
    }

    #[test]
    fn scores_round_trip_through_serde() {
        let score: ScaleScore = serde_json::from_str("3").expect("valid");
        assert_eq!(score.get(), 3);
        assert!(serde_json::from_str::<ScaleScore>("9").is_err());
        assert!(serde_json::from_str::<DisruptionScore>("5").is_err());
    }
}
