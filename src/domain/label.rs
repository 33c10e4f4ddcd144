// ============================================================
// Layer 3 — Label and Pair
// ============================================================
// Canonical numeric encoding: NEGATIVE=0, POSITIVE=1, NEUTRAL=2.
// All arbitration logic is written against `Label`, never the
// raw codes; codes only appear at the corpus boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DataError;

/// One of the three sentiment classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Negative,
    Positive,
    Neutral,
}

impl Label {
    /// Every label, in code order
    pub const ALL: [Label; 3] = [Label::Negative, Label::Positive, Label::Neutral];

    /// The canonical numeric code of this label
    pub fn code(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
            Label::Neutral => 2,
        }
    }

    /// Decode a numeric code, rejecting anything outside {0, 1, 2}.
    pub fn from_code(code: i64) -> Result<Self, DataError> {
        match code {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            2 => Ok(Label::Neutral),
            other => Err(DataError::UnknownLabel(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Negative => "NEGATIVE",
            Label::Positive => "POSITIVE",
            Label::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the numeric code ("0", "1", "2", also "1.0" as
/// spreadsheets export it) or the label name in any case.
impl FromStr for Label {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "negative" => return Ok(Label::Negative),
            "positive" => return Ok(Label::Positive),
            "neutral" => return Ok(Label::Neutral),
            _ => {}
        }

        match trimmed.parse::<f64>() {
            Ok(v) if v.fract() == 0.0 => Label::from_code(v as i64),
            _ => Err(DataError::UnknownLabel(trimmed.to_string())),
        }
    }
}

// ─── Pair ─────────────────────────────────────────────────────────────────────
/// One of the three binary sub-problems.
///
/// Each pair has a *reference* label and a *scored* label. Its
/// classifier produces a decision score for the scored label and
/// the scored label wins only when that score is strictly positive;
/// ties fall back to the reference label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pair {
    PositiveNegative,
    PositiveNeutral,
    NegativeNeutral,
}

impl Pair {
    pub const ALL: [Pair; 3] = [Pair::PositiveNegative, Pair::PositiveNeutral, Pair::NegativeNeutral];

    /// Label returned when the decision score is not positive
    pub fn reference(self) -> Label {
        match self {
            Pair::PositiveNegative => Label::Negative,
            Pair::PositiveNeutral => Label::Neutral,
            Pair::NegativeNeutral => Label::Neutral,
        }
    }

    /// Label the decision score speaks for
    pub fn scored(self) -> Label {
        match self {
            Pair::PositiveNegative => Label::Positive,
            Pair::PositiveNeutral => Label::Positive,
            Pair::NegativeNeutral => Label::Negative,
        }
    }

    /// The label this pair never sees
    pub fn excluded(self) -> Label {
        match self {
            Pair::PositiveNegative => Label::Neutral,
            Pair::PositiveNeutral => Label::Negative,
            Pair::NegativeNeutral => Label::Positive,
        }
    }

    pub fn contains(self, label: Label) -> bool {
        label != self.excluded()
    }

    /// Map a binary decision back onto this pair's labels.
    pub fn label_for(self, scored: bool) -> Label {
        if scored {
            self.scored()
        } else {
            self.reference()
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pair::PositiveNegative => "positive/negative",
            Pair::PositiveNeutral => "positive/neutral",
            Pair::NegativeNeutral => "negative/neutral",
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
