//! Parsed exercise record and the builder that fills it pass by pass

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Weight unit recognized in workout text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    /// Case-insensitive: OCR and hand-typed text mix "KG", "Kg", "kg"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kg),
            "lbs" => Ok(WeightUnit::Lbs),
            other => Err(format!("unknown weight unit: {}", other)),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight magnitude together with its unit.
///
/// Serialized flat into the exercise as `weight` + `unit`, so the two are
/// always present or absent together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    #[serde(rename = "weight")]
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    /// Build from captured text. Zero, negative or unparsable values yield None.
    pub fn parse(value: &str, unit: &str) -> Option<Self> {
        let value: f64 = value.parse().ok()?;
        let unit: WeightUnit = unit.parse().ok()?;
        (value.is_finite() && value > 0.0).then_some(Self { value, unit })
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// One exercise extracted from workout text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(flatten)]
    pub weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    pub is_time_based: bool,
    /// Seconds per set, present iff `is_time_based`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl ParsedExercise {
    /// No sets, no reps and not time-based: nothing usable was extracted
    pub fn is_under_determined(&self) -> bool {
        self.sets == 0 && self.reps == 0 && !self.is_time_based
    }
}

impl fmt::Display for ParsedExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.is_under_determined() {
            return f.write_str(" | unresolved");
        }

        match self.duration {
            Some(secs) if self.is_time_based => write!(f, " | {}x{}s", self.sets, secs)?,
            _ => write!(f, " | {}x{}", self.sets, self.reps)?,
        }
        if let Some(weight) = &self.weight {
            write!(f, " @ {}", weight)?;
        }
        if let Some(focus) = &self.focus {
            write!(f, " | focus: {}", focus)?;
        }
        if let Some(rest) = &self.rest {
            write!(f, " | rest: {}", rest)?;
        }
        Ok(())
    }
}

/// Mutable working state for one exercise while extraction passes run.
///
/// Starts from `sets: 0, reps: 0, is_time_based: false`; only `build` hands
/// out a `ParsedExercise`.
#[derive(Debug, Clone)]
pub struct ExerciseBuilder {
    pub(crate) name: String,
    pub(crate) sets: u32,
    pub(crate) reps: u32,
    pub(crate) weight: Option<Weight>,
    pub(crate) focus: Option<String>,
    pub(crate) rest: Option<String>,
    pub(crate) is_time_based: bool,
    pub(crate) duration: Option<u32>,
}

impl ExerciseBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            sets: 0,
            reps: 0,
            weight: None,
            focus: None,
            rest: None,
            is_time_based: false,
            duration: None,
        }
    }

    /// Neither sets nor reps resolved yet
    pub fn lacks_volume(&self) -> bool {
        self.sets == 0 && self.reps == 0
    }

    pub fn build(self) -> ParsedExercise {
        // duration only travels with the time-based flag
        let duration = if self.is_time_based { self.duration } else { None };
        ParsedExercise {
            name: self.name,
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            serial_number: None,
            focus: self.focus,
            rest: self.rest,
            is_time_based: self.is_time_based,
            duration,
        }
    }
}
