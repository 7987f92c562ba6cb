//! Workout model - parsed templates expanded into loggable sets

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::parser::{ParsedExercise, WeightUnit};

const KG_PER_LB: f64 = 0.453_592_37;

/// Upper bound on sets stored for one exercise
pub const MAX_SETS_PER_EXERCISE: u32 = 100;

/// One performed (or planned) set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetEntry {
    pub reps: u32,
    pub weight: f64, // kg
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>, // hold time for time-based exercises
}

/// Exercise as it is logged: one entry per set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: Vec<SetEntry>,
}

/// Workout record stored in history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
    pub completed: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Split parsed exercises into loggable ones and unresolved ones, keeping order
pub fn partition_parsed(parsed: Vec<ParsedExercise>) -> (Vec<ParsedExercise>, Vec<ParsedExercise>) {
    parsed.into_iter().partition(|e| !e.is_under_determined())
}

/// User-facing line naming exercises that could not be parsed
pub fn unresolved_notice(unresolved: &[ParsedExercise]) -> Option<String> {
    if unresolved.is_empty() {
        return None;
    }
    let names: Vec<_> = unresolved.iter().map(|e| e.name.as_str()).collect();
    Some(format!("Couldn't fully parse: {}", names.join(", ")))
}

impl Exercise {
    /// Expand a parsed template into individual sets.
    ///
    /// Weight is stored in kg (lbs converted); a loggable template without a
    /// set count still yields one set. At most `MAX_SETS_PER_EXERCISE` sets are
    /// produced.
    pub fn from_parsed(parsed: &ParsedExercise) -> Self {
        let weight = parsed
            .weight
            .map(|w| match w.unit {
                WeightUnit::Kg => w.value,
                WeightUnit::Lbs => round_tenth(w.value * KG_PER_LB),
            })
            .unwrap_or(0.0);

        let count = if parsed.is_under_determined() {
            parsed.sets
        } else {
            parsed.sets.max(1)
        };
        if count > MAX_SETS_PER_EXERCISE {
            warn!(name = %parsed.name, sets = count, "set count capped");
        }
        let count = count.min(MAX_SETS_PER_EXERCISE);

        let sets = (0..count)
            .map(|_| SetEntry {
                reps: parsed.reps,
                weight,
                completed: false,
                duration_secs: parsed.duration,
            })
            .collect();

        Self {
            name: parsed.name.clone(),
            sets,
        }
    }

    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|s| s.reps).sum()
    }

    /// Sum of weight x reps over all sets
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(|s| s.weight * s.reps as f64).sum()
    }

    /// Short encouragement line for a finished exercise
    pub fn summary(&self) -> String {
        let mut summary = format!("Great job completing {}! ", self.name);

        let total_sets = self.sets.len();
        if total_sets == 0 {
            summary.push_str("Every rep counts towards your goals! 🌟");
            return summary;
        }

        let avg_reps = self.total_reps() as f64 / total_sets as f64;
        let avg_volume = self.volume() / total_sets as f64;

        summary.push_str(&format!(
            "You completed {} sets with an average of {} reps per set. ",
            total_sets,
            avg_reps.round()
        ));
        if avg_volume > 0.0 {
            summary.push_str(&format!(
                "Your average load per set was {}kg. ",
                avg_volume.round()
            ));
        }

        let closing = match (avg_volume, avg_reps) {
            (v, _) if v > 50.0 => "That's some serious strength training! 💪",
            (_, r) if r > 12.0 => "Great endurance work! Keep it up! 🏃",
            _ => "Every rep counts towards your goals! 🌟",
        };
        summary.push_str(closing);
        summary
    }
}

impl Workout {
    /// Build a new, not yet completed workout from parsed exercises.
    /// Under-determined entries are skipped.
    pub fn from_parsed(date: NaiveDate, parsed: &[ParsedExercise], notes: Option<String>) -> Self {
        let exercises = parsed
            .iter()
            .filter(|e| !e.is_under_determined())
            .map(Exercise::from_parsed)
            .collect();

        Self {
            id: None,
            date,
            exercises,
            completed: false,
            notes: notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        }
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Sum of per-set weights in kg
    pub fn total_weight(&self) -> f64 {
        round_tenth(
            self.exercises
                .iter()
                .flat_map(|e| e.sets.iter())
                .map(|s| s.weight)
                .sum(),
        )
    }

    /// Mark the workout and every set completed
    pub fn mark_completed(&mut self) {
        self.completed = true;
        for set in self.exercises.iter_mut().flat_map(|e| e.sets.iter_mut()) {
            set.completed = true;
        }
    }

    /// Multi-line summary for sharing
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "📅 Workout Summary - {}\n\n",
            self.date.format("%A, %B %-d, %Y")
        );

        for exercise in &self.exercises {
            summary.push_str(&format!("🏋️ {}\n", exercise.name));
            for (i, set) in exercise.sets.iter().enumerate() {
                let mark = if set.completed { " ✓" } else { "" };
                match set.duration_secs {
                    Some(secs) => {
                        summary.push_str(&format!("  Set {}: {}s hold{}\n", i + 1, secs, mark))
                    }
                    None => summary.push_str(&format!(
                        "  Set {}: {}kg × {} reps{}\n",
                        i + 1,
                        set.weight,
                        set.reps,
                        mark
                    )),
                }
            }
            summary.push('\n');
        }

        if let Some(notes) = &self.notes {
            summary.push_str(&format!("📝 Notes: {}\n", notes));
        }

        summary.push_str(&format!("\n💪 Total Exercises: {}", self.exercises.len()));
        summary.push_str(&format!("\n🔄 Total Sets: {}", self.total_sets()));
        summary.push_str(&format!("\n⚖️ Total Weight: {}kg", self.total_weight()));
        summary
    }
}
