//! Labeled-field extraction: `Focus:`, `Sets:`, `Weight suggestion:`, `Rest:`
//! and `Max reps` lines

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use super::record::{ExerciseBuilder, Weight};

pub const FOCUS_PREFIX: &str = "Focus:";
pub const SETS_PREFIX: &str = "Sets:";
pub const WEIGHT_PREFIX: &str = "Weight suggestion:";
pub const REST_PREFIX: &str = "Rest:";
pub const MAX_REPS_MARKER: &str = "Max reps";

pub const LABEL_PREFIXES: &[&str] = &[FOCUS_PREFIX, SETS_PREFIX, REST_PREFIX, WEIGHT_PREFIX];

/// Which `Sets:` shape matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetsShape {
    /// `3 (12 – 12 – 10 reps)`
    RepSequence,
    /// `2 sets x 10–15 reps`
    SetsByRepRange,
    /// `2 x 45 sec`
    Timed,
}

/// Values captured from a `Sets:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetsValue {
    pub shape: SetsShape,
    pub sets: u32,
    pub reps: u32,
    pub duration: Option<u32>,
}

struct SetsGrammar {
    shape: SetsShape,
    regex: Regex,
}

// Tried in order, first match wins.
static SETS_GRAMMARS: LazyLock<Vec<SetsGrammar>> = LazyLock::new(|| {
    vec![
        SetsGrammar {
            shape: SetsShape::RepSequence,
            regex: Regex::new(r"^([0-9]+)\s*\(\s*([0-9]+)[0-9\s–—-]*reps?\)$")
                .expect("static regex must compile"),
        },
        SetsGrammar {
            shape: SetsShape::SetsByRepRange,
            regex: Regex::new(r"^([0-9]+)\s*sets?\s*x\s*([0-9]+)(?:\s*[–—-]\s*[0-9]+)*\s*reps?$")
                .expect("static regex must compile"),
        },
        SetsGrammar {
            shape: SetsShape::Timed,
            regex: Regex::new(r"^([0-9]+)\s*x\s*([0-9]+)\s*sec$").expect("static regex must compile"),
        },
    ]
});

static WEIGHT_SUGGESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*(?:[–—-]\s*[0-9]+(?:\.[0-9]+)?\s*)*(kg|lbs)$")
        .expect("static regex must compile")
});

static MAX_REPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Max reps x ([0-9]+) sets").expect("static regex must compile"));

fn capture_u32(caps: &Captures, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// Parse the text after `Sets:`. Only the first rep count of a sequence or
/// range is kept.
pub fn parse_sets(info: &str) -> Option<SetsValue> {
    let info = info.trim();
    SETS_GRAMMARS.iter().find_map(|grammar| {
        let caps = grammar.regex.captures(info)?;
        let sets = capture_u32(&caps, 1)?;
        let second = capture_u32(&caps, 2)?;
        Some(match grammar.shape {
            SetsShape::Timed => SetsValue {
                shape: grammar.shape,
                sets,
                reps: 0,
                duration: Some(second),
            },
            shape => SetsValue {
                shape,
                sets,
                reps: second,
                duration: None,
            },
        })
    })
}

/// Parse the text after `Weight suggestion:`; a range keeps its first value
pub fn parse_weight_suggestion(info: &str) -> Option<Weight> {
    let caps = WEIGHT_SUGGESTION.captures(info.trim())?;
    Weight::parse(caps.get(1)?.as_str(), caps.get(2)?.as_str())
}

/// Set count from `Max reps x N sets`
pub fn parse_max_reps(line: &str) -> Option<u32> {
    let caps = MAX_REPS.captures(line)?;
    capture_u32(&caps, 1)
}

/// Segment carries data for the open exercise rather than starting a new one
pub fn is_labeled(segment: &str) -> bool {
    LABEL_PREFIXES.iter().any(|prefix| segment.starts_with(prefix))
        || segment.contains(MAX_REPS_MARKER)
}

/// Apply one labeled line to the builder. Returns true if the line was consumed.
pub fn apply_line(builder: &mut ExerciseBuilder, line: &str) -> bool {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(FOCUS_PREFIX) {
        builder.focus = Some(rest.trim().to_string());
        return true;
    }

    if let Some(rest) = line.strip_prefix(SETS_PREFIX) {
        if let Some(value) = parse_sets(rest) {
            trace!(shape = ?value.shape, "sets line matched");
            builder.sets = value.sets;
            builder.reps = value.reps;
            if let Some(duration) = value.duration {
                builder.is_time_based = true;
                builder.duration = Some(duration);
            }
            return true;
        }
    }

    if let Some(rest) = line.strip_prefix(WEIGHT_PREFIX) {
        if let Some(weight) = parse_weight_suggestion(rest) {
            builder.weight = Some(weight);
            return true;
        }
    }

    if let Some(rest) = line.strip_prefix(REST_PREFIX) {
        builder.rest = Some(rest.trim().to_string());
        return true;
    }

    if line.contains(MAX_REPS_MARKER) {
        if let Some(sets) = parse_max_reps(line) {
            builder.sets = sets;
            builder.reps = 0;
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::record::WeightUnit;

    #[test]
    fn test_sets_rep_sequence_keeps_first() {
        let value = parse_sets("3 (12 – 12 – 10 reps)").unwrap();
        assert_eq!(value.shape, SetsShape::RepSequence);
        assert_eq!((value.sets, value.reps, value.duration), (3, 12, None));
    }

    #[test]
    fn test_sets_rep_sequence_single_rep() {
        let value = parse_sets("4 (8 reps)").unwrap();
        assert_eq!((value.sets, value.reps), (4, 8));
    }

    #[test]
    fn test_sets_by_rep_range() {
        let value = parse_sets("2 sets x 10–15 reps").unwrap();
        assert_eq!(value.shape, SetsShape::SetsByRepRange);
        assert_eq!((value.sets, value.reps), (2, 10));

        let value = parse_sets("1 set x 20 rep").unwrap();
        assert_eq!((value.sets, value.reps), (1, 20));
    }

    #[test]
    fn test_sets_timed() {
        let value = parse_sets("2 x 45 sec").unwrap();
        assert_eq!(value.shape, SetsShape::Timed);
        assert_eq!((value.sets, value.reps, value.duration), (2, 0, Some(45)));
    }

    #[test]
    fn test_sets_unrecognized() {
        assert!(parse_sets("as many as you can").is_none());
        assert!(parse_sets("").is_none());
    }

    #[test]
    fn test_sets_overflow_does_not_match() {
        assert!(parse_sets("99999999999 x 45 sec").is_none());
    }

    #[test]
    fn test_weight_suggestion_range() {
        let w = parse_weight_suggestion("25–35–40kg").unwrap();
        assert_eq!(w.value, 25.0);
        assert_eq!(w.unit, WeightUnit::Kg);

        let w = parse_weight_suggestion(" 12.5 – 15 – 20kg").unwrap();
        assert_eq!(w.value, 12.5);

        let w = parse_weight_suggestion("45 lbs").unwrap();
        assert_eq!(w.unit, WeightUnit::Lbs);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(parse_sets("٣ (١٢ reps)").is_none());
        assert!(parse_weight_suggestion("٦٠kg").is_none());
        assert_eq!(parse_max_reps("Max reps x ٢ sets"), None);
    }

    #[test]
    fn test_weight_suggestion_without_unit() {
        assert!(parse_weight_suggestion("heavy").is_none());
        assert!(parse_weight_suggestion("20").is_none());
    }

    #[test]
    fn test_max_reps() {
        assert_eq!(parse_max_reps("Max reps x 2 sets"), Some(2));
        assert_eq!(parse_max_reps("Max reps"), None);
    }

    #[test]
    fn test_is_labeled() {
        assert!(is_labeled("Focus: upper chest"));
        assert!(is_labeled("Sets: 3 (10 reps)"));
        assert!(is_labeled("Rest: 60 sec"));
        assert!(is_labeled("Weight suggestion: 20kg"));
        assert!(is_labeled("Push-ups Max reps x 2 sets"));
        assert!(!is_labeled("Bench press 3x10"));
        assert!(!is_labeled("focus: lowercase is a name"));
    }

    #[test]
    fn test_apply_line_fills_fields() {
        let mut builder = ExerciseBuilder::new("Cable Rope Pushdown");
        assert!(apply_line(&mut builder, "Focus: Triceps"));
        assert!(apply_line(&mut builder, "Weight suggestion: 25–35–40kg"));
        assert!(apply_line(&mut builder, "Sets: 3 (12 – 12 – 10 reps)"));
        assert!(apply_line(&mut builder, "Rest: 60–90 sec"));
        assert!(!apply_line(&mut builder, "Keep elbows tucked"));

        let exercise = builder.build();
        assert_eq!(exercise.focus.as_deref(), Some("Triceps"));
        assert_eq!(exercise.rest.as_deref(), Some("60–90 sec"));
        assert_eq!((exercise.sets, exercise.reps), (3, 12));
        assert_eq!(exercise.weight.unwrap().value, 25.0);
    }

    #[test]
    fn test_apply_line_timed_sets() {
        let mut builder = ExerciseBuilder::new("Plank Hold");
        assert!(apply_line(&mut builder, "Sets: 2 x 45 sec"));
        assert!(builder.is_time_based);
        assert_eq!(builder.duration, Some(45));
    }

    #[test]
    fn test_apply_line_sets_falls_through_to_max_reps() {
        let mut builder = ExerciseBuilder::new("Dips");
        assert!(apply_line(&mut builder, "Sets: Max reps x 3 sets"));
        assert_eq!((builder.sets, builder.reps), (3, 0));
    }

    #[test]
    fn test_apply_line_unmatched_sets_leaves_defaults() {
        let mut builder = ExerciseBuilder::new("Rows");
        assert!(!apply_line(&mut builder, "Sets: a few"));
        assert!(builder.lacks_volume());
    }
}
