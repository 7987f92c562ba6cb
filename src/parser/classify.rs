//! Time-based classification by name keyword

use tracing::trace;

use super::record::ExerciseBuilder;

/// Seconds per set when a time-based exercise carries no duration
pub const DEFAULT_DURATION_SECS: u32 = 30;

/// Holds and bodyweight movements usually performed for time
pub const TIME_BASED_KEYWORDS: &[&str] = &[
    "plank",
    "push-up",
    "pushup",
    "wall sit",
    "wall squat",
    "bridge",
    "glute bridge",
    "superman",
    "bird dog",
    "dead bug",
    "hollow hold",
    "side plank",
    "mountain climber",
    "burpee",
];

/// First lexicon keyword contained in the name, if any
pub fn time_based_keyword(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    TIME_BASED_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(keyword))
}

/// Mark the exercise time-based when its name matches the lexicon and make
/// sure every time-based exercise has a positive duration. Running it twice
/// changes nothing.
pub fn classify(builder: &mut ExerciseBuilder) {
    if !builder.is_time_based {
        match time_based_keyword(&builder.name) {
            Some(keyword) => {
                trace!(keyword, name = %builder.name, "time-based by name");
                builder.is_time_based = true;
            }
            None => return,
        }
    }

    if builder.duration.is_none_or(|secs| secs == 0) {
        builder.duration = Some(DEFAULT_DURATION_SECS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(time_based_keyword("Side Plank"), Some("plank"));
        assert_eq!(time_based_keyword("Push-Ups (Bodyweight Burnout)"), Some("push-up"));
        assert_eq!(time_based_keyword("Burpees"), Some("burpee"));
        assert_eq!(time_based_keyword("Bench press"), None);
    }

    #[test]
    fn test_classify_by_name_sets_default_duration() {
        let mut builder = ExerciseBuilder::new("Glute Bridge");
        classify(&mut builder);
        assert!(builder.is_time_based);
        assert_eq!(builder.duration, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn test_classify_keeps_explicit_duration() {
        let mut builder = ExerciseBuilder::new("Plank");
        builder.is_time_based = true;
        builder.duration = Some(45);
        classify(&mut builder);
        assert_eq!(builder.duration, Some(45));
    }

    #[test]
    fn test_classify_fills_missing_duration_for_time_based() {
        let mut builder = ExerciseBuilder::new("Farmer carry");
        builder.is_time_based = true;
        classify(&mut builder);
        assert_eq!(builder.duration, Some(DEFAULT_DURATION_SECS));

        let mut builder = ExerciseBuilder::new("Hang");
        builder.is_time_based = true;
        builder.duration = Some(0);
        classify(&mut builder);
        assert_eq!(builder.duration, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn test_classify_leaves_other_exercises() {
        let mut builder = ExerciseBuilder::new("Deadlift");
        classify(&mut builder);
        assert!(!builder.is_time_based);
        assert_eq!(builder.duration, None);
    }

    #[test]
    fn test_classify_idempotent() {
        for name in ["Mountain climbers", "Squat", "Dead bug"] {
            let mut once = ExerciseBuilder::new(name);
            classify(&mut once);
            let mut twice = once.clone();
            classify(&mut twice);
            assert_eq!(once.build(), twice.build());
        }
    }
}
