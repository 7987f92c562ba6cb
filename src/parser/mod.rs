//! Workout text parser
//!
//! Turns free-form workout text (typed by hand or read from a photo) into
//! structured exercises. Two input dialects are understood:
//! - Block: sections separated by `---`, one exercise per section, with
//!   labeled lines (`Focus:`, `Sets:`, `Weight suggestion:`, `Rest:`)
//! - List: comma-separated segments, shorthand such as `Bench press 3x10 60kg`,
//!   labeled segments continuing the open exercise
//!
//! Parsing never fails. An exercise nothing could be extracted for comes back
//! under-determined (see [`ParsedExercise::is_under_determined`]).

pub mod classify;
pub mod fields;
pub mod patterns;
pub mod record;

pub use record::{ExerciseBuilder, ParsedExercise, Weight, WeightUnit};

use tracing::{debug, trace};

/// Separator between Block dialect sections
pub const SECTION_SEPARATOR: &str = "---";

/// Sections containing any of these are headers, not exercises.
/// Case-sensitive; an exercise named e.g. "Finisher Burpees" is skipped too.
pub const HEADER_KEYWORDS: &[&str] = &["Workouts", "Finisher"];

/// Top-level input format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Block,
    List,
}

impl Dialect {
    /// Any `---` anywhere selects Block for the whole input
    pub fn detect(text: &str) -> Self {
        if text.contains(SECTION_SEPARATOR) {
            Dialect::Block
        } else {
            Dialect::List
        }
    }
}

/// Parse workout text into exercises, in input order
pub fn parse_workout_text(text: &str) -> Vec<ParsedExercise> {
    let dialect = Dialect::detect(text);
    debug!(?dialect, len = text.len(), "parsing workout text");

    let exercises = match dialect {
        Dialect::Block => parse_blocks(text),
        Dialect::List => parse_list(text),
    };

    let unresolved = exercises.iter().filter(|e| e.is_under_determined()).count();
    if unresolved > 0 {
        debug!(unresolved, total = exercises.len(), "some exercises could not be resolved");
    }

    exercises
}

fn is_header(section: &str) -> bool {
    HEADER_KEYWORDS.iter().any(|keyword| section.contains(keyword))
}

fn finish(mut builder: ExerciseBuilder) -> ParsedExercise {
    classify::classify(&mut builder);
    builder.build()
}

fn parse_blocks(text: &str) -> Vec<ParsedExercise> {
    let mut exercises = Vec::new();

    for section in text.split(SECTION_SEPARATOR).map(str::trim) {
        if section.is_empty() {
            continue;
        }
        if is_header(section) {
            trace!(section, "skipping header section");
            continue;
        }

        let mut lines = section.lines().map(str::trim).filter(|line| !line.is_empty());
        let Some(name) = lines.next() else {
            continue;
        };

        let mut builder = ExerciseBuilder::new(name);
        for line in lines {
            if !fields::apply_line(&mut builder, line) {
                trace!(line, "ignoring unlabeled line");
            }
        }

        if builder.lacks_volume() {
            patterns::apply(&mut builder);
        }

        exercises.push(finish(builder));
    }

    exercises
}

fn parse_list(text: &str) -> Vec<ParsedExercise> {
    let mut exercises = Vec::new();
    let mut current: Option<ExerciseBuilder> = None;

    for segment in text.split(',').map(str::trim) {
        if segment.is_empty() {
            continue;
        }

        if fields::is_labeled(segment) {
            match current.as_mut() {
                Some(builder) => {
                    fields::apply_line(builder, segment);
                }
                None => trace!(segment, "labeled segment before any exercise"),
            }
            continue;
        }

        if let Some(done) = current.take() {
            exercises.push(finish(done));
        }
        let mut builder = ExerciseBuilder::new(segment);
        patterns::apply(&mut builder);
        current = Some(builder);
    }

    if let Some(done) = current {
        exercises.push(finish(done));
    }

    exercises
}
