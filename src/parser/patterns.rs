//! Shorthand grammars for a name line such as `Bench press 3x10 60kg`.
//!
//! The grammars are tried in a fixed order and the first match wins. All of
//! them are case-insensitive and anchored to the whole line, and each one
//! captures the display name in front of the shorthand.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use super::record::{ExerciseBuilder, Weight};

/// Shorthand notations, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    /// `Bench press 3x10 60kg` (weight optional)
    CompactWithWeight,
    /// `Squats 3 sets of 12 reps at 100kg` (weight optional)
    SetsOfReps,
    /// `Bench press 3 sets 10 reps 60kg` (weight optional)
    SetsReps,
    /// `Deadlift 60kg 3x8`; `CompactWithWeight` takes such lines first and
    /// keeps the weight in the name
    WeightFirst,
    /// `Bench press 60kg`
    WeightOnly,
    /// `Pull-ups 3x10`; already covered by `CompactWithWeight`, kept for precedence
    Compact,
    /// `Plank 3x45sec`
    CompactTimed,
}

/// What a shorthand grammar extracted from a name line
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    pub shorthand: Shorthand,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<Weight>,
    pub duration: Option<u32>,
}

struct NameGrammar {
    shorthand: Shorthand,
    regex: Regex,
}

const WEIGHT: &str = r"(?P<weight>[0-9]+(?:\.[0-9]+)?)(?P<unit>kg|lbs)";

fn grammar(shorthand: Shorthand, body: &str) -> NameGrammar {
    let pattern = format!(r"(?i)^(?P<name>.+?)\s+{}$", body.replace("{W}", WEIGHT));
    NameGrammar {
        shorthand,
        regex: Regex::new(&pattern).expect("static regex must compile"),
    }
}

static NAME_GRAMMARS: LazyLock<Vec<NameGrammar>> = LazyLock::new(|| {
    vec![
        grammar(
            Shorthand::CompactWithWeight,
            r"(?P<sets>[0-9]+)x(?P<reps>[0-9]+)(?:\s+{W})?",
        ),
        grammar(
            Shorthand::SetsOfReps,
            r"(?P<sets>[0-9]+)\s+sets?\s+of\s+(?P<reps>[0-9]+)\s+reps?(?:\s+at\s+{W})?",
        ),
        grammar(
            Shorthand::SetsReps,
            r"(?P<sets>[0-9]+)\s+sets?\s+(?P<reps>[0-9]+)\s+reps?(?:\s+{W})?",
        ),
        grammar(Shorthand::WeightFirst, r"{W}\s+(?P<sets>[0-9]+)x(?P<reps>[0-9]+)"),
        grammar(Shorthand::WeightOnly, r"{W}"),
        grammar(Shorthand::Compact, r"(?P<sets>[0-9]+)x(?P<reps>[0-9]+)"),
        grammar(Shorthand::CompactTimed, r"(?P<sets>[0-9]+)x(?P<secs>[0-9]+)(?:sec|s)"),
    ]
});

/// Absent group reads as 0, a present but unparsable one rejects the match
fn optional_u32(caps: &Captures, group: &str) -> Option<u32> {
    match caps.name(group) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn extract(shorthand: Shorthand, caps: &Captures) -> Option<NameMatch> {
    let name = caps.name("name")?.as_str().trim().to_string();
    let sets = optional_u32(caps, "sets")?;
    let reps = optional_u32(caps, "reps")?;
    let weight = match (caps.name("weight"), caps.name("unit")) {
        (Some(value), Some(unit)) => Weight::parse(value.as_str(), unit.as_str()),
        _ => None,
    };
    let duration = match caps.name("secs") {
        Some(secs) => Some(secs.as_str().parse().ok()?),
        None => None,
    };

    Some(NameMatch {
        shorthand,
        name,
        sets,
        reps,
        weight,
        duration,
    })
}

impl NameGrammar {
    fn try_match(&self, line: &str) -> Option<NameMatch> {
        let caps = self.regex.captures(line)?;
        extract(self.shorthand, &caps)
    }
}

/// Run the cascade over one line
pub fn match_name(line: &str) -> Option<NameMatch> {
    let line = line.trim();
    NAME_GRAMMARS.iter().find_map(|grammar| grammar.try_match(line))
}

/// Try a single grammar, ignoring precedence
pub fn match_shorthand(shorthand: Shorthand, line: &str) -> Option<NameMatch> {
    NAME_GRAMMARS
        .iter()
        .find(|grammar| grammar.shorthand == shorthand)?
        .try_match(line.trim())
}

/// Apply the cascade to the builder's name line, rewriting the name on a match.
/// A weight captured earlier survives when the matching grammar has none.
pub fn apply(builder: &mut ExerciseBuilder) -> Option<Shorthand> {
    let found = match_name(&builder.name)?;
    trace!(shorthand = ?found.shorthand, name = %found.name, "name shorthand matched");

    builder.name = found.name;
    builder.sets = found.sets;
    builder.reps = found.reps;
    if found.weight.is_some() {
        builder.weight = found.weight;
    }
    if let Some(duration) = found.duration {
        builder.is_time_based = true;
        builder.duration = Some(duration);
    }

    Some(found.shorthand)
}
