//! Sample inputs printed by `liftnote examples`

pub struct Sample {
    pub title: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "Chest (block)",
        text: "Chest Workouts
---
Flat Bench Press (Barbell or Dumbbell)
Focus: Overall chest mass
Sets: 3 (12 – 12 – 10 reps)
Rest: 90 sec
---
Incline Dumbbell Press
Focus: Upper chest
Sets: 3 (12 – 12 – 10 reps)
Rest: 60–90 sec",
    },
    Sample {
        title: "Triceps (block)",
        text: "Triceps Workouts
---
Cable Rope Pushdown
Weight suggestion: 25–35–40kg
Sets: 3 (12 – 12 – 10 reps)
Rest: 60–90 sec
---
Overhead Dumbbell Extension
Weight suggestion: 12.5 – 15 – 20kg
Sets: 3 (12 – 12 – 10 reps)
Rest: 60–90 sec",
    },
    Sample {
        title: "Core (block)",
        text: "Core Workouts
---
Plank Hold
Sets: 2 x 45 sec
Rest: 60 sec between holds
---
Push-Ups (Bodyweight Burnout)
Max reps x 2 sets
Rest: 60 sec",
    },
    Sample {
        title: "Simple format",
        text: "Simple Format Examples
---
Bench press 3x10 60kg
Squats 3 sets of 12 reps at 100kg
Deadlift 60kg 3x8
Pull-ups 3x10
Dumbbell rows 15kg 3x12
Plank 3x45sec
Push-ups 3x30sec",
    },
];

/// All samples as one printable block
pub fn format_samples() -> String {
    SAMPLES
        .iter()
        .map(|s| format!("# {}\n{}\n", s.title, s.text))
        .collect::<Vec<_>>()
        .join("\n")
}
