//! liftnote - Workout notes to structured training logs
//!
//! Parses hand-written or photographed workout plans into exercises,
//! expands them into sets and keeps a local history.

pub mod db;
pub mod parser;
pub mod quotes;
pub mod samples;
pub mod workout;

pub use db::Database;
pub use parser::{ParsedExercise, parse_workout_text};
pub use workout::{Exercise, SetEntry, Workout};
