//! liftnote - Workout notes to structured training logs

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use liftnote::db::Database;
use liftnote::parser::parse_workout_text;
use liftnote::quotes::{format_quote, random_quote};
use liftnote::samples::format_samples;
use liftnote::workout::{Workout, partition_parsed, unresolved_notice};

const DEFAULT_DB_PATH: &str = "liftnote.db";

#[derive(Parser)]
#[command(name = "liftnote")]
#[command(author, version, about = "Turn workout notes into structured training logs")]
struct Cli {
    /// SQLite database with workout history
    #[arg(long, global = true, env = "LIFTNOTE_DB", default_value = DEFAULT_DB_PATH)]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse workout text and print the exercises
    Parse {
        /// Text file (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse workout text and store it as a workout
    Log {
        /// Text file (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Workout date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List workout history
    History {
        /// Number of workouts to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show one workout in full
    Show { id: i64 },

    /// Mark a workout and all its sets completed
    Complete { id: i64 },

    /// Delete a workout
    Delete { id: i64 },

    /// Print sample inputs
    Examples,
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read workout text: {:?}", path)),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read workout text from stdin")?;
            Ok(text)
        }
    }
}

fn load_workout(db: &Database, id: i64) -> Result<Workout> {
    db.get_workout(id)?
        .with_context(|| format!("No workout with id {}", id))
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, json } => {
            let parsed = parse_workout_text(&read_input(file)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                for (i, exercise) in parsed.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, exercise);
                }
            }
        }

        Commands::Log { file, date, notes } => {
            let parsed = parse_workout_text(&read_input(file)?);
            let (valid, unresolved) = partition_parsed(parsed);
            for exercise in &unresolved {
                warn!(name = %exercise.name, "skipping exercise without sets, reps or duration");
            }
            if let Some(notice) = unresolved_notice(&unresolved) {
                eprintln!("{}", notice);
            }
            if valid.is_empty() {
                bail!("No exercise could be parsed from the input");
            }

            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let mut workout = Workout::from_parsed(date, &valid, notes);
            let db = Database::open(&cli.db)?;
            let id = db.add_workout(&workout)?;
            workout.id = Some(id);
            info!(id, exercises = workout.exercises.len(), "workout logged");

            println!("Logged workout {} ({} skipped)", id, unresolved.len());
            println!("{:-<60}", "");
            println!("{}", workout.summary());
            println!();
            println!("{}", format_quote(random_quote()));
        }

        Commands::History { limit } => {
            let db = Database::open(&cli.db)?;
            let workouts = db.get_workouts()?;
            println!("Workout history:");
            println!("{:-<60}", "");
            for w in workouts.iter().take(limit) {
                let names: Vec<_> = w.exercises.iter().map(|e| e.name.as_str()).collect();
                println!(
                    "{:>4} | {} | {} | {} sets | {}",
                    w.id.unwrap_or_default(),
                    w.date.format("%Y-%m-%d"),
                    if w.completed { "done" } else { "open" },
                    w.total_sets(),
                    names.join(", ")
                );
            }
        }

        Commands::Show { id } => {
            let db = Database::open(&cli.db)?;
            let workout = load_workout(&db, id)?;
            println!("{}", workout.summary());
            for exercise in &workout.exercises {
                println!("\n{}", exercise.summary());
            }
        }

        Commands::Complete { id } => {
            let db = Database::open(&cli.db)?;
            let mut workout = load_workout(&db, id)?;
            workout.mark_completed();
            db.update_workout(&workout)?;
            info!(id, "workout completed");
            println!("Workout {} completed", id);
            println!("{}", format_quote(random_quote()));
        }

        Commands::Delete { id } => {
            let db = Database::open(&cli.db)?;
            if !db.delete_workout(id)? {
                bail!("No workout with id {}", id);
            }
            println!("Deleted workout {}", id);
        }

        Commands::Examples => {
            print!("{}", format_samples());
        }
    }

    Ok(())
}
