//! Database module - SQLite storage for workout history

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::workout::{Exercise, Workout};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str = "SELECT id, date, exercises, completed, notes, created_at FROM workouts";

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database. `":memory:"` gives a throwaway one.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        // exercises holds the JSON array of exercises with their sets
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                exercises TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                notes TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Store a workout, returns its id
    pub fn add_workout(&self, workout: &Workout) -> Result<i64> {
        let exercises = serde_json::to_string(&workout.exercises)?;
        self.conn.execute(
            "INSERT INTO workouts (date, exercises, completed, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                workout.date.format(DATE_FORMAT).to_string(),
                exercises,
                workout.completed,
                workout.notes,
                workout.created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all workouts, newest first
    pub fn get_workouts(&self) -> Result<Vec<Workout>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;

        let workouts = stmt
            .query_map([], row_to_workout)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(workouts)
    }

    pub fn get_workout(&self, id: i64) -> Result<Option<Workout>> {
        let workout = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                row_to_workout,
            )
            .optional()?;
        Ok(workout)
    }

    /// Overwrite exercises, completion and notes. Returns false if the id is unknown.
    pub fn update_workout(&self, workout: &Workout) -> Result<bool> {
        let Some(id) = workout.id else {
            return Ok(false);
        };
        let exercises = serde_json::to_string(&workout.exercises)?;
        let changed = self.conn.execute(
            "UPDATE workouts SET date = ?1, exercises = ?2, completed = ?3, notes = ?4 WHERE id = ?5",
            params![
                workout.date.format(DATE_FORMAT).to_string(),
                exercises,
                workout.completed,
                workout.notes,
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Returns false if the id is unknown
    pub fn delete_workout(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM workouts WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn row_to_workout(row: &Row<'_>) -> rusqlite::Result<Workout> {
    let date_str: String = row.get(1)?;
    let exercises_json: String = row.get(2)?;
    let created_str: String = row.get(5)?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    let exercises: Vec<Exercise> = serde_json::from_str(&exercises_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(Workout {
        id: Some(row.get(0)?),
        date,
        exercises,
        completed: row.get(3)?,
        notes: row.get(4)?,
        created_at: DateTime::parse_from_rfc3339(&created_str)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_workout_text;

    fn memory_db() -> Database {
        Database::open(":memory:").unwrap()
    }

    fn workout_on(day: u32, text: &str) -> Workout {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        Workout::from_parsed(date, &parse_workout_text(text), None)
    }

    #[test]
    fn test_add_and_get() {
        let db = memory_db();
        let mut workout = workout_on(1, "Bench press 3x10 60kg, Plank 2x45sec");
        workout.notes = Some("morning".to_string());

        let id = db.add_workout(&workout).unwrap();
        let stored = db.get_workout(id).unwrap().unwrap();

        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.date, workout.date);
        assert_eq!(stored.exercises, workout.exercises);
        assert_eq!(stored.notes.as_deref(), Some("morning"));
        assert!(!stored.completed);
        assert_eq!(stored.exercises[1].sets[0].duration_secs, Some(45));
    }

    #[test]
    fn test_get_unknown_id() {
        let db = memory_db();
        assert!(db.get_workout(42).unwrap().is_none());
    }

    #[test]
    fn test_workouts_newest_first() {
        let db = memory_db();
        db.add_workout(&workout_on(3, "Squats 5x5")).unwrap();
        db.add_workout(&workout_on(10, "Rows 3x8")).unwrap();
        db.add_workout(&workout_on(7, "Dips 3x12")).unwrap();

        let names: Vec<_> = db
            .get_workouts()
            .unwrap()
            .iter()
            .map(|w| w.exercises[0].name.clone())
            .collect();
        assert_eq!(names, ["Rows", "Dips", "Squats"]);
    }

    #[test]
    fn test_update_completion() {
        let db = memory_db();
        let id = db.add_workout(&workout_on(2, "Squats 3x5")).unwrap();

        let mut workout = db.get_workout(id).unwrap().unwrap();
        workout.mark_completed();
        assert!(db.update_workout(&workout).unwrap());

        let stored = db.get_workout(id).unwrap().unwrap();
        assert!(stored.completed);
        assert!(stored.exercises[0].sets.iter().all(|s| s.completed));
    }

    #[test]
    fn test_update_without_id() {
        let db = memory_db();
        assert!(!db.update_workout(&workout_on(2, "Squats 3x5")).unwrap());
    }

    #[test]
    fn test_delete() {
        let db = memory_db();
        let id = db.add_workout(&workout_on(4, "Lunges 3x12")).unwrap();
        assert!(db.delete_workout(id).unwrap());
        assert!(!db.delete_workout(id).unwrap());
        assert!(db.get_workouts().unwrap().is_empty());
    }
}
