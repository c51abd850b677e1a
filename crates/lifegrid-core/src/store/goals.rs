//! Goal/Task store.
//!
//! CRUD over two keyed mappings: weekly goals keyed by `"{year}-{week}"`
//! and day tasks keyed by the block index as a string. Every mutation
//! updates the in-memory mapping first and then overwrites the persisted
//! value with the full serialized mapping, so no partial-write state is
//! observable to subsequent reads within the same process.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::database::Database;
use super::{KEY_DAY_TASKS, KEY_GOALS};
use crate::error::{CoreError, ValidationError};
use crate::grid::{block_time_range, BLOCKS_PER_DAY, TOTAL_YEARS, WEEKS_PER_YEAR};

/// Maximum length of a weekly goal's text.
pub const GOAL_TEXT_MAX: usize = 60;

/// A goal attached to one week cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    /// `"{year}-{week}"`
    pub id: String,
    pub text: String,
    pub is_completed: bool,
}

/// A task attached to one ten-minute day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTask {
    /// Block index rendered as a string.
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    /// `"HH:MM - HH:MM"`
    pub time_range: String,
}

/// In-memory goal/task mappings backed by the key-value store.
#[derive(Debug, Default)]
pub struct GoalBook {
    goals: HashMap<String, WeeklyGoal>,
    day_tasks: HashMap<String, DayTask>,
}

impl GoalBook {
    /// Load both mappings from the store.
    ///
    /// A corrupted or missing value yields an empty mapping rather than a
    /// failed initialization; entries whose keys do not name a valid grid
    /// coordinate are dropped with a warning.
    pub fn load(db: &Database) -> Self {
        let goals = load_map::<WeeklyGoal>(db, KEY_GOALS)
            .into_iter()
            .filter(|(key, _)| {
                let ok = parse_goal_key(key).is_some();
                if !ok {
                    eprintln!("Warning: dropping goal with invalid key '{key}'");
                }
                ok
            })
            .collect();
        let day_tasks = load_map::<DayTask>(db, KEY_DAY_TASKS)
            .into_iter()
            .filter(|(key, _)| {
                let ok = parse_block_key(key).is_some();
                if !ok {
                    eprintln!("Warning: dropping day task with invalid key '{key}'");
                }
                ok
            })
            .collect();
        Self { goals, day_tasks }
    }

    // ── Weekly goals ─────────────────────────────────────────────────

    pub fn goals(&self) -> &HashMap<String, WeeklyGoal> {
        &self.goals
    }

    pub fn goal(&self, key: &str) -> Option<&WeeklyGoal> {
        self.goals.get(key)
    }

    /// Upsert a goal at `(year, week)`. Text must be non-empty after
    /// trimming and at most [`GOAL_TEXT_MAX`] characters.
    pub fn save_goal(
        &mut self,
        db: &Database,
        year: u32,
        week: u32,
        text: &str,
    ) -> Result<WeeklyGoal, CoreError> {
        if year >= TOTAL_YEARS || week < 1 || week > WEEKS_PER_YEAR {
            return Err(ValidationError::InvalidValue {
                field: "week".into(),
                message: format!("({year}, {week}) is outside the 90x52 grid"),
            }
            .into());
        }
        if text.trim().is_empty() {
            return Err(ValidationError::Empty("goal text".into()).into());
        }
        if text.chars().count() > GOAL_TEXT_MAX {
            return Err(ValidationError::TooLong {
                field: "goal text".into(),
                max: GOAL_TEXT_MAX,
                len: text.chars().count(),
            }
            .into());
        }

        let key = format!("{year}-{week}");
        let goal = WeeklyGoal {
            id: key.clone(),
            text: text.to_string(),
            is_completed: false,
        };
        self.goals.insert(key, goal.clone());
        self.persist_goals(db)?;
        Ok(goal)
    }

    /// Flip a goal's completion flag. Absent keys are a no-op.
    pub fn toggle_goal(&mut self, db: &Database, key: &str) -> Result<(), CoreError> {
        if let Some(goal) = self.goals.get_mut(key) {
            goal.is_completed = !goal.is_completed;
            self.persist_goals(db)?;
        }
        Ok(())
    }

    /// Remove a goal. Absent keys are a no-op.
    pub fn delete_goal(&mut self, db: &Database, key: &str) -> Result<(), CoreError> {
        if self.goals.remove(key).is_some() {
            self.persist_goals(db)?;
        }
        Ok(())
    }

    // ── Day tasks ────────────────────────────────────────────────────

    pub fn day_tasks(&self) -> &HashMap<String, DayTask> {
        &self.day_tasks
    }

    pub fn day_task(&self, block: usize) -> Option<&DayTask> {
        self.day_tasks.get(&block.to_string())
    }

    /// Upsert the task for a block. One task per block; a re-save
    /// overwrites, resetting the completion flag.
    pub fn save_day_task(
        &mut self,
        db: &Database,
        block: usize,
        text: &str,
    ) -> Result<DayTask, CoreError> {
        if block >= BLOCKS_PER_DAY {
            return Err(ValidationError::OutOfBounds {
                collection: "day blocks".into(),
                index: block,
                len: BLOCKS_PER_DAY,
            }
            .into());
        }
        if text.trim().is_empty() {
            return Err(ValidationError::Empty("task text".into()).into());
        }

        let task = DayTask {
            id: block.to_string(),
            text: text.to_string(),
            is_completed: false,
            time_range: block_time_range(block),
        };
        self.day_tasks.insert(block.to_string(), task.clone());
        self.persist_day_tasks(db)?;
        Ok(task)
    }

    /// Flip a task's completion flag. Absent blocks are a no-op.
    pub fn toggle_day_task(&mut self, db: &Database, block: usize) -> Result<(), CoreError> {
        if let Some(task) = self.day_tasks.get_mut(&block.to_string()) {
            task.is_completed = !task.is_completed;
            self.persist_day_tasks(db)?;
        }
        Ok(())
    }

    /// Remove a task. Absent blocks are a no-op.
    pub fn delete_day_task(&mut self, db: &Database, block: usize) -> Result<(), CoreError> {
        if self.day_tasks.remove(&block.to_string()).is_some() {
            self.persist_day_tasks(db)?;
        }
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn persist_goals(&self, db: &Database) -> Result<(), CoreError> {
        let json = serde_json::to_string(&self.goals)?;
        db.kv_set(KEY_GOALS, &json)
            .map_err(crate::error::StoreError::from)?;
        Ok(())
    }

    fn persist_day_tasks(&self, db: &Database) -> Result<(), CoreError> {
        let json = serde_json::to_string(&self.day_tasks)?;
        db.kv_set(KEY_DAY_TASKS, &json)
            .map_err(crate::error::StoreError::from)?;
        Ok(())
    }
}

fn load_map<T: for<'de> Deserialize<'de>>(db: &Database, key: &str) -> HashMap<String, T> {
    match db.kv_get(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("Warning: corrupted value for '{key}', starting empty: {e}");
                HashMap::new()
            }
        },
        Ok(None) => HashMap::new(),
        Err(e) => {
            eprintln!("Warning: failed to read '{key}', starting empty: {e}");
            HashMap::new()
        }
    }
}

/// Parse a `"{year}-{week}"` goal key into a valid grid coordinate.
pub fn parse_goal_key(key: &str) -> Option<(u32, u32)> {
    let (year, week) = key.split_once('-')?;
    let year: u32 = year.parse().ok()?;
    let week: u32 = week.parse().ok()?;
    if year < TOTAL_YEARS && (1..=WEEKS_PER_YEAR).contains(&week) {
        Some((year, week))
    } else {
        None
    }
}

/// Parse a block-index key into a valid day-grid coordinate.
pub fn parse_block_key(key: &str) -> Option<usize> {
    let block: usize = key.parse().ok()?;
    (block < BLOCKS_PER_DAY).then_some(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (Database, GoalBook) {
        let db = Database::open_memory().unwrap();
        let book = GoalBook::load(&db);
        (db, book)
    }

    #[test]
    fn save_and_reload_round_trip() {
        let (db, mut book) = store();
        book.save_goal(&db, 30, 12, "Ship the thing").unwrap();

        let reloaded = GoalBook::load(&db);
        let goal = reloaded.goal("30-12").unwrap();
        assert_eq!(goal.text, "Ship the thing");
        assert!(!goal.is_completed);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let (db, mut book) = store();
        book.save_goal(&db, 1, 1, "goal").unwrap();
        book.toggle_goal(&db, "1-1").unwrap();
        assert!(book.goal("1-1").unwrap().is_completed);
        book.toggle_goal(&db, "1-1").unwrap();
        assert!(!book.goal("1-1").unwrap().is_completed);
    }

    #[test]
    fn delete_missing_goal_is_noop() {
        let (db, mut book) = store();
        book.save_goal(&db, 1, 1, "keep me").unwrap();
        book.delete_goal(&db, "2-2").unwrap();
        assert_eq!(book.goals().len(), 1);
    }

    #[test]
    fn rejects_empty_and_oversized_text() {
        let (db, mut book) = store();
        assert!(book.save_goal(&db, 0, 1, "   ").is_err());
        let long = "x".repeat(GOAL_TEXT_MAX + 1);
        assert!(book.save_goal(&db, 0, 1, &long).is_err());
        // Exactly at the limit is fine.
        let max = "x".repeat(GOAL_TEXT_MAX);
        assert!(book.save_goal(&db, 0, 1, &max).is_ok());
    }

    #[test]
    fn rejects_out_of_grid_coordinates() {
        let (db, mut book) = store();
        assert!(book.save_goal(&db, 90, 1, "late").is_err());
        assert!(book.save_goal(&db, 0, 0, "early").is_err());
        assert!(book.save_goal(&db, 0, 53, "late week").is_err());
        assert!(book.save_day_task(&db, 144, "overflow").is_err());
    }

    #[test]
    fn day_task_carries_time_range_and_overwrites() {
        let (db, mut book) = store();
        let task = book.save_day_task(&db, 60, "Deep work").unwrap();
        assert_eq!(task.time_range, "10:00 - 10:10");

        book.toggle_day_task(&db, 60).unwrap();
        assert!(book.day_task(60).unwrap().is_completed);

        // Re-save replaces the record and resets completion.
        book.save_day_task(&db, 60, "Other work").unwrap();
        let task = book.day_task(60).unwrap();
        assert_eq!(task.text, "Other work");
        assert!(!task.is_completed);
    }

    #[test]
    fn corrupted_value_loads_empty() {
        let db = Database::open_memory().unwrap();
        db.kv_set(KEY_GOALS, "{not json").unwrap();
        let book = GoalBook::load(&db);
        assert!(book.goals().is_empty());
    }

    #[test]
    fn invalid_persisted_keys_are_dropped() {
        let db = Database::open_memory().unwrap();
        let json = r#"{
            "30-12": {"id": "30-12", "text": "ok", "isCompleted": false},
            "95-12": {"id": "95-12", "text": "bad year", "isCompleted": false},
            "banana": {"id": "banana", "text": "bad key", "isCompleted": false}
        }"#;
        db.kv_set(KEY_GOALS, json).unwrap();
        let book = GoalBook::load(&db);
        assert_eq!(book.goals().len(), 1);
        assert!(book.goal("30-12").is_some());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let goal = WeeklyGoal {
            id: "0-1".into(),
            text: "t".into(),
            is_completed: false,
        };
        let json = serde_json::to_string(&goal).unwrap();
        assert!(json.contains("isCompleted"));
    }
}
