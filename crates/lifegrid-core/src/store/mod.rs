pub mod config;
pub mod database;
pub mod goals;
pub mod profile;

pub use config::{Config, OracleConfig, UiConfig};
pub use database::Database;
pub use goals::{DayTask, GoalBook, WeeklyGoal, GOAL_TEXT_MAX};
pub use profile::{UserProfile, UserStatus};

use std::path::PathBuf;

/// Storage key for the ISO birth date.
pub const KEY_DOB: &str = "life-calendar-dob";
/// Storage key for the user status enum value.
pub const KEY_STATUS: &str = "life-calendar-status";
/// Storage key for the serialized goals mapping.
pub const KEY_GOALS: &str = "life-calendar-goals";
/// Storage key for the serialized day-tasks mapping.
pub const KEY_DAY_TASKS: &str = "life-calendar-day-tasks";
/// Storage key for the serialized user profile.
pub const KEY_USER: &str = "life-calendar-user";

/// Returns `~/.config/lifegrid[-dev]/` based on LIFEGRID_ENV.
///
/// Set LIFEGRID_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFEGRID_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifegrid-dev")
    } else {
        base_dir.join("lifegrid")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
