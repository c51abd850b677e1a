//! User identity and onboarding persistence.
//!
//! Login is a mock: a profile is whatever the user typed, stored next to
//! the birth date and status in the key-value store. Absent or unreadable
//! values are treated as "no data", never as an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::database::Database;
use super::{KEY_DOB, KEY_STATUS, KEY_USER};
use crate::error::{CoreError, StoreError};

/// Identity record, opaque to the grid logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Declared life situation; feeds prompt templating and the stage ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Career,
    Studying,
    Searching,
}

impl UserStatus {
    /// Stored/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Career => "CAREER",
            UserStatus::Studying => "STUDYING",
            UserStatus::Searching => "SEARCHING",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CAREER" => Some(UserStatus::Career),
            "STUDYING" => Some(UserStatus::Studying),
            "SEARCHING" => Some(UserStatus::Searching),
            _ => None,
        }
    }

    /// First-person description used in oracle prompts.
    pub fn describe(&self) -> &'static str {
        match self {
            UserStatus::Career => "working in my career",
            UserStatus::Studying => "currently a student",
            UserStatus::Searching => "currently figuring things out/searching",
        }
    }
}

pub fn load_profile(db: &Database) -> Option<UserProfile> {
    let json = db.kv_get(KEY_USER).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(profile) => Some(profile),
        Err(e) => {
            eprintln!("Warning: corrupted profile record ignored: {e}");
            None
        }
    }
}

pub fn save_profile(db: &Database, profile: &UserProfile) -> Result<(), CoreError> {
    let json = serde_json::to_string(profile)?;
    db.kv_set(KEY_USER, &json).map_err(StoreError::from)?;
    Ok(())
}

pub fn load_birth_date(db: &Database) -> Option<NaiveDate> {
    let raw = db.kv_get(KEY_DOB).ok().flatten()?;
    match raw.parse() {
        Ok(date) => Some(date),
        Err(_) => {
            eprintln!("Warning: unparseable birth date '{raw}' ignored");
            None
        }
    }
}

pub fn save_birth_date(db: &Database, date: NaiveDate) -> Result<(), CoreError> {
    db.kv_set(KEY_DOB, &date.format("%Y-%m-%d").to_string())
        .map_err(StoreError::from)?;
    Ok(())
}

pub fn load_status(db: &Database) -> Option<UserStatus> {
    let raw = db.kv_get(KEY_STATUS).ok().flatten()?;
    UserStatus::parse(&raw)
}

pub fn save_status(db: &Database, status: UserStatus) -> Result<(), CoreError> {
    db.kv_set(KEY_STATUS, status.as_str())
        .map_err(StoreError::from)?;
    Ok(())
}
