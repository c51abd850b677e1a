//! Life-stage ladder for the grid overlay.
//!
//! Stages cover the full 0..91 span: a fixed schooling ladder, one stage
//! that depends on the user's declared status, then retirement. Styling
//! (colors) is a frontend concern and deliberately absent here.

use serde::{Deserialize, Serialize};

use crate::store::UserStatus;

/// A labeled age range, `start_age` inclusive, `end_age` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStage {
    pub label: &'static str,
    pub start_age: u32,
    pub end_age: u32,
}

const fn stage(label: &'static str, start_age: u32, end_age: u32) -> LifeStage {
    LifeStage {
        label,
        start_age,
        end_age,
    }
}

/// Stage ladder for a user status.
pub fn stages_for(status: UserStatus) -> Vec<LifeStage> {
    let adult = match status {
        UserStatus::Studying => stage("Advanced Studies", 22, 30),
        UserStatus::Searching => stage("Figuring it out", 22, 30),
        UserStatus::Career => stage("Career", 22, 65),
    };
    vec![
        stage("Early Years", 0, 5),
        stage("Elementary", 5, 11),
        stage("Middle School", 11, 14),
        stage("High School", 14, 18),
        stage("College", 18, 22),
        adult,
        stage("Retirement", 65, 91),
    ]
}

/// Stage covering a given age, if any.
pub fn stage_for(status: UserStatus, age: u32) -> Option<LifeStage> {
    stages_for(status)
        .into_iter()
        .find(|s| age >= s.start_age && age < s.end_age)
}
