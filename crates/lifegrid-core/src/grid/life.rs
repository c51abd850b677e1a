//! Life-grid arithmetic.
//!
//! A life is modeled as 90 years of 52 weeks each: 4680 cells. Week cells
//! are addressed either by `(year, week)` with a 1-based week-in-year, or
//! by an absolute 0-based index across the whole span. Everything here is
//! a pure function of `(birth, now)`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{TOTAL_WEEKS, WEEKS_PER_YEAR};

const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;
const DAYS_PER_YEAR: f64 = 365.25;

/// Classification of a week cell relative to the present moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekClass {
    Lived,
    Current,
    Future,
}

/// Number of weeks lived so far: `ceil((now - birth) / 1 week)`.
///
/// Clamped to zero when `now` precedes the birth date -- a clock that has
/// drifted before birth reports no lived weeks, never a negative count.
pub fn lived_weeks(birth: NaiveDate, now: NaiveDateTime) -> u32 {
    let elapsed = (now - birth.and_hms_opt(0, 0, 0).expect("midnight is valid")).num_seconds();
    if elapsed <= 0 {
        return 0;
    }
    (elapsed as u64).div_ceil(SECONDS_PER_WEEK as u64) as u32
}

/// Absolute 0-based week index for a `(year, week)` pair with a 1-based
/// week-in-year. Callers validate coordinates before indexing.
pub fn absolute_week_index(year: u32, week: u32) -> u32 {
    debug_assert!(
        (1..=WEEKS_PER_YEAR).contains(&week),
        "week-in-year is 1-based"
    );
    year * WEEKS_PER_YEAR + (week - 1)
}

/// Classify an absolute week index against a lived-week count.
pub fn classify_week(absolute: u32, lived: u32) -> WeekClass {
    if absolute < lived {
        WeekClass::Lived
    } else if absolute == lived {
        WeekClass::Current
    } else {
        WeekClass::Future
    }
}

/// Percentage of the modeled 90-year lifespan already elapsed, in `[0, 100]`.
pub fn life_percentage(birth: NaiveDate, now: NaiveDateTime) -> f64 {
    let total_secs = 90.0 * DAYS_PER_YEAR * 86_400.0;
    let elapsed =
        (now - birth.and_hms_opt(0, 0, 0).expect("midnight is valid")).num_seconds() as f64;
    (elapsed / total_secs * 100.0).clamp(0.0, 100.0)
}

/// Years left of the modeled lifespan, clamped to zero.
pub fn years_remaining(birth: NaiveDate, now: NaiveDateTime) -> f64 {
    let elapsed_days =
        (now - birth.and_hms_opt(0, 0, 0).expect("midnight is valid")).num_seconds() as f64
            / 86_400.0;
    (90.0 - elapsed_days / DAYS_PER_YEAR).max(0.0)
}

/// Projected age at a given `(year, week)` cell, in years.
///
/// Rendered to one decimal place by callers.
pub fn age_at_week(year: u32, week: u32) -> f64 {
    (year * WEEKS_PER_YEAR + week) as f64 / WEEKS_PER_YEAR as f64
}

/// Calendar date range covered by a `(year, week)` cell, relative to the
/// birth date. Start is inclusive; end is the sixth day after the start.
pub fn week_date_range(birth: NaiveDate, year: u32, week: u32) -> (NaiveDate, NaiveDate) {
    let offset = absolute_week_index(year, week) as i64;
    let start = birth + Duration::weeks(offset);
    (start, start + Duration::days(6))
}

/// Percentage of the current calendar week already elapsed, with Sunday as
/// day zero. Hour resolution, rounded.
pub fn week_decay_pct(now: NaiveDateTime) -> u32 {
    let hours_gone = now.weekday().num_days_from_sunday() * 24 + now.hour();
    ((hours_gone as f64 / 168.0) * 100.0).round() as u32
}

/// True when the whole grid has been lived through.
pub fn grid_exhausted(lived: u32) -> bool {
    lived >= TOTAL_WEEKS
}
