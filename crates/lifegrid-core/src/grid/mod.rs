//! Time-grid index model.
//!
//! Pure, deterministic conversion between (birth date, "now") and grid
//! cell classification, for both the 90-year-by-52-week life grid and the
//! 144-block day grid. None of these functions hold state -- the caller
//! supplies the clock, so they are safe to re-evaluate on every tick and
//! trivial to test.

pub mod day;
pub mod life;
pub mod stages;

pub use day::{block_index, block_time_range, day_percentage, seconds_until_midnight};
pub use life::{
    absolute_week_index, age_at_week, classify_week, grid_exhausted, life_percentage, lived_weeks,
    week_date_range, week_decay_pct, years_remaining, WeekClass,
};
pub use stages::{stage_for, stages_for, LifeStage};

/// Modeled lifespan in years.
pub const TOTAL_YEARS: u32 = 90;
/// Weeks rendered per year row.
pub const WEEKS_PER_YEAR: u32 = 52;
/// Total cells in the life grid.
pub const TOTAL_WEEKS: u32 = TOTAL_YEARS * WEEKS_PER_YEAR;
/// Ten-minute blocks in a day.
pub const BLOCKS_PER_DAY: usize = 144;
/// Minutes per day block.
pub const MINUTES_PER_BLOCK: u32 = 10;
