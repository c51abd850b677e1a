//! Day-grid arithmetic.
//!
//! A day is 144 ten-minute blocks, index 0 at midnight. Labels are
//! rendered as `"HH:MM - HH:MM"`; the final block ends at `24:00`.

use chrono::{NaiveTime, Timelike};

use super::{BLOCKS_PER_DAY, MINUTES_PER_BLOCK};

const SECONDS_PER_DAY: u32 = 86_400;

/// Block index for a time of day: `floor(minutes_since_midnight / 10)`.
pub fn block_index(time: NaiveTime) -> usize {
    let minutes = time.hour() * 60 + time.minute();
    (minutes / MINUTES_PER_BLOCK) as usize
}

/// Start and end minutes-since-midnight for a block.
pub fn block_minutes(index: usize) -> (u32, u32) {
    let start = index as u32 * MINUTES_PER_BLOCK;
    (start, start + MINUTES_PER_BLOCK)
}

/// Zero-padded `"HH:MM - HH:MM"` label for a block.
pub fn block_time_range(index: usize) -> String {
    let (start, end) = block_minutes(index);
    format!("{} - {}", fmt_minutes(start), fmt_minutes(end))
}

fn fmt_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Seconds until local midnight. Midnight itself reports a full day.
pub fn seconds_until_midnight(time: NaiveTime) -> u32 {
    SECONDS_PER_DAY - time.num_seconds_from_midnight()
}

/// Elapsed fraction of the day, in `[0, 100]`.
pub fn day_percentage(time: NaiveTime) -> f64 {
    time.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY as f64 * 100.0
}
