//! Google Calendar export links.
//!
//! Deep links to the calendar's render endpoint with URL-encoded
//! title/details/date-range parameters. Week goals become all-day events
//! in the compact `YYYYMMDD` format (exclusive end date); day-block tasks
//! become timed `YYYYMMDDTHHMMSS` events spanning one ten-minute block.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::grid::MINUTES_PER_BLOCK;

const RENDER_URL: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Export link for a weekly goal spanning `start..=end` as an all-day event.
pub fn week_goal_link(text: &str, start: NaiveDate, end: NaiveDate) -> String {
    let details = "Goal from Lifegrid\n\nStatus: Pending\n\nIMPORTANT: Use the 'Add Notification' \
                   feature in Google Calendar to set a reminder for this week!";
    // All-day ranges use an exclusive end date.
    let end_exclusive = end + Duration::days(1);
    format!(
        "{RENDER_URL}&text={}&details={}&dates={}/{}",
        urlencoding::encode(&format!("Goal: {text}")),
        urlencoding::encode(details),
        start.format("%Y%m%d"),
        end_exclusive.format("%Y%m%d"),
    )
}

/// Export link for a day-block task on the given date.
pub fn day_task_link(text: &str, date: NaiveDate, block: usize) -> String {
    let start = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is valid")
        + Duration::minutes(block as i64 * MINUTES_PER_BLOCK as i64);
    let end = start + Duration::minutes(MINUTES_PER_BLOCK as i64);
    format!(
        "{RENDER_URL}&text={}&dates={}/{}&details={}&sf=true&output=xml",
        urlencoding::encode(text),
        fmt_compact(start),
        fmt_compact(end),
        urlencoding::encode("Task from Lifegrid Day Grid"),
    )
}

fn fmt_compact(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}
