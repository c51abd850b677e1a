//! Grid rendering commands.
//!
//! Cell legend: `#` lived, `@` the current cell, `.` future, `O` a cell
//! with a pending goal/task, `X` a completed one.

use chrono::Local;
use clap::Subcommand;
use lifegrid_core::grid::{self, stages_for, WeekClass, TOTAL_WEEKS, TOTAL_YEARS, WEEKS_PER_YEAR};
use lifegrid_core::{App, GridMode};
use serde::Serialize;

#[derive(Subcommand)]
pub enum GridAction {
    /// Render the 90-year week grid
    Life {
        /// Annotate rows with the life-stage ladder
        #[arg(long)]
        stages: bool,
    },
    /// Render today's 144-block grid
    Day,
    /// Print a JSON summary of both grids
    Status,
}

/// Machine-readable `grid status` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridStatus {
    lived_weeks: u32,
    total_weeks: u32,
    life_percentage: f64,
    years_remaining: f64,
    week_decay_pct: u32,
    current_block: usize,
    block_time_range: String,
    seconds_until_midnight: u32,
    fact: &'static str,
}

pub fn run(action: GridAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, config) = super::load_app()?;
    let now = Local::now().naive_local();

    match action {
        GridAction::Life { stages } => {
            super::require_birth_date(&app)?;
            app.set_mode(GridMode::Life);
            render_life(&app, now, stages || config.ui.show_stages);
        }
        GridAction::Day => {
            app.set_mode(GridMode::Day);
            render_day(&app, now);
        }
        GridAction::Status => {
            let block = grid::block_index(now.time());
            let summary = GridStatus {
                lived_weeks: app.lived_weeks(now),
                total_weeks: TOTAL_WEEKS,
                life_percentage: app.life_percentage(now),
                years_remaining: app.years_remaining(now),
                week_decay_pct: grid::week_decay_pct(now),
                current_block: block,
                block_time_range: grid::block_time_range(block),
                seconds_until_midnight: grid::seconds_until_midnight(now.time()),
                fact: app.fact_ticker.current(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn render_life(app: &App, now: chrono::NaiveDateTime, stages: bool) {
    let lived = app.lived_weeks(now);
    let stage_labels = stages_for(app.status);

    println!(
        "{lived}/{TOTAL_WEEKS} weeks lived ({:.1}%), {:.1} years remaining",
        app.life_percentage(now),
        app.years_remaining(now)
    );
    if grid::grid_exhausted(lived) {
        println!("The grid is full.");
    }
    for year in 0..TOTAL_YEARS {
        let mut row = String::with_capacity(WEEKS_PER_YEAR as usize);
        for week in 1..=WEEKS_PER_YEAR {
            let key = format!("{year}-{week}");
            let cell = match app.goals.goal(&key) {
                Some(goal) if goal.is_completed => 'X',
                Some(_) => 'O',
                None => {
                    match grid::classify_week(grid::absolute_week_index(year, week), lived) {
                        WeekClass::Lived => '#',
                        WeekClass::Current => '@',
                        WeekClass::Future => '.',
                    }
                }
            };
            row.push(cell);
        }
        let label = if year % 5 == 0 {
            format!("{year:>3}")
        } else {
            "   ".to_string()
        };
        let stage = if stages {
            stage_labels
                .iter()
                .find(|s| s.start_age == year)
                .map(|s| format!("  <- {}", s.label))
                .unwrap_or_default()
        } else {
            String::new()
        };
        println!("{label} {row}{stage}");
    }
}

fn render_day(app: &App, now: chrono::NaiveDateTime) {
    let current = grid::block_index(now.time());

    println!(
        "Day {:.1}% gone, {} until midnight",
        grid::day_percentage(now.time()),
        fmt_hms(grid::seconds_until_midnight(now.time()))
    );
    // 12 rows of 12 blocks, two hours per row.
    for row in 0..12 {
        let mut line = String::new();
        for col in 0..12 {
            let block = row * 12 + col;
            let cell = match app.goals.day_task(block) {
                Some(task) if task.is_completed => 'X',
                Some(_) => 'O',
                None if block < current => '#',
                None if block == current => '@',
                None => '.',
            };
            line.push(cell);
        }
        let (start, _) = grid::block_time_range(row * 12)
            .split_once(" - ")
            .map(|(s, e)| (s.to_string(), e.to_string()))
            .unwrap_or_default();
        println!("{start} {line}");
    }
}

fn fmt_hms(secs: u32) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
