//! Day-block task commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use lifegrid_core::calendar;
use lifegrid_core::grid::block_time_range;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Set the task for a ten-minute block
    Set {
        /// Block index, 0-143
        block: usize,
        /// Task text
        text: String,
    },
    /// List all day tasks as JSON
    List,
    /// Flip a task's completion flag
    Toggle {
        /// Block index, 0-143
        block: usize,
    },
    /// Delete a task
    Delete {
        /// Block index, 0-143
        block: usize,
    },
    /// Print a Google Calendar link for a task
    Link {
        /// Block index, 0-143
        block: usize,
        /// Event date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, _config) = super::load_app()?;

    match action {
        TaskAction::Set { block, text } => {
            app.save_day_task(block, &text)?;
            println!("Task set for block {block} ({}).", block_time_range(block));
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(app.goals.day_tasks())?);
        }
        TaskAction::Toggle { block } => {
            if app.goals.day_task(block).is_none() {
                println!("No task at block {block}.");
            } else {
                app.toggle_day_task(block)?;
                let done = app
                    .goals
                    .day_task(block)
                    .map(|t| t.is_completed)
                    .unwrap_or(false);
                println!(
                    "Task at block {block}: {}",
                    if done { "completed" } else { "pending" }
                );
            }
        }
        TaskAction::Delete { block } => {
            app.delete_day_task(block)?;
            println!("Task deleted: block {block}");
        }
        TaskAction::Link { block, date, open } => {
            let task = app
                .goals
                .day_task(block)
                .ok_or(format!("no task at block {block}"))?
                .clone();
            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
                None => Local::now().date_naive(),
            };
            let link = calendar::day_task_link(&task.text, date, block);
            println!("{link}");
            if open {
                open::that(&link)?;
            }
        }
    }
    Ok(())
}
