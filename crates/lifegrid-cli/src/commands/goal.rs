//! Weekly goal commands.

use clap::Subcommand;
use lifegrid_core::calendar;
use lifegrid_core::grid::{age_at_week, week_date_range};
use lifegrid_core::store::goals::parse_goal_key;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Set the goal for a week cell
    Set {
        /// Year row, 0-89
        year: u32,
        /// Week in year, 1-52
        week: u32,
        /// Goal text, at most 60 characters
        text: String,
    },
    /// List all goals as JSON
    List,
    /// Flip a goal's completion flag
    Toggle {
        /// Goal key, "{year}-{week}"
        key: String,
    },
    /// Delete a goal
    Delete {
        /// Goal key, "{year}-{week}"
        key: String,
    },
    /// Print a Google Calendar link for a goal
    Link {
        /// Goal key, "{year}-{week}"
        key: String,
        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, _config) = super::load_app()?;

    match action {
        GoalAction::Set { year, week, text } => {
            app.save_goal(year, week, &text)?;
            let age = age_at_week(year, week);
            println!("Goal set for week {year}-{week} (age {age:.1}).");
        }
        GoalAction::List => {
            println!("{}", serde_json::to_string_pretty(app.goals.goals())?);
        }
        GoalAction::Toggle { key } => {
            if app.goals.goal(&key).is_none() {
                println!("No goal at {key}.");
            } else {
                app.toggle_goal(&key)?;
                let done = app.goals.goal(&key).map(|g| g.is_completed).unwrap_or(false);
                println!("Goal {key}: {}", if done { "completed" } else { "pending" });
            }
        }
        GoalAction::Delete { key } => {
            app.delete_goal(&key)?;
            println!("Goal deleted: {key}");
        }
        GoalAction::Link { key, open } => {
            let (year, week) =
                parse_goal_key(&key).ok_or(format!("invalid goal key: {key}"))?;
            let goal = app
                .goals
                .goal(&key)
                .ok_or(format!("no goal at {key}"))?
                .clone();
            let birth = super::require_birth_date(&app)?;
            let (start, end) = week_date_range(birth, year, week);
            let link = calendar::week_goal_link(&goal.text, start, end);
            println!("{link}");
            if open {
                open::that(&link)?;
            }
        }
    }
    Ok(())
}
