//! Oracle commands.
//!
//! Every command degrades to its documented fallback payload when the
//! service is unreachable, so these never fail on network errors.

use std::io::{BufRead, Write};

use chrono::Local;
use clap::Subcommand;
use lifegrid_core::{FutureSelfChat, OracleClient};

#[derive(Subcommand)]
pub enum AiAction {
    /// Estimate the life cost of a daily habit
    Habit {
        /// The habit, e.g. "doomscrolling"
        activity: String,
        /// Hours per day spent on it
        hours: f64,
    },
    /// Ask the life oracle a question
    Oracle {
        /// The question
        query: String,
        /// Current situation for context
        #[arg(long, default_value = "")]
        situation: String,
    },
    /// Simulate an alternate timeline
    Simulate {
        /// The "what if" scenario
        scenario: String,
    },
    /// Audit a to-do list against the time left
    Audit {
        /// Newline- or comma-separated tasks (default: stored day tasks)
        tasks: Option<String>,
    },
    /// Find three figures who had done more at your age
    Rivals,
    /// Generate the current-vs-potential obituary pair
    Obituary,
    /// Talk to yourself at a future age
    Chat {
        /// Age of the future self
        #[arg(long, default_value = "90")]
        target_age: f64,
    },
}

pub fn run(action: AiAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, config) = super::load_app()?;
    let name = super::require_name(&app)?;
    super::require_birth_date(&app)?;
    let now = Local::now().naive_local();
    let years_remaining = app.years_remaining(now);
    let client = OracleClient::new(&config.oracle, &name)?;

    match action {
        AiAction::Habit { activity, hours } => {
            let id = app.begin_request();
            let result =
                client.analyze_habit_impact(&activity, hours, years_remaining, app.status, &name);
            app.record_analysis(id, result.clone());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AiAction::Oracle { query, situation } => {
            let result = client.ask_life_oracle(&query, &situation, &name);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AiAction::Simulate { scenario } => {
            let result = client.run_simulation(&scenario, years_remaining);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AiAction::Audit { tasks } => {
            let tasks = match tasks {
                Some(t) => t,
                None => app
                    .goals
                    .day_tasks()
                    .values()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            };
            if tasks.is_empty() {
                return Err("no tasks to audit; pass them as an argument".into());
            }
            let result = client.audit_tasks(&tasks, years_remaining);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AiAction::Rivals => {
            let result = client.find_rivals(90.0 - years_remaining);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AiAction::Obituary => {
            let result = client.generate_obituary(&name, app.status, years_remaining);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        AiAction::Chat { target_age } => {
            chat_loop(&client, &name, target_age, years_remaining)?;
        }
    }
    Ok(())
}

fn chat_loop(
    client: &OracleClient,
    name: &str,
    target_age: f64,
    years_remaining: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut chat = FutureSelfChat::new(target_age);
    println!("You are speaking with yourself at age {target_age}. An empty line ends the session.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            break;
        }
        let reply = chat.send(client, message, name, years_remaining);
        println!("{reply}");
    }
    Ok(())
}
