//! Profile and session commands.

use chrono::NaiveDate;
use clap::Subcommand;
use lifegrid_core::store::{UserProfile, UserStatus};
use lifegrid_core::AppView;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Sign in with a name and email
    Login {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Avatar image URL
        #[arg(long)]
        avatar_url: Option<String>,
    },
    /// Record the birth date and life situation
    Onboard {
        /// Birth date, YYYY-MM-DD
        dob: String,
        /// Life situation: CAREER, STUDYING or SEARCHING
        #[arg(long, default_value = "CAREER")]
        status: String,
    },
    /// Print the stored profile
    Show,
    /// Sign out and wipe all stored data
    Logout,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, _config) = super::load_app()?;

    match action {
        ProfileAction::Login {
            name,
            email,
            avatar_url,
        } => {
            app.login(UserProfile {
                name,
                email,
                avatar_url,
            })?;
            if app.view == AppView::Onboarding {
                println!("Logged in. Next: lifegrid profile onboard <YYYY-MM-DD>");
            } else {
                println!("Logged in.");
            }
        }
        ProfileAction::Onboard { dob, status } => {
            let date = NaiveDate::parse_from_str(&dob, "%Y-%m-%d")?;
            let status = UserStatus::parse(&status).ok_or(format!(
                "unknown status: {status} (expected CAREER, STUDYING or SEARCHING)"
            ))?;
            app.complete_onboarding(date, status)?;
            println!("Onboarding complete.");
        }
        ProfileAction::Show => match &app.profile {
            Some(profile) => {
                println!("{}", serde_json::to_string_pretty(profile)?);
                if let Some(dob) = app.birth_date {
                    println!("Born: {dob}  Status: {}", app.status.as_str());
                }
            }
            None => println!("No profile stored."),
        },
        ProfileAction::Logout => {
            app.logout()?;
            println!("Logged out; all data cleared.");
        }
    }
    Ok(())
}
