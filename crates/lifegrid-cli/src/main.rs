use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lifegrid", version, about = "Lifegrid CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile and session management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Render the life and day grids
    Grid {
        #[command(subcommand)]
        action: commands::grid::GridAction,
    },
    /// Weekly goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Day-block task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Oracle features
    Ai {
        #[command(subcommand)]
        action: commands::ai::AiAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Grid { action } => commands::grid::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Ai { action } => commands::ai::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
