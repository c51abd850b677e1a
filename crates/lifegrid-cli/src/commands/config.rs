//! Configuration commands.

use clap::Subcommand;
use lifegrid_core::store::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value by dot-separated key
    Get {
        /// e.g. "ui.fact_interval_secs" or "oracle.model"
        key: String,
    },
    /// Set a config value by dot-separated key
    Set { key: String, value: String },
    /// Print the full configuration as TOML
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();

    match action {
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown config key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let json = serde_json::to_value(&config)?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
