pub mod ai;
pub mod config;
pub mod goal;
pub mod grid;
pub mod profile;
pub mod task;

use chrono::NaiveDate;
use lifegrid_core::store::{Config, Database};
use lifegrid_core::App;

pub(crate) fn load_app() -> Result<(App, Config), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let app = App::load(db, &config);
    Ok((app, config))
}

pub(crate) fn require_birth_date(app: &App) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    app.birth_date
        .ok_or_else(|| "no birth date on record; run `lifegrid profile onboard` first".into())
}

pub(crate) fn require_name(app: &App) -> Result<String, Box<dyn std::error::Error>> {
    app.profile
        .as_ref()
        .map(|p| p.name.clone())
        .ok_or_else(|| "no profile on record; run `lifegrid profile login` first".into())
}
