//! Top-level application state.
//!
//! One explicit struct owns everything the views need; rendering functions
//! receive it by reference. State transitions mirror the event-driven
//! model: UI event, handler, optional one-shot oracle call, state update.
//! While an oracle request is pending the initiating control is disabled
//! (`request_pending`), and a resolution is only accepted when its request
//! ID still matches, so stale responses cannot clobber state.

use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

use crate::error::{CoreError, ValidationError};
use crate::grid;
use crate::oracle::{AiAnalysisResult, RequestId};
use crate::store::{self, Config, Database, GoalBook, UserProfile, UserStatus};
use crate::ticker::{FactTicker, Ticker};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Login,
    Onboarding,
    Calendar,
}

/// Life grid (macro) or day grid (micro).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridMode {
    #[default]
    Life,
    Day,
}

/// Application state owned by the top-level controller.
pub struct App {
    db: Database,
    pub view: AppView,
    pub mode: GridMode,
    pub profile: Option<UserProfile>,
    pub birth_date: Option<NaiveDate>,
    pub status: UserStatus,
    pub goals: GoalBook,
    pub selected_week: Option<(u32, u32)>,
    pub last_analysis: Option<AiAnalysisResult>,
    pub fact_ticker: FactTicker,
    pub countdown_ticker: Ticker,
    pending_request: Option<RequestId>,
}

impl App {
    /// Restore state from the store: a saved profile with a birth date
    /// resumes straight into the calendar, a profile alone resumes at
    /// onboarding, and anything else starts at login.
    pub fn load(db: Database, config: &Config) -> Self {
        let profile = store::profile::load_profile(&db);
        let birth_date = store::profile::load_birth_date(&db);
        let status = store::profile::load_status(&db).unwrap_or_default();
        let goals = GoalBook::load(&db);

        let view = match (&profile, birth_date) {
            (Some(_), Some(_)) => AppView::Calendar,
            (Some(_), None) => AppView::Onboarding,
            (None, _) => AppView::Login,
        };

        let mut app = Self {
            db,
            view,
            mode: GridMode::default(),
            profile,
            birth_date,
            status,
            goals,
            selected_week: None,
            last_analysis: None,
            fact_ticker: FactTicker::new(Duration::from_secs(config.ui.fact_interval_secs)),
            countdown_ticker: Ticker::new(Duration::from_millis(config.ui.countdown_tick_ms)),
            pending_request: None,
        };
        if app.view == AppView::Calendar {
            app.countdown_ticker.start();
        }
        app
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    // ── Session transitions ──────────────────────────────────────────

    /// Mock login: persist the profile and move on.
    pub fn login(&mut self, profile: UserProfile) -> Result<(), CoreError> {
        store::profile::save_profile(&self.db, &profile)?;
        self.profile = Some(profile);
        self.view = if self.birth_date.is_some() {
            self.countdown_ticker.start();
            AppView::Calendar
        } else {
            AppView::Onboarding
        };
        Ok(())
    }

    pub fn complete_onboarding(
        &mut self,
        birth_date: NaiveDate,
        status: UserStatus,
    ) -> Result<(), CoreError> {
        store::profile::save_birth_date(&self.db, birth_date)?;
        store::profile::save_status(&self.db, status)?;
        self.birth_date = Some(birth_date);
        self.status = status;
        self.view = AppView::Calendar;
        self.countdown_ticker.start();
        Ok(())
    }

    /// Terminate the session: purge the store and reset to login. Tickers
    /// stop and any pending oracle response becomes stale.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        self.db
            .kv_clear()
            .map_err(crate::error::StoreError::from)?;
        self.birth_date = None;
        self.profile = None;
        self.goals = GoalBook::default();
        self.last_analysis = None;
        self.selected_week = None;
        self.pending_request = None;
        self.fact_ticker.stop();
        self.countdown_ticker.stop();
        self.view = AppView::Login;
        Ok(())
    }

    // ── Grid queries (neutral zero state without a birth date) ───────

    pub fn lived_weeks(&self, now: NaiveDateTime) -> u32 {
        self.birth_date
            .map(|b| grid::lived_weeks(b, now))
            .unwrap_or(0)
    }

    pub fn life_percentage(&self, now: NaiveDateTime) -> f64 {
        self.birth_date
            .map(|b| grid::life_percentage(b, now))
            .unwrap_or(0.0)
    }

    pub fn years_remaining(&self, now: NaiveDateTime) -> f64 {
        self.birth_date
            .map(|b| grid::years_remaining(b, now))
            .unwrap_or(0.0)
    }

    // ── Selection and goal/task mutations ────────────────────────────

    pub fn select_week(&mut self, year: u32, week: u32) -> Result<(), CoreError> {
        if year >= grid::TOTAL_YEARS || week < 1 || week > grid::WEEKS_PER_YEAR {
            return Err(ValidationError::InvalidValue {
                field: "week".into(),
                message: format!("({year}, {week}) is outside the 90x52 grid"),
            }
            .into());
        }
        self.selected_week = Some((year, week));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_week = None;
    }

    pub fn set_mode(&mut self, mode: GridMode) {
        self.mode = mode;
    }

    pub fn save_goal(&mut self, year: u32, week: u32, text: &str) -> Result<(), CoreError> {
        self.goals.save_goal(&self.db, year, week, text)?;
        Ok(())
    }

    pub fn toggle_goal(&mut self, key: &str) -> Result<(), CoreError> {
        self.goals.toggle_goal(&self.db, key)
    }

    pub fn delete_goal(&mut self, key: &str) -> Result<(), CoreError> {
        self.goals.delete_goal(&self.db, key)
    }

    pub fn save_day_task(&mut self, block: usize, text: &str) -> Result<(), CoreError> {
        self.goals.save_day_task(&self.db, block, text)?;
        Ok(())
    }

    pub fn toggle_day_task(&mut self, block: usize) -> Result<(), CoreError> {
        self.goals.toggle_day_task(&self.db, block)
    }

    pub fn delete_day_task(&mut self, block: usize) -> Result<(), CoreError> {
        self.goals.delete_day_task(&self.db, block)
    }

    // ── Oracle request bookkeeping ───────────────────────────────────

    /// True while a request is in flight; the initiating control disables
    /// itself on this to prevent duplicate submission.
    pub fn request_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Mark a new in-flight request, invalidating any previous one.
    pub fn begin_request(&mut self) -> RequestId {
        let id = RequestId::new();
        self.pending_request = Some(id);
        id
    }

    /// Accept a resolution only if its ID is still the one we await.
    pub fn accept_response(&mut self, id: RequestId) -> bool {
        if self.pending_request == Some(id) {
            self.pending_request = None;
            true
        } else {
            false
        }
    }

    /// Store an analysis result unless it arrived stale.
    pub fn record_analysis(&mut self, id: RequestId, result: AiAnalysisResult) -> bool {
        if self.accept_response(id) {
            self.last_analysis = Some(result);
            true
        } else {
            false
        }
    }
}
