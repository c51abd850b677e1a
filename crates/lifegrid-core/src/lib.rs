//! # Lifegrid Core Library
//!
//! This library provides the core logic for Lifegrid, a memento-mori life
//! calendar. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary; graphical frontends are thin
//! layers over the same core library.
//!
//! ## Architecture
//!
//! - **Grid Model**: pure functions mapping a birth date and "now" to
//!   lived/current/future cells of a 90-year week grid, and to the 144
//!   ten-minute blocks of a single day
//! - **Store**: SQLite-backed key-value persistence for goals, day tasks,
//!   and the user profile, plus TOML-based configuration
//! - **Oracle**: a thin client for a hosted generative-AI text API with a
//!   static fallback for every feature
//! - **Tickers**: wall-clock-based repeating schedules that the caller
//!   ticks; no internal threads
//!
//! ## Key Components
//!
//! - [`App`]: top-level application state and its transitions
//! - [`GoalBook`]: goal/task CRUD over the key-value store
//! - [`OracleClient`]: request/response wrapper for the AI service
//! - [`Config`]: application configuration management

pub mod app;
pub mod calendar;
pub mod error;
pub mod grid;
pub mod oracle;
pub mod store;
pub mod ticker;

pub use app::{App, AppView, GridMode};
pub use error::{ConfigError, CoreError, OracleError, StoreError, ValidationError};
pub use grid::{WeekClass, BLOCKS_PER_DAY, TOTAL_WEEKS, TOTAL_YEARS, WEEKS_PER_YEAR};
pub use oracle::{FutureSelfChat, OracleClient, RequestId};
pub use store::{Config, Database, DayTask, GoalBook, UserProfile, UserStatus, WeeklyGoal};
pub use ticker::{FactTicker, Ticker};
