//! AI oracle client.
//!
//! A thin request/response wrapper over a hosted generative-AI text API.
//! Each feature builds a prompt from typed inputs, declares a structured
//! JSON output schema, and parses the result into a typed record. On any
//! transport or parse failure the feature returns its fixed fallback
//! record and logs the error -- availability over correctness, so the UI
//! always has something to show. No retries, no timeouts, no streaming.

pub mod chat;
pub mod prompts;
pub mod types;

pub use chat::{ChatRole, ChatTurn, FutureSelfChat};
pub use types::{
    AiAnalysisResult, AuditResult, LifeOracleResponse, ObituaryResult, Rival, RivalsResult,
    SimulationResult, StressLevel, Tone,
};

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::OracleError;
use crate::store::config::OracleConfig;
use crate::store::UserStatus;

/// Identifier for one in-flight oracle request.
///
/// The app records the ID it is waiting on and ignores any resolution
/// whose ID no longer matches, so a slow response cannot clobber state
/// after the user has navigated away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Synchronous facade over the generative-AI REST API.
pub struct OracleClient {
    http: Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
    api_key: String,
    model: String,
    pro_model: String,
    user_context: String,
}

impl OracleClient {
    /// Build a client from config. The LIFEGRID_API_KEY environment
    /// variable takes precedence over the configured key.
    pub fn new(cfg: &OracleConfig, user_name: &str) -> Result<Self, OracleError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| OracleError::Setup(e.to_string()))?;
        let api_key = std::env::var("LIFEGRID_API_KEY")
            .ok()
            .or_else(|| cfg.api_key.clone())
            .unwrap_or_default();
        Ok(Self {
            http: Client::new(),
            runtime,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: cfg.model.clone(),
            pro_model: cfg.pro_model.clone(),
            user_context: prompts::user_context(user_name),
        })
    }

    pub fn user_context(&self) -> &str {
        &self.user_context
    }

    // ── Features ─────────────────────────────────────────────────────

    /// Estimate the life cost of a daily habit.
    pub fn analyze_habit_impact(
        &self,
        activity: &str,
        hours_per_day: f64,
        years_remaining: f64,
        status: UserStatus,
        user_name: &str,
    ) -> AiAnalysisResult {
        let prompt = prompts::habit_impact(
            &self.user_context,
            activity,
            hours_per_day,
            years_remaining,
            status,
            user_name,
        );
        match self.generate_typed(&self.model, &prompt, prompts::habit_impact_schema()) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Warning: habit analysis failed, using fallback: {e}");
                AiAnalysisResult::fallback(hours_per_day, years_remaining)
            }
        }
    }

    /// Ask the life oracle a free-form question.
    pub fn ask_life_oracle(
        &self,
        query: &str,
        situation: &str,
        user_name: &str,
    ) -> LifeOracleResponse {
        let prompt = prompts::life_oracle(&self.user_context, query, situation, user_name);
        match self.generate_typed(&self.model, &prompt, prompts::life_oracle_schema()) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Warning: oracle query failed, using fallback: {e}");
                LifeOracleResponse::fallback()
            }
        }
    }

    /// Simulate an alternate timeline for a "what if" scenario.
    pub fn run_simulation(&self, scenario: &str, years_remaining: f64) -> SimulationResult {
        let current_age = 90.0 - years_remaining;
        let prompt = prompts::simulation(&self.user_context, scenario, current_age);
        match self.generate_typed(&self.pro_model, &prompt, prompts::simulation_schema()) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Warning: simulation failed, using fallback: {e}");
                SimulationResult::fallback()
            }
        }
    }

    /// Audit a to-do list against the time left.
    pub fn audit_tasks(&self, tasks: &str, years_remaining: f64) -> AuditResult {
        let prompt = prompts::audit(&self.user_context, tasks, years_remaining);
        match self.generate_typed(&self.pro_model, &prompt, prompts::audit_schema()) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Warning: task audit failed, using fallback: {e}");
                AuditResult::fallback()
            }
        }
    }

    /// Find three figures who had already done more at the user's age.
    pub fn find_rivals(&self, current_age: f64) -> RivalsResult {
        let prompt = prompts::rivals(&self.user_context, current_age);
        match self.generate_typed(&self.pro_model, &prompt, prompts::rivals_schema()) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Warning: rivals lookup failed, using fallback: {e}");
                RivalsResult::fallback()
            }
        }
    }

    /// Generate the current-vs-potential obituary pair.
    pub fn generate_obituary(
        &self,
        name: &str,
        status: UserStatus,
        years_remaining: f64,
    ) -> ObituaryResult {
        let prompt = prompts::obituary(&self.user_context, name, status, years_remaining);
        match self.generate_typed(&self.pro_model, &prompt, prompts::obituary_schema()) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Warning: obituary generation failed, using fallback: {e}");
                ObituaryResult::fallback(name)
            }
        }
    }

    // ── Transport ────────────────────────────────────────────────────

    fn generate_typed<T: for<'de> serde::Deserialize<'de>>(
        &self,
        model: &str,
        prompt: &str,
        schema: Value,
    ) -> Result<T, OracleError> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });
        let text = self.request(model, &body)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Free-text generation with an optional system instruction and a
    /// caller-built contents array (used by the future-self chat).
    pub(crate) fn generate_text(
        &self,
        model: &str,
        system_instruction: Option<&str>,
        contents: Value,
    ) -> Result<String, OracleError> {
        let mut body = json!({ "contents": contents });
        if let Some(system) = system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }
        self.request(model, &body)
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    fn request(&self, model: &str, body: &Value) -> Result<String, OracleError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let resp: Value = self.runtime.block_on(async {
            self.http
                .post(&url)
                .json(body)
                .send()
                .await?
                .json()
                .await
        })?;

        if let Some(err) = resp.get("error") {
            return Err(OracleError::Service(err.to_string()));
        }

        resp["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or(OracleError::EmptyResponse)
    }
}
