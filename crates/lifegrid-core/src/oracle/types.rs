//! Typed oracle responses and their documented fallbacks.
//!
//! Every record here is immutable once received and replaced wholesale on
//! each new request. The `fallback` constructors are part of the contract:
//! any transport/parse/schema failure yields exactly these values so the
//! UI always has something to show.

use serde::{Deserialize, Serialize};

/// Emotional tone of a habit-impact verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Warning,
    Positive,
}

/// Estimated stress level of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

/// Habit-impact analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResult {
    /// Weeks of remaining life this habit will consume.
    pub weeks_consumed: f64,
    /// Percentage of remaining life, 0-100.
    pub percentage_of_remaining: f64,
    pub impact_description: String,
    pub tone: Tone,
    pub advice: String,
    pub past_impact: String,
    pub stress_level: StressLevel,
    pub burnout_risk: String,
}

impl AiAnalysisResult {
    /// Fallback on any oracle failure. The weeks estimate degrades to the
    /// plain arithmetic the model would otherwise refine.
    pub fn fallback(hours_per_day: f64, years_remaining: f64) -> Self {
        let estimated_weeks = (hours_per_day / 24.0 * 52.0 * years_remaining).round();
        Self {
            weeks_consumed: estimated_weeks,
            percentage_of_remaining: 0.0,
            impact_description: "Calculation unavailable.".into(),
            tone: Tone::Neutral,
            advice: "Balance is key.".into(),
            past_impact: "Unknown.".into(),
            stress_level: StressLevel::Low,
            burnout_risk: "Unable to assess emotional toll at this time.".into(),
        }
    }
}

/// Answer from the life oracle Q&A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeOracleResponse {
    pub answer: String,
    pub philosophical_quote: String,
}

impl LifeOracleResponse {
    pub fn fallback() -> Self {
        Self {
            answer: "The mists of time obscure the answer right now.".into(),
            philosophical_quote: "The only time you have is now.".into(),
        }
    }
}

/// Simulated alternate timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub timeline_description: String,
    pub net_worth_delta: String,
    /// 0-100.
    pub happiness_score: f64,
    pub location: String,
}

impl SimulationResult {
    pub fn fallback() -> Self {
        Self {
            timeline_description: "The simulation failed to converge. The variables were too complex."
                .into(),
            net_worth_delta: "$0".into(),
            happiness_score: 50.0,
            location: "Unknown".into(),
        }
    }
}

/// To-do list audit verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub critical_task: String,
    pub discard_task: String,
    pub reasoning: String,
}

impl AuditResult {
    pub fn fallback() -> Self {
        Self {
            critical_task: "Focus.".into(),
            discard_task: "Distraction.".into(),
            reasoning: "Time is running out.".into(),
        }
    }
}

/// A historical figure and what they had done at the user's age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rival {
    pub name: String,
    pub achievement: String,
}

/// Three age-matched rivals plus a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RivalsResult {
    pub person1: Rival,
    pub person2: Rival,
    pub person3: Rival,
    pub summary: String,
}

impl RivalsResult {
    pub fn fallback() -> Self {
        Self {
            person1: Rival {
                name: "Mark Zuckerberg".into(),
                achievement: "Launched Facebook.".into(),
            },
            person2: Rival {
                name: "Elon Musk".into(),
                achievement: "Sold Zip2.".into(),
            },
            person3: Rival {
                name: "Bill Gates".into(),
                achievement: "Founded Microsoft.".into(),
            },
            summary: "You are statistically behind schedule.".into(),
        }
    }
}

/// Dual obituary: the life as lived so far versus the life still possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObituaryResult {
    pub current_obituary: String,
    pub potential_obituary: String,
    pub gap_analysis: String,
}

impl ObituaryResult {
    pub fn fallback(name: &str) -> Self {
        Self {
            current_obituary: format!(
                "Here lies {name}, a life with potential left on the table."
            ),
            potential_obituary: format!("Here lies {name}, the architect of the future."),
            gap_analysis: "The difference is execution.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_wire_format_is_camel_case() {
        let json = serde_json::to_string(&AiAnalysisResult::fallback(3.0, 40.0)).unwrap();
        assert!(json.contains("weeksConsumed"));
        assert!(json.contains("\"tone\":\"neutral\""));
        assert!(json.contains("\"stressLevel\":\"low\""));
    }

    #[test]
    fn documented_analysis_fallback() {
        let fb = AiAnalysisResult::fallback(3.0, 40.0);
        assert_eq!(fb.weeks_consumed, 260.0);
        assert_eq!(fb.advice, "Balance is key.");
        assert_eq!(fb.tone, Tone::Neutral);
    }

    #[test]
    fn parses_a_model_payload() {
        let json = r#"{
            "weeksConsumed": 120,
            "percentageOfRemaining": 5.5,
            "impactDescription": "A fifth of your evenings, gone.",
            "tone": "warning",
            "advice": "Cap it at one hour.",
            "pastImpact": "Roughly a year so far.",
            "stressLevel": "medium",
            "burnoutRisk": "Slow erosion."
        }"#;
        let parsed: AiAnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tone, Tone::Warning);
        assert_eq!(parsed.stress_level, StressLevel::Medium);
        assert_eq!(parsed.weeks_consumed, 120.0);
    }
}
