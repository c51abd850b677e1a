//! Prompt templates and structured-output schemas.
//!
//! Prompt wording is product content: the engineering contract is only
//! that each feature sends one prompt plus one declared JSON schema and
//! parses one JSON object back.

use serde_json::{json, Value};

use crate::store::UserStatus;

/// Fixed context block injected into every prompt. Identity details come
/// from the stored profile at call time.
pub fn user_context(user_name: &str) -> String {
    format!(
        "PROFILE: {user_name}\n\
         The user tracks their remaining lifespan on a 90-year week grid\n\
         and wants direct, concrete guidance on how to spend it."
    )
}

pub fn habit_impact(
    context: &str,
    activity: &str,
    hours_per_day: f64,
    years_remaining: f64,
    status: UserStatus,
    user_name: &str,
) -> String {
    format!(
        "User Context: {context}\n\
         Current Status: I have {years_remaining:.0} years left to live. I am {status}.\n\
         Activity: I spend {hours_per_day} hours per day doing: \"{activity}\".\n\
         \n\
         1. Calculate the total weeks consumed of my remaining awake life.\n\
         2. Analyze if this is productive or wasted considering my background.\n\
         3. Tone: \"warning\" if passive/wasted, \"positive\" if productive, \"neutral\" otherwise.\n\
         4. Provide \"advice\": A short, actionable tip. Address me as {user_name}. Use perfect English grammar.\n\
         5. Provide \"pastImpact\": Estimation of past time spent.\n\
         6. Estimate \"stressLevel\" (low, medium, high).\n\
         7. Provide \"burnoutRisk\": A sentence describing the emotional toll.\n\
         \n\
         Output JSON.",
        status = status.describe(),
    )
}

pub fn habit_impact_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "weeksConsumed": { "type": "NUMBER", "description": "Total weeks this habit will take up in future" },
            "percentageOfRemaining": { "type": "NUMBER", "description": "Percentage of remaining life (0-100)" },
            "impactDescription": { "type": "STRING", "description": "A short, impactful sentence about future impact." },
            "tone": { "type": "STRING", "enum": ["neutral", "warning", "positive"] },
            "advice": { "type": "STRING", "description": "Actionable solution or improvement tip." },
            "pastImpact": { "type": "STRING", "description": "Perspective on past time spent on this." },
            "stressLevel": { "type": "STRING", "enum": ["low", "medium", "high"], "description": "Estimated stress level." },
            "burnoutRisk": { "type": "STRING", "description": "Assessment of emotional toll/burnout." }
        },
        "required": ["weeksConsumed", "percentageOfRemaining", "impactDescription", "tone",
                     "advice", "pastImpact", "stressLevel", "burnoutRisk"]
    })
}

pub fn life_oracle(context: &str, query: &str, situation: &str, user_name: &str) -> String {
    format!(
        "User Context: {context}\n\
         Situation: {situation}\n\
         The user asks: \"{query}\"\n\
         You are a wise Life Oracle.\n\
         1. Provide a direct, philosophical answer to {user_name}.\n\
         2. Provide a philosophical quote.\n\
         Output JSON."
    )
}

pub fn life_oracle_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "answer": { "type": "STRING" },
            "philosophicalQuote": { "type": "STRING" }
        },
        "required": ["answer", "philosophicalQuote"]
    })
}

pub fn simulation(context: &str, scenario: &str, current_age: f64) -> String {
    format!(
        "Context: {context}\n\
         Current Age: {current_age:.1}.\n\
         Scenario: \"What if I had {scenario}?\"\n\
         \n\
         Generate a \"Simulated Reality\" based on this choice.\n\
         1. Describe the alternative timeline vividly. Use perfect English grammar.\n\
         2. Estimate the Net Worth difference.\n\
         3. Happiness Score (0-100).\n\
         4. Current Location in that timeline.\n\
         \n\
         Output JSON."
    )
}

pub fn simulation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "timelineDescription": { "type": "STRING" },
            "netWorthDelta": { "type": "STRING" },
            "happinessScore": { "type": "NUMBER" },
            "location": { "type": "STRING" }
        },
        "required": ["timelineDescription", "netWorthDelta", "happinessScore", "location"]
    })
}

pub fn audit(context: &str, tasks: &str, years_remaining: f64) -> String {
    format!(
        "Context: {context}\n\
         I have {years_remaining:.1} years left.\n\
         Here is my To-Do list: \"{tasks}\"\n\
         Identify the critical task (aligned with my long-term goals) and the waste of time task.\n\
         Output JSON."
    )
}

pub fn audit_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "criticalTask": { "type": "STRING" },
            "discardTask": { "type": "STRING" },
            "reasoning": { "type": "STRING" }
        },
        "required": ["criticalTask", "discardTask", "reasoning"]
    })
}

pub fn rivals(context: &str, current_age: f64) -> String {
    format!(
        "Context: {context}\n\
         I am {current_age:.1} years old.\n\
         Find 3 historical, business, or scientific figures who achieved a MASSIVE, \
         specific milestone at EXACTLY this age.\n\
         Make it hurt my ego.\n\
         Output JSON."
    )
}

pub fn rivals_schema() -> Value {
    let person = json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "achievement": { "type": "STRING" }
        }
    });
    json!({
        "type": "OBJECT",
        "properties": {
            "person1": person,
            "person2": person,
            "person3": person,
            "summary": { "type": "STRING" }
        },
        "required": ["person1", "person2", "person3", "summary"]
    })
}

pub fn obituary(context: &str, name: &str, status: UserStatus, years_remaining: f64) -> String {
    format!(
        "Subject: {name}\n\
         Context: {context}\n\
         Status: {}\n\
         Years Left: {years_remaining:.0}\n\
         \n\
         1. Write a BRUTALLY honest obituary assuming {name} died today. Mention their \
         potential, but emphasize it was cut short. (Current Obituary).\n\
         2. Write a GLORIOUS obituary assuming they lived the rest of their life \
         maximizing their skills. (Potential Obituary).\n\
         3. One sentence gap analysis.\n\
         \n\
         Use perfect English.\n\
         Output JSON.",
        status.as_str(),
    )
}

pub fn obituary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "currentObituary": { "type": "STRING" },
            "potentialObituary": { "type": "STRING" },
            "gapAnalysis": { "type": "STRING" }
        },
        "required": ["currentObituary", "potentialObituary", "gapAnalysis"]
    })
}

pub fn future_self_system(
    context: &str,
    user_name: &str,
    target_age: f64,
    current_age: f64,
) -> String {
    format!(
        "You are {user_name} at age {target_age:.0}. The user is you at age {current_age:.1}.\n\
         \n\
         YOUR BACKSTORY (The Past):\n\
         {context}\n\
         \n\
         Roleplay Guidelines:\n\
         - If the target age is greater than the current age: you have lived the future. \
         Did you follow through? Or did you waste your potential? Be wise and urgent.\n\
         - Speak in perfect, standard English. No glitch text.\n\
         - Keep responses concise and powerful."
    )
}
