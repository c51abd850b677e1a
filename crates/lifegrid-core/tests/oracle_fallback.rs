//! Oracle client behavior against a mock HTTP server.
//!
//! Every feature must return its documented fallback payload on failure
//! and the parsed payload on success; no call ever returns an error.

use lifegrid_core::oracle::{
    AiAnalysisResult, LifeOracleResponse, SimulationResult, StressLevel, Tone,
};
use lifegrid_core::store::{OracleConfig, UserStatus};
use lifegrid_core::OracleClient;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> OracleClient {
    let cfg = OracleConfig {
        base_url: server.url(),
        api_key: Some("test-key".into()),
        ..OracleConfig::default()
    };
    OracleClient::new(&cfg, "Ada").unwrap()
}

/// Wrap generated text in the API's response envelope.
fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

const FLASH_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
const PRO_PATH: &str = "/v1beta/models/gemini-3-pro-preview:generateContent";

#[test]
fn service_error_yields_analysis_fallback() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", FLASH_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(json!({ "error": { "code": 429, "message": "quota" } }).to_string())
        .create();

    let client = client_for(&server);
    let result = client.analyze_habit_impact("Doomscrolling", 3.0, 40.0, UserStatus::Career, "Ada");

    mock.assert();
    assert_eq!(result, AiAnalysisResult::fallback(3.0, 40.0));
    assert_eq!(result.weeks_consumed, 260.0);
    assert_eq!(result.advice, "Balance is key.");
    assert_eq!(result.tone, Tone::Neutral);
    assert_eq!(result.stress_level, StressLevel::Low);
}

#[test]
fn malformed_payload_yields_oracle_fallback() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", FLASH_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(envelope("this is not the JSON you asked for"))
        .create();

    let client = client_for(&server);
    let result = client.ask_life_oracle("Should I quit?", "stuck", "Ada");

    assert_eq!(result, LifeOracleResponse::fallback());
    assert_eq!(
        result.answer,
        "The mists of time obscure the answer right now."
    );
    assert_eq!(result.philosophical_quote, "The only time you have is now.");
}

#[test]
fn missing_candidates_yields_fallback() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", PRO_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(json!({ "candidates": [] }).to_string())
        .create();

    let client = client_for(&server);
    let result = client.run_simulation("moved to Lisbon in 2019", 40.0);

    assert_eq!(result, SimulationResult::fallback());
    assert_eq!(result.net_worth_delta, "$0");
    assert_eq!(result.happiness_score, 50.0);
}

#[test]
fn unreachable_server_yields_fallback() {
    // Nothing listens here; the request fails at the transport layer.
    let cfg = OracleConfig {
        base_url: "http://127.0.0.1:9".into(),
        api_key: Some("test-key".into()),
        ..OracleConfig::default()
    };
    let client = OracleClient::new(&cfg, "Ada").unwrap();

    let result = client.audit_tasks("write novel\nbuy socks", 40.0);
    assert_eq!(result.critical_task, "Focus.");
    assert_eq!(result.discard_task, "Distraction.");

    let rivals = client.find_rivals(26.0);
    assert_eq!(rivals.person1.name, "Mark Zuckerberg");
    assert_eq!(rivals.summary, "You are statistically behind schedule.");

    let obituary = client.generate_obituary("Ada", UserStatus::Career, 40.0);
    assert!(obituary.current_obituary.contains("Ada"));
    assert_eq!(obituary.gap_analysis, "The difference is execution.");
}

#[test]
fn valid_payload_is_parsed() {
    let payload = json!({
        "weeksConsumed": 120,
        "percentageOfRemaining": 5.5,
        "impactDescription": "A fifth of your evenings, gone.",
        "tone": "warning",
        "advice": "Cap it at one hour.",
        "pastImpact": "Roughly a year so far.",
        "stressLevel": "medium",
        "burnoutRisk": "Slow erosion."
    });
    let mut server = mockito::Server::new();
    server
        .mock("POST", FLASH_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(envelope(&payload.to_string()))
        .create();

    let client = client_for(&server);
    let result = client.analyze_habit_impact("Doomscrolling", 3.0, 40.0, UserStatus::Career, "Ada");

    assert_eq!(result.weeks_consumed, 120.0);
    assert_eq!(result.tone, Tone::Warning);
    assert_eq!(result.stress_level, StressLevel::Medium);
    assert_eq!(result.advice, "Cap it at one hour.");
}

#[test]
fn chat_reply_and_fallback_keep_history_linear() {
    use lifegrid_core::oracle::chat::CHAT_FALLBACK;
    use lifegrid_core::FutureSelfChat;

    let mut server = mockito::Server::new();
    server
        .mock("POST", FLASH_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(envelope("You made it. Barely."))
        .create();

    let client = client_for(&server);
    let mut chat = FutureSelfChat::new(90.0);
    let reply = chat.send(&client, "Did it work out?", "Ada", 40.0);
    assert_eq!(reply, "You made it. Barely.");
    assert_eq!(chat.history().len(), 2);

    // Unreachable endpoint: the documented fallback, with the failed
    // exchange still recorded.
    let cfg = OracleConfig {
        base_url: "http://127.0.0.1:9".into(),
        api_key: Some("test-key".into()),
        ..OracleConfig::default()
    };
    let offline = OracleClient::new(&cfg, "Ada").unwrap();
    let reply = chat.send(&offline, "Still there?", "Ada", 40.0);
    assert_eq!(reply, CHAT_FALLBACK);
    assert_eq!(chat.history().len(), 4);
}

#[test]
fn api_key_is_sent_as_query_parameter() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", FLASH_PATH)
        .match_query(mockito::Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_body(envelope(
            &json!({
                "answer": "Yes.",
                "philosophicalQuote": "Begin."
            })
            .to_string(),
        ))
        .create();

    let client = client_for(&server);
    let result = client.ask_life_oracle("Should I start?", "", "Ada");

    mock.assert();
    assert_eq!(result.answer, "Yes.");
}
