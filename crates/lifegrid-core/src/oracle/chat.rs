//! Chat with a future self.
//!
//! Maintains a linear in-memory conversation; each new turn replays the
//! prior user turns to the oracle to preserve context, then appends both
//! the user's message and the model's reply. History is never persisted
//! across runs.

use serde_json::{json, Value};

use super::{prompts, OracleClient};

pub const CHAT_FALLBACK: &str = "...connection lost...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// One conversation with the user's self at a target age.
pub struct FutureSelfChat {
    history: Vec<ChatTurn>,
    target_age: f64,
}

impl FutureSelfChat {
    pub fn new(target_age: f64) -> Self {
        Self {
            history: Vec::new(),
            target_age,
        }
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn target_age(&self) -> f64 {
        self.target_age
    }

    /// Send one message. Returns the reply text; on any failure the
    /// documented fallback string, with the failed exchange still recorded
    /// so the transcript stays linear.
    pub fn send(
        &mut self,
        client: &OracleClient,
        message: &str,
        user_name: &str,
        years_remaining: f64,
    ) -> String {
        let current_age = 90.0 - years_remaining;
        let system = prompts::future_self_system(
            client.user_context(),
            user_name,
            self.target_age,
            current_age,
        );

        // Replay prior user turns, then the new message.
        let mut contents: Vec<Value> = self
            .history
            .iter()
            .filter(|turn| turn.role == ChatRole::User)
            .map(|turn| json!({ "role": "user", "parts": [{ "text": turn.text }] }))
            .collect();
        contents.push(json!({ "role": "user", "parts": [{ "text": message }] }));

        let reply = match client.generate_text(client.model(), Some(&system), json!(contents)) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Warning: future-self chat failed, using fallback: {e}");
                CHAT_FALLBACK.to_string()
            }
        };

        self.history.push(ChatTurn {
            role: ChatRole::User,
            text: message.to_string(),
        });
        self.history.push(ChatTurn {
            role: ChatRole::Model,
            text: reply.clone(),
        });
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_starts_empty() {
        let chat = FutureSelfChat::new(90.0);
        assert!(chat.history().is_empty());
        assert_eq!(chat.target_age(), 90.0);
    }
}
