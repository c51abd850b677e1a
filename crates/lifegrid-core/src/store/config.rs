//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Oracle model identifiers and endpoint
//! - Display refresh intervals (countdown tick, fact rotation)
//! - Grid overlay defaults
//!
//! Configuration is stored at `~/.config/lifegrid/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;

/// Oracle client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Model used for the quick features (analysis, oracle Q&A, chat).
    #[serde(default = "default_flash_model")]
    pub model: String,
    /// Model used for the long-form features (simulation, audit, rivals,
    /// obituary).
    #[serde(default = "default_pro_model")]
    pub pro_model: String,
    /// API base URL; tests point this at a mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key override. The LIFEGRID_API_KEY environment variable takes
    /// precedence.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Countdown resample interval in milliseconds. Any sub-second value
    /// preserves the countdown-to-zero behavior.
    #[serde(default = "default_countdown_tick_ms")]
    pub countdown_tick_ms: u64,
    /// Fact ticker rotation interval in seconds.
    #[serde(default = "default_fact_interval_secs")]
    pub fact_interval_secs: u64,
    /// Render the life-stage overlay on the life grid.
    #[serde(default)]
    pub show_stages: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/lifegrid/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_flash_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_pro_model() -> String {
    "gemini-3-pro-preview".into()
}
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_countdown_tick_ms() -> u64 {
    41
}
fn default_fact_interval_secs() -> u64 {
    3
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: default_flash_model(),
            pro_model: default_pro_model(),
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            countdown_tick_ms: default_countdown_tick_ms(),
            fact_interval_secs: default_fact_interval_secs(),
            show_stages: false,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| format!("cannot parse '{value}' as number"))?
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
        }

        Err(format!("unknown config key: {key}").into())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.oracle.model, "gemini-2.5-flash");
        assert_eq!(parsed.ui.countdown_tick_ms, 41);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.fact_interval_secs").as_deref(), Some("3"));
        assert_eq!(
            cfg.get("oracle.model").as_deref(),
            Some("gemini-2.5-flash")
        );
        assert!(cfg.get("ui.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_bool() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "ui.show_stages", "true").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "ui.show_stages").unwrap(),
            &serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "ui.countdown_tick_ms", "250").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "ui.countdown_tick_ms").unwrap(),
            &serde_json::Value::Number(250.into())
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "ui.nonexistent_key", "value");
        assert!(result.is_err());
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "ui.show_stages", "not_a_bool");
        assert!(result.is_err());
    }
}
