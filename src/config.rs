use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::env;

/// Bundled defaults for builds that ship without a .env file (web, mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";
pub const DEFAULT_THREAD_KEY: &str = "thread_id";
pub const DEFAULT_APP_ID: &str = "assistant";

/// Runtime settings for the assistant widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Full URL of the `/chat` endpoint.
    pub endpoint: String,
    /// Storage key the thread id is persisted under.
    pub thread_key: String,
    /// Namespace for the native session store directory.
    pub app_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            thread_key: DEFAULT_THREAD_KEY.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Read settings from the process environment, then the bundled
    /// `assets/config.env`, then built-in defaults, and validate the result:
    /// 1. MERIDIAN_CHAT_ENDPOINT
    /// 2. MERIDIAN_THREAD_KEY
    /// 3. MERIDIAN_APP_ID
    pub fn load() -> Result<Self> {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        Self::resolve(|key| env::var(key).ok().or_else(|| bundled.get(key).cloned()))
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self::from_lookup(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Reject endpoints the HTTP client could never reach.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid MERIDIAN_CHAT_ENDPOINT `{}`", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "MERIDIAN_CHAT_ENDPOINT must be http or https, got `{}`",
                url.scheme()
            ));
        }
        if self.thread_key.trim().is_empty() {
            return Err(anyhow!("MERIDIAN_THREAD_KEY must not be empty"));
        }
        Ok(())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            endpoint: read("MERIDIAN_CHAT_ENDPOINT", DEFAULT_ENDPOINT),
            thread_key: read("MERIDIAN_THREAD_KEY", DEFAULT_THREAD_KEY),
            app_id: read("MERIDIAN_APP_ID", DEFAULT_APP_ID),
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping blank lines and `#` comments.
pub fn parse_env_lines(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                vars.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    vars
}
