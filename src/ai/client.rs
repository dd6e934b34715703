use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("assistant endpoint error {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Wire Types
// ============================================

/// Body of `POST /chat`. A missing thread id is sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub thread_id: Option<String>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>, thread_id: Option<String>) -> Self {
        Self {
            prompt: prompt.into(),
            thread_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

impl ChatResponse {
    /// Reply text, `None` when absent or empty.
    pub fn reply(&self) -> Option<&str> {
        self.response.as_deref().filter(|text| !text.is_empty())
    }

    /// Thread id worth persisting, `None` when absent or empty.
    pub fn session(&self) -> Option<&str> {
        self.thread_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Shape of the server's failure body, used only to enrich error messages.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub(crate) fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

// ============================================
// Endpoint Seam
// ============================================

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatEndpoint {
    async fn complete(&self, request: &ChatRequest) -> ChatResult<ChatResponse>;
}
