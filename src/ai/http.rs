use super::client::{ChatEndpoint, ChatError, ChatRequest, ChatResponse, ChatResult, error_detail};
use async_trait::async_trait;
use reqwest::Client;

/// Client for the assistant's `/chat` endpoint
#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    client: Client,
    endpoint: String,
}

impl HttpEndpoint {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Use a preconfigured client (proxy, timeouts, TLS roots).
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatEndpoint for HttpEndpoint {
    async fn complete(&self, request: &ChatRequest) -> ChatResult<ChatResponse> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        Ok(serde_json::from_str::<ChatResponse>(&body)?)
    }
}
