use std::fmt;
use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use agentgrid_core::{AgentGridError, LlmRequest, LlmResponse, ToolCallingLlm};

use crate::wire::{
    map_message, map_tool_spec, unmap_tool_call, ChatCompletionRequest, ChatCompletionResponse,
};

pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

const DEFAULT_BASE_URL: &str = "https://openrouter.ai";

#[derive(Clone)]
pub struct OpenRouterClient {
    http: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl OpenRouterClient {
    pub fn builder() -> OpenRouterBuilder {
        OpenRouterBuilder::default()
    }

    /// Reads the API key from the environment. A missing or empty key is a
    /// configuration error; callers treat it as fatal at startup.
    pub fn from_env() -> Result<Self, AgentGridError> {
        let api_key = std::env::var(OPENROUTER_API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AgentGridError::InvalidConfig(format!(
                    "{OPENROUTER_API_KEY_VAR} not found in environment"
                ))
            })?;
        Self::builder().api_key(api_key).build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Default)]
pub struct OpenRouterBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    model: Option<String>,
}

impl fmt::Debug for OpenRouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_some() {
            "<redacted>"
        } else {
            "<none>"
        };
        f.debug_struct("OpenRouterBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &api_key)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenRouterBuilder {
    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(value.into()));
        self
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = Some(value.into());
        self
    }

    pub fn build(self) -> Result<OpenRouterClient, AgentGridError> {
        let api_key = self
            .api_key
            .ok_or_else(|| AgentGridError::InvalidConfig("missing API key".to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|err| AgentGridError::LlmProvider(err.to_string()))?;

        Ok(OpenRouterClient {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl ToolCallingLlm for OpenRouterClient {
    async fn invoke(&self, request: LlmRequest) -> Result<LlmResponse, AgentGridError> {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model
        };
        let messages = request
            .messages
            .into_iter()
            .map(map_message)
            .collect::<Result<Vec<_>, _>>()?;
        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(request.tools.into_iter().map(map_tool_spec).collect())
        };

        let body = ChatCompletionRequest {
            model,
            messages,
            tools,
            stream: false,
        };

        let url = format!("{}/api/v1/chat/completions", self.base_url);
        let response: ChatCompletionResponse = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| AgentGridError::LlmProvider(err.to_string()))?
            .error_for_status()
            .map_err(|err| AgentGridError::LlmProvider(err.to_string()))?
            .json()
            .await
            .map_err(|err| AgentGridError::LlmProvider(err.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentGridError::LlmProvider("no choices returned".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(unmap_tool_call)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            tool_calls,
        })
    }
}
