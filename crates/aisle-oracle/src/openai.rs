//! OpenAI-compatible chat-completions oracle
//!
//! Works against api.openai.com or any compatible endpoint via
//! `base_url`. The reply is free text; the first balanced JSON array in
//! it is taken as the proposal. Anything less cooperative is an
//! [`OracleError`] and the planner falls back to local ordering.

use crate::error::OracleError;
use crate::oracle::{ItemDescriptor, RouteOracle};
use crate::prompt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const BODY_PREVIEW_LIMIT: usize = 500;

/// Configuration for the chat-completions oracle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Model identifier
    pub model: String,
    /// Bearer token; `None` fails at request time with `MissingApiKey`
    pub api_key: Option<String>,
    /// Endpoint override for OpenAI-compatible backends
    pub base_url: Option<String>,
    /// Completion token cap
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f64>,
    /// HTTP request deadline in seconds
    pub timeout_secs: u64,
}

impl OracleConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `OPENAI_API_KEY`, `OPENAI_MODEL`, and
    /// `OPENAI_BASE_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: std::env::var("OPENAI_BASE_URL").ok(),
            ..Self::default()
        }
    }

    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// With endpoint override
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// With request deadline
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            max_tokens: Some(1024),
            temperature: Some(0.2),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Oracle backed by an OpenAI-compatible chat endpoint
pub struct OpenAiOracle {
    config: OracleConfig,
    client: reqwest::Client,
}

impl OpenAiOracle {
    /// Build the oracle and its HTTP client
    ///
    /// # Errors
    /// [`OracleError::Transport`] if the client cannot be constructed.
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    /// Extract the first balanced JSON array from free text
    ///
    /// Bracket depth is tracked outside string literals, so ids
    /// containing brackets cannot derail the scan.
    fn extract_array(text: &str) -> Option<&str> {
        let start = text.find('[')?;
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        for (offset, ch) in text[start..].char_indices() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    in_string = false;
                }
                continue;
            }
            match ch {
                '"' => in_string = true,
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..=start + offset]);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn parse_reply(content: &str) -> Result<Vec<String>, OracleError> {
        let array = Self::extract_array(content)
            .ok_or_else(|| OracleError::Malformed(preview(content)))?;
        let sequence: Vec<String> =
            serde_json::from_str(array).map_err(|e| OracleError::Malformed(e.to_string()))?;
        if sequence.is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(sequence)
    }
}

impl std::fmt::Debug for OpenAiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiOracle")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RouteOracle for OpenAiOracle {
    async fn propose(
        &self,
        layout: &str,
        items: &[ItemDescriptor],
    ) -> Result<Vec<String>, OracleError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(OracleError::MissingApiKey)?;

        let user = prompt::render(layout, items);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: user.as_str(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(model = %self.config.model, items = items.len(), "requesting proposal");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout
                } else {
                    OracleError::Transport(e)
                }
            })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
                body: preview(&body),
            });
        }

        let reply: ChatResponse =
            serde_json::from_str(&body).map_err(|e| OracleError::Malformed(e.to_string()))?;
        let content = reply
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or(OracleError::EmptyResponse)?;

        Self::parse_reply(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

fn preview(body: &str) -> String {
    if body.len() > BODY_PREVIEW_LIMIT {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < BODY_PREVIEW_LIMIT)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}... [truncated]", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_array_from_prose() {
        let text = "Here is the route:\n[\"Entrance\", \"A1\", \"Checkout\"]\nEnjoy!";
        assert_eq!(
            OpenAiOracle::extract_array(text),
            Some("[\"Entrance\", \"A1\", \"Checkout\"]")
        );
    }

    #[test]
    fn extract_array_ignores_brackets_in_strings() {
        let text = "[\"A[1\", \"B]2\"] trailing";
        assert_eq!(
            OpenAiOracle::extract_array(text),
            Some("[\"A[1\", \"B]2\"]")
        );
    }

    #[test]
    fn extract_array_none_without_array() {
        assert_eq!(OpenAiOracle::extract_array("no array here"), None);
        assert_eq!(OpenAiOracle::extract_array("[1, 2"), None);
    }

    #[test]
    fn parse_reply_sequence() {
        let seq = OpenAiOracle::parse_reply("```json\n[\"Entrance\",\"Checkout\"]\n```").unwrap();
        assert_eq!(seq, vec!["Entrance", "Checkout"]);
    }

    #[test]
    fn parse_reply_rejects_empty_array() {
        assert!(matches!(
            OpenAiOracle::parse_reply("[]"),
            Err(OracleError::EmptyResponse)
        ));
    }

    #[test]
    fn parse_reply_rejects_non_string_array() {
        assert!(matches!(
            OpenAiOracle::parse_reply("[1, 2, 3]"),
            Err(OracleError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_is_reported() {
        let config = OracleConfig {
            api_key: None,
            ..OracleConfig::new()
        };
        let oracle = OpenAiOracle::new(config).unwrap();
        let result = oracle.propose("Entrance,Checkout", &[]).await;
        assert!(matches!(result, Err(OracleError::MissingApiKey)));
    }

    #[test]
    fn endpoint_respects_base_url() {
        let oracle = OpenAiOracle::new(
            OracleConfig::new().with_base_url("https://openrouter.ai/api/v1/"),
        )
        .unwrap();
        assert_eq!(
            oracle.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }
}
