use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::options::SummaryOptions;
use crate::prompt;

/// Environment variable holding the summarization credential.
pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";

const DEFAULT_API_URL: &str = "https://api.perplexity.ai/chat/completions";

#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub max_input_chars: usize,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        SummarizeConfig {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: "sonar-pro".to_string(),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
            max_input_chars: 15_000,
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

/// Client for the chat-completions summarization endpoint, with bounded
/// retries and linear backoff.
pub struct SummaryClient {
    http: reqwest::Client,
    config: SummarizeConfig,
}

impl SummaryClient {
    pub fn new(http: reqwest::Client, config: SummarizeConfig) -> Self {
        SummaryClient { http, config }
    }

    /// Summarize `text` according to `options`. Returns the first non-empty
    /// summary the endpoint produces, or the last recorded error once all
    /// attempts are exhausted.
    pub async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(Error::Configuration { env_var: API_KEY_ENV })?;

        let user_prompt = prompt::build_user_prompt(text, options, self.config.max_input_chars);
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": prompt::SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens
        });

        let mut last_err: Option<Error> = None;

        for attempt in 1..=self.config.max_retries {
            debug!("Summarization attempt {attempt}/{}", self.config.max_retries);

            match self.call_api(api_key, &payload).await {
                Ok(summary) => return Ok(summary),
                Err(e) => {
                    warn!("Summarization attempt {attempt} failed: {e}");
                    let rate_limited = matches!(e, Error::RateLimited { .. });
                    last_err = Some(e);

                    if attempt < self.config.max_retries {
                        // Linear backoff scaled by attempt number; rate limits
                        // wait twice as long.
                        let mut delay = self.config.retry_delay * attempt;
                        if rate_limited {
                            delay *= 2;
                        }
                        debug!("Waiting {delay:?} before next attempt");
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_err.unwrap_or(Error::Unknown))
    }

    async fn call_api(&self, api_key: &str, payload: &serde_json::Value) -> Result<String> {
        let resp = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::RateLimited { detail: body });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = resp.json().await?;
        extract_summary(&json).ok_or(Error::ResponseShape)
    }
}

/// Pull the summary text out of a chat-completions response. An empty content
/// field counts as missing.
fn extract_summary(json: &serde_json::Value) -> Option<String> {
    let text = json
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
