//! Text-generation seam and the TGI (text-generation-inference) client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use redpersona_core::GeneratorConfig;

use crate::error::GenerationError;

/// Produces a continuation for a prompt.
///
/// Implementations may or may not echo the prompt in their output;
/// [`crate::extract_continuation`] handles both.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns [`GenerationError`] if no text could be produced.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Sampling settings for short-form continuation. One sample per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_new_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_new_tokens: 500,
            temperature: 0.7,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    temperature: f32,
    do_sample: bool,
    return_full_text: bool,
}

/// `/generate` answers with an object; some deployments wrap it in a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Single(GeneratedText),
    Batch(Vec<GeneratedText>),
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// HTTP client for a text-generation-inference server.
pub struct TgiClient {
    client: reqwest::Client,
    url: String,
    settings: GenerationSettings,
}

impl TgiClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        settings: GenerationSettings,
        timeout_secs: Option<u64>,
    ) -> Result<Self, GenerationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            url: format!("{}/generate", base_url.trim_end_matches('/')),
            settings,
        })
    }

    /// Creates a client from the generator section of the app config.
    ///
    /// # Errors
    ///
    /// See [`TgiClient::new`].
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        Self::new(
            &config.url,
            GenerationSettings {
                max_new_tokens: config.max_new_tokens,
                temperature: config.temperature,
            },
            config.request_timeout_secs,
        )
    }
}

#[async_trait]
impl TextGenerator for TgiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                max_new_tokens: self.settings.max_new_tokens,
                temperature: self.settings.temperature,
                do_sample: true,
                return_full_text: true,
            },
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(body unreadable: {e})"));
            return Err(GenerationError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::Deserialize(e.to_string()))?;

        match parsed {
            GenerateResponse::Single(generated) => Ok(generated.generated_text),
            GenerateResponse::Batch(batch) => batch
                .into_iter()
                .next()
                .map(|generated| generated.generated_text)
                .ok_or(GenerationError::Empty),
        }
    }
}
