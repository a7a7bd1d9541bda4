use reqwest::Client;

use crate::client::{
    auth::ApiKey,
    error::{ErrorKind, UpstreamError},
    types::*,
};
use crate::config::Config;

pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: ApiKey,
    client: Client,
}

impl GeminiClient {
    /// Builds a client for `config`. The configured request timeout bounds the
    /// whole call, connection and body included. Redirects are not followed: a
    /// 3xx is returned as is and counts as an upstream error.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Sends `prompt` to Gemini and returns the text of the first candidate.
    ///
    /// One attempt only. Every failure is reported as an [`UpstreamError`]
    /// whose kind tells the caller what went wrong.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, UpstreamError> {
        let endpoint = self.endpoint();
        let request = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(
            "Sending generateContent request to {} (key {})",
            endpoint,
            self.api_key.preview()
        );

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.api_key.expose())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Network error contacting Gemini: {}", e);
                UpstreamError::new(ErrorKind::UpstreamUnreachable, e.to_string())
            })?;

        let status = response.status();
        tracing::debug!("Gemini response status: {}", status);

        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read Gemini response body: {}", e);
            UpstreamError::new(ErrorKind::UpstreamUnreachable, e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!("Gemini returned HTTP {}: {}", status.as_u16(), body);
            return Err(UpstreamError::from_status(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Gemini response is not valid JSON: {}", e);
            UpstreamError::new(
                ErrorKind::UpstreamBadResponse,
                format!("invalid JSON body: {}", e),
            )
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            tracing::debug!(
                "Gemini token usage: prompt={:?} candidates={:?} total={:?}",
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.total_token_count
            );
        }

        let text = parsed.first_text().map_err(|reason| {
            tracing::error!("Unexpected Gemini response shape: {}", reason);
            UpstreamError::new(ErrorKind::UpstreamBadResponse, reason)
        })?;

        tracing::info!("Received generated content from Gemini ({} bytes)", text.len());
        Ok(text)
    }
}
