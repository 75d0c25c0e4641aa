//! OpenAI provider implementation

use crate::core::provider::{Provider, ProviderError};
use crate::models::openai::{OpenAIChatCompletionRequest, OpenAIChatCompletionResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// OpenAI provider speaking the chat-completions wire format
pub struct OpenAIProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key; requests are sent unauthenticated when `None`
    /// * `base_url` - OpenAI API base URL
    /// * `timeout` - Optional request timeout in seconds
    pub fn new(api_key: Option<String>, base_url: String, timeout: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Pull the human-readable message out of an OpenAI error body
    ///
    /// Falls back to the raw body when it is not the usual
    /// `{"error": {"message": ...}}` envelope.
    fn extract_error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .pointer("/error/message")
                    .and_then(|message| message.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.trim().to_string())
    }

    /// Classify OpenAI errors and provide helpful messages
    fn classify_error(error_detail: &str) -> String {
        let error_lower = error_detail.to_lowercase();

        if error_lower.contains("unsupported_country_region_territory")
            || error_lower.contains("country, region, or territory not supported")
        {
            return "OpenAI API is not available in your region.".to_string();
        }

        if error_lower.contains("model")
            && (error_lower.contains("not found") || error_lower.contains("does not exist"))
        {
            return format!("Model not found: {error_detail}");
        }

        if error_lower.contains("billing") || error_lower.contains("insufficient_quota") {
            return "Billing issue. Please check your OpenAI account billing status.".to_string();
        }

        if error_detail.is_empty() {
            return "Unknown error".to_string();
        }

        error_detail.to_string()
    }
}

#[async_trait]
impl Provider for OpenAIProvider {
    async fn create_chat_completion(
        &self,
        request: &OpenAIChatCompletionRequest,
    ) -> Result<OpenAIChatCompletionResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut req_builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(api_key) = &self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        debug!("POST {} model={}", url, request.model);

        let response = req_builder
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let classified_error = Self::classify_error(&Self::extract_error_message(&error_text));
            warn!("Provider returned {}: {}", status, classified_error);

            return Err(ProviderError::from_status(status.as_u16(), classified_error));
        }

        let completion: OpenAIChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion)
    }

    fn provider_name(&self) -> &'static str {
        "OpenAI"
    }
}
