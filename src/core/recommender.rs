//! Mood-based song recommendation requester
//!
//! Builds the two-turn prompt for a mood, sends it through a `Provider` and
//! turns the reply into a list of lines. Provider failures never escape as
//! `Err`; they are folded into `RecommendationResult::Failed` with a tagged
//! `ErrorKind` so the presentation layer decides how to word them.

use crate::core::constants::{prompt, role};
use crate::core::provider::{Provider, ProviderError};
use crate::models::openai::{OpenAIChatCompletionRequest, OpenAIMessage};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// A free-text mood as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodQuery(String);

impl MoodQuery {
    pub fn new(mood: impl Into<String>) -> Self {
        Self(mood.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank moods must be rejected before any request is made
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Category of a failed recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AuthFailure,
    RateLimited,
    Transport,
    Unknown,
}

/// A failed request, tagged with its kind and the provider's detail text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {detail}")]
pub struct RecommendationError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl RecommendationError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl From<ProviderError> for RecommendationError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Authentication(message) => Self::new(ErrorKind::AuthFailure, message),
            ProviderError::RateLimit(message) => Self::new(ErrorKind::RateLimited, message),
            ProviderError::BadRequest(message) => {
                Self::new(ErrorKind::Transport, format!("(status 400) {message}"))
            }
            ProviderError::ApiError { status, message } => {
                Self::new(ErrorKind::Transport, format!("(status {status}) {message}"))
            }
            ProviderError::Transport(message) => Self::new(ErrorKind::Transport, message),
            ProviderError::InvalidResponse(message) => Self::new(ErrorKind::Unknown, message),
        }
    }
}

/// Outcome of one recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationResult {
    /// Reply lines, in the order the model wrote them
    Songs(Vec<String>),
    Failed(RecommendationError),
}

impl RecommendationResult {
    /// Whether at least one reply line has content
    pub fn has_songs(&self) -> bool {
        match self {
            RecommendationResult::Songs(lines) => lines.iter().any(|line| !line.is_empty()),
            RecommendationResult::Failed(_) => false,
        }
    }
}

/// Split a completion into lines
///
/// Only the reply as a whole is trimmed; individual lines are kept as the
/// model wrote them. The result always has at least one element.
pub fn split_reply(text: &str) -> Vec<String> {
    text.trim().split('\n').map(str::to_string).collect()
}

/// Build the fixed two-turn request for a mood
pub fn build_request(mood: &MoodQuery) -> OpenAIChatCompletionRequest {
    OpenAIChatCompletionRequest {
        model: prompt::MODEL.to_string(),
        messages: vec![
            OpenAIMessage::new(role::SYSTEM, prompt::SYSTEM_INSTRUCTION),
            OpenAIMessage::new(role::USER, prompt::user_instruction(mood.as_str())),
        ],
    }
}

/// Sends mood prompts to a provider and interprets the reply
pub struct Recommender {
    provider: Arc<dyn Provider>,
}

impl Recommender {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Request song suggestions for a mood
    ///
    /// Makes exactly one provider call and never retries.
    pub async fn recommend(&self, mood: &MoodQuery) -> RecommendationResult {
        let request_id = uuid::Uuid::new_v4();
        let request = build_request(mood);

        info!(%request_id, "🎵 Requesting recommendations for mood: {:?}", mood.as_str());

        let response = match self.provider.create_chat_completion(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%request_id, "Recommendation request failed: {}", e);
                return RecommendationResult::Failed(e.into());
            }
        };

        match response.first_content() {
            Some(content) => {
                let lines = split_reply(content);
                info!(%request_id, "Received {} recommendation lines", lines.len());
                RecommendationResult::Songs(lines)
            }
            None => {
                warn!(%request_id, "Provider reply had no message content");
                RecommendationResult::Failed(RecommendationError::new(
                    ErrorKind::Unknown,
                    "response contained no message content",
                ))
            }
        }
    }
}
