//! Presentation model for one mood submission
//!
//! This is the caller side of the recommender: it rejects blank moods before
//! any request is made, words provider errors for display, decides whether
//! the reply counts as "no recommendations" and renders the charts.

use crate::core::constants::text;
use crate::core::recommender::{
    ErrorKind, MoodQuery, RecommendationError, RecommendationResult, Recommender,
};
use crate::visualization::{render_bar_chart, render_word_cloud};
use serde::Serialize;
use tracing::{debug, error};

/// Outcome category shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Success,
    EmptyMood,
    NoRecommendations,
    Error,
}

/// Everything the page or JSON endpoint needs to show a submission
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub status: ViewStatus,
    pub mood: String,
    /// Reply lines on success, or the single error message on failure
    pub recommendations: Vec<String>,
    /// Warnings and errors to show above the results
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_cloud_svg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_chart_svg: Option<String>,
}

/// User-facing text for a failed request
pub fn display_text(error: &RecommendationError) -> String {
    match error.kind {
        ErrorKind::AuthFailure => text::AUTH_FAILURE.to_string(),
        ErrorKind::RateLimited => text::RATE_LIMITED.to_string(),
        ErrorKind::Transport => format!("{}{}", text::TRANSPORT_PREFIX, error.detail),
        ErrorKind::Unknown => format!("{}{}", text::UNKNOWN_PREFIX, error.detail),
    }
}

/// Display lines for a result; never empty
pub fn display_lines(result: &RecommendationResult) -> Vec<String> {
    match result {
        RecommendationResult::Songs(lines) => lines.clone(),
        RecommendationResult::Failed(error) => vec![display_text(error)],
    }
}

impl RecommendationView {
    fn notice(status: ViewStatus, mood: &MoodQuery, message: &str) -> Self {
        Self {
            status,
            mood: mood.as_str().to_string(),
            recommendations: Vec::new(),
            messages: vec![message.to_string()],
            error_kind: None,
            word_cloud_svg: None,
            bar_chart_svg: None,
        }
    }

    /// Build the view for a finished request
    pub fn from_result(mood: &MoodQuery, result: RecommendationResult) -> Self {
        let lines = display_lines(&result);

        match result {
            RecommendationResult::Failed(error) => Self {
                status: ViewStatus::Error,
                mood: mood.as_str().to_string(),
                messages: lines.clone(),
                recommendations: lines,
                error_kind: Some(error.kind),
                word_cloud_svg: None,
                bar_chart_svg: None,
            },
            ref songs if !songs.has_songs() => Self {
                recommendations: lines,
                ..Self::notice(ViewStatus::NoRecommendations, mood, text::NO_RECOMMENDATIONS)
            },
            RecommendationResult::Songs(_) => Self {
                status: ViewStatus::Success,
                mood: mood.as_str().to_string(),
                word_cloud_svg: Some(render_word_cloud(mood.as_str())),
                bar_chart_svg: Some(render_bar_chart(mood.as_str(), &lines)),
                recommendations: lines,
                messages: Vec::new(),
                error_kind: None,
            },
        }
    }
}

/// Handle one submission: short-circuit blank moods, otherwise ask the recommender
pub async fn evaluate(recommender: &Recommender, mood: MoodQuery) -> RecommendationView {
    if mood.is_blank() {
        debug!("Blank mood submitted; skipping provider call");
        return RecommendationView::notice(ViewStatus::EmptyMood, &mood, text::EMPTY_MOOD);
    }

    let result = recommender.recommend(&mood).await;

    // Chart layout is CPU-bound; keep it off the async workers
    let rendering_mood = mood.clone();
    match tokio::task::spawn_blocking(move || {
        RecommendationView::from_result(&rendering_mood, result)
    })
    .await
    {
        Ok(view) => view,
        Err(e) => {
            error!("Chart rendering task failed: {}", e);
            RecommendationView::from_result(
                &mood,
                RecommendationResult::Failed(RecommendationError::new(
                    ErrorKind::Unknown,
                    format!("chart rendering failed: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::{MockProvider, ProviderError};
    use crate::core::test_support::replying;
    use std::sync::Arc;

    async fn run(provider: MockProvider, mood: &str) -> RecommendationView {
        let recommender = Recommender::new(Arc::new(provider));
        evaluate(&recommender, MoodQuery::new(mood)).await
    }

    fn failing(error: fn() -> ProviderError) -> MockProvider {
        let mut provider = MockProvider::new();
        provider
            .expect_create_chat_completion()
            .times(1)
            .returning(move |_| Err(error()));
        provider
    }

    #[test]
    fn test_display_text() {
        let auth = RecommendationError::new(ErrorKind::AuthFailure, "401");
        assert_eq!(display_text(&auth), text::AUTH_FAILURE);

        let transport = RecommendationError::new(ErrorKind::Transport, "connection reset");
        assert_eq!(
            display_text(&transport),
            "❌ OpenAI API error: connection reset"
        );

        let unknown = RecommendationError::new(ErrorKind::Unknown, "bad json");
        assert_eq!(
            display_text(&unknown),
            "❌ An unexpected error occurred: bad json"
        );
    }

    #[test]
    fn test_rate_limit_text_ignores_detail() {
        for detail in ["", "Rate limit reached", "something else entirely"] {
            let error = RecommendationError::new(ErrorKind::RateLimited, detail);
            let lines = display_lines(&RecommendationResult::Failed(error));
            assert_eq!(lines, vec![text::RATE_LIMITED.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_empty_mood_makes_no_call() {
        for mood in ["", "   "] {
            let view = run(replying("Song A", 0), mood).await;
            assert_eq!(view.status, ViewStatus::EmptyMood);
            assert_eq!(view.messages, vec![text::EMPTY_MOOD.to_string()]);
            assert!(view.recommendations.is_empty());
        }
    }

    #[tokio::test]
    async fn test_success_renders_charts() {
        let view = run(replying("1. Song A\n2. Song B\n3. Song C", 1), "joyful").await;
        assert_eq!(view.status, ViewStatus::Success);
        assert_eq!(
            view.recommendations,
            vec!["1. Song A", "2. Song B", "3. Song C"]
        );
        assert!(view.messages.is_empty());
        assert!(view.word_cloud_svg.unwrap().contains(">joyful</text>"));
        assert!(view.bar_chart_svg.unwrap().contains(">2. Song B</text>"));
    }

    #[tokio::test]
    async fn test_long_mood_renders_on_blocking_pool() {
        let mood = (0..300)
            .map(|i| format!("feeling{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let view = run(replying("Song A", 1), &mood).await;
        assert_eq!(view.status, ViewStatus::Success);
        assert!(view.word_cloud_svg.unwrap().contains("<text"));
    }

    #[tokio::test]
    async fn test_auth_failure_is_single_message() {
        let view = run(
            failing(|| ProviderError::Authentication("bad key".into())),
            "angry",
        )
        .await;
        assert_eq!(view.status, ViewStatus::Error);
        assert_eq!(view.error_kind, Some(ErrorKind::AuthFailure));
        assert_eq!(view.recommendations.len(), 1);
        assert!(view.recommendations[0].contains("Invalid OpenAI API key"));
        assert!(view.word_cloud_svg.is_none());
        assert!(view.bar_chart_svg.is_none());
    }

    #[tokio::test]
    async fn test_rate_limit_is_single_message() {
        let view = run(
            failing(|| ProviderError::RateLimit("quota detail".into())),
            "bored",
        )
        .await;
        assert_eq!(view.recommendations, vec![text::RATE_LIMITED.to_string()]);
        assert!(!view.recommendations[0].contains("quota detail"));
    }

    #[tokio::test]
    async fn test_api_error_text_names_status_once() {
        let view = run(
            failing(|| ProviderError::ApiError {
                status: 502,
                message: "upstream".into(),
            }),
            "restless",
        )
        .await;
        assert_eq!(
            view.recommendations,
            vec!["❌ OpenAI API error: (status 502) upstream"]
        );
    }

    #[tokio::test]
    async fn test_blank_reply_is_no_recommendations() {
        let view = run(replying("\n\n", 1), "numb").await;
        assert_eq!(view.status, ViewStatus::NoRecommendations);
        assert_eq!(view.messages, vec![text::NO_RECOMMENDATIONS.to_string()]);
        assert!(view.bar_chart_svg.is_none());
    }

    #[tokio::test]
    async fn test_any_mood_yields_lines() {
        let providers = vec![
            replying("Song A", 1),
            replying("", 1),
            failing(|| ProviderError::Transport("refused".into())),
            failing(|| ProviderError::InvalidResponse("garbage".into())),
        ];
        for provider in providers {
            let view = run(provider, "wistful").await;
            assert!(!view.recommendations.is_empty());
        }
    }
}
