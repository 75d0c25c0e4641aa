//! Constants for prompts, roles and user-facing text
//!
//! This module defines the fixed prompt, the model identifier and every
//! message string shown to the user.

/// Message role constants
pub mod role {
    /// User role identifier
    pub const USER: &str = "user";

    /// System role identifier
    pub const SYSTEM: &str = "system";
}

/// Prompt constants for the recommendation request
pub mod prompt {
    /// Fixed completion model
    pub const MODEL: &str = "gpt-3.5-turbo";

    /// Instruction turn sent before the mood
    pub const SYSTEM_INSTRUCTION: &str = "You are an AI that suggests songs based on mood.";

    /// Build the user turn for a mood
    pub fn user_instruction(mood: &str) -> String {
        format!("Recommend 3 songs for someone feeling {mood}.")
    }
}

/// Environment variable names
pub mod env {
    /// Provider credential
    pub const API_KEY: &str = "OPENAI_API_KEY";

    /// Path to the TOML configuration file
    pub const CONFIG_PATH: &str = "CONFIG_PATH";
}

/// Text shown on the page and returned by the JSON endpoint
pub mod text {
    pub const TITLE: &str = "🎵 AI Music Mood Recommender 🎵";
    pub const SUBTITLE: &str =
        "Tell me how you feel, and I'll recommend the perfect music for you!";
    pub const MOOD_PROMPT: &str = "Describe your current mood:";
    pub const BUTTON: &str = "Get Recommendation";
    pub const SONGS_HEADER: &str = "🎧 Recommended Songs:";
    pub const WORD_CLOUD_HEADER: &str = "🎭 Mood Word Cloud";
    pub const BAR_CHART_HEADER: &str = "📊 Mood vs. Song Recommendations";

    pub const MISSING_API_KEY: &str =
        "❌ OpenAI API key is missing! Set it as an environment variable or in the code.";
    pub const EMPTY_MOOD: &str = "⚠️ Please enter your mood to get recommendations.";
    pub const NO_RECOMMENDATIONS: &str = "⚠️ No recommendations found!";

    pub const AUTH_FAILURE: &str = "❌ Invalid OpenAI API key. Check your key and try again.";
    pub const RATE_LIMITED: &str = "⚠️ API rate limit exceeded. Try again later.";
    pub const TRANSPORT_PREFIX: &str = "❌ OpenAI API error: ";
    pub const UNKNOWN_PREFIX: &str = "❌ An unexpected error occurred: ";
}

/// Bar chart constants
pub mod chart {
    /// Placeholder influence score given to every song
    pub const PLACEHOLDER_SCORE: u32 = 5;

    /// Maximum characters kept from a recommendation line for its bar label
    pub const LABEL_MAX_CHARS: usize = 20;

    /// Bar fill colour
    pub const BAR_COLOR: &str = "#87ceeb";

    pub const X_LABEL: &str = "Mood Influence Score";
}
