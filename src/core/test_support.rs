//! Fixtures shared by unit tests

use crate::core::provider::MockProvider;
use crate::models::openai::{OpenAIChatCompletionResponse, OpenAIChoice, OpenAIMessage};

/// A completion whose first choice carries `content`
pub fn completion(content: Option<&str>) -> OpenAIChatCompletionResponse {
    OpenAIChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        object: "chat.completion".to_string(),
        created: 0,
        model: "gpt-3.5-turbo".to_string(),
        choices: vec![OpenAIChoice {
            index: 0,
            message: OpenAIMessage {
                role: "assistant".to_string(),
                content: content.map(str::to_string),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

/// Mock provider expected to be called `times` times, always replying `content`
pub fn replying(content: &'static str, times: usize) -> MockProvider {
    let mut provider = MockProvider::new();
    provider
        .expect_create_chat_completion()
        .times(times)
        .returning(move |_| Ok(completion(Some(content))));
    provider
}
