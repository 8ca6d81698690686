pub mod input;

use serde::Serialize;
use tracing::{error, info};

use crate::{
    callable::CallableError,
    openai::{ChatMessage, OpenAiClient},
    prompts,
};

pub use input::{GenerationRequest, RawGenerationInput};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
}

/// Turns a category into a block of typing-game text via one completion call.
#[derive(Clone)]
pub struct SampleTextGenerator {
    client: OpenAiClient,
}

impl SampleTextGenerator {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, CallableError> {
        let prompt = prompts::sample_text_prompt(&request.category, request.length);
        let max_tokens = request.token_budget();
        let messages = [
            ChatMessage {
                role: "system",
                content: prompts::SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: &prompt,
            },
        ];

        info!(
            category = %request.category,
            length = request.length,
            max_tokens,
            model = self.client.model(),
            "generating sample text"
        );

        match self.client.chat_completion(&messages, max_tokens).await {
            Ok(content) => Ok(GenerationResult {
                text: content.trim().to_string(),
            }),
            Err(err) => {
                error!(error = ?err, "error generating text");
                Err(CallableError::Internal)
            }
        }
    }
}
