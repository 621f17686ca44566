use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AssistError;

/// Default Converse model: a US inference profile for Claude Sonnet 4.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

impl TokenUsage {
    pub fn total(&self) -> u64 {
        self.input + self.output
    }
}

/// Raw reply from a single model call.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// A text-in, text-out generative model.
pub trait TextModel: Send + Sync {
    fn model_id(&self) -> &str;

    /// Send one system prompt and one user message, return the reply.
    fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> impl Future<Output = Result<Completion, AssistError>> + Send;
}

/// [`TextModel`] over the Bedrock Converse API.
#[derive(Debug, Clone)]
pub struct BedrockModel {
    client: Client,
    model_id: String,
}

impl BedrockModel {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), model_id)
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

impl TextModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Completion, AssistError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_message.to_string()))
            .build()
            .map_err(|e| AssistError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .send()
            .await
            .map_err(|e| AssistError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| AssistError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        let usage = response
            .usage()
            .map(|u| TokenUsage {
                input: u64::try_from(u.input_tokens).unwrap_or(0),
                output: u64::try_from(u.output_tokens).unwrap_or(0),
            })
            .unwrap_or_default();

        debug!(model_id = %self.model_id, text_len = text.len(), "converse reply received");

        Ok(Completion { text, usage })
    }
}
