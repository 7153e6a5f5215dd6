use reqwest::Client;
use thiserror::Error;

use crate::completion::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, UpstreamErrorBody,
};
use crate::helpers::dto::SummarizeRequest;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const SUMMARIZE_MODEL: &str = "gpt-3.5-turbo";

const MAX_SUMMARY_TOKENS: u32 = 500;
const USER_PROMPT_PREFIX: &str = "Please summarize this text: ";

#[derive(Debug, Error)]
pub enum CompletionError {
    /// The completion API answered with a non-success status.
    #[error("{0}")]
    Upstream(String),
    /// The API was unreachable or its response could not be decoded.
    #[error("An internal server error occurred.")]
    Transport(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(error: reqwest::Error) -> Self {
        CompletionError::Transport(error.to_string())
    }
}

#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    completions_url: String,
}

impl CompletionClient {
    pub fn new(completions_url: String) -> Self {
        let client = Client::new();

        Self {
            client,
            completions_url,
        }
    }

    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    /// One summarization round trip: a system message plus the prefixed user
    /// text, classified into `Ok(summary)` or a tagged error.
    pub async fn summarize(
        &self,
        api_key: &str,
        request: &SummarizeRequest,
    ) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: SUMMARIZE_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("{}{}", USER_PROMPT_PREFIX, request.text),
                },
            ],
            max_tokens: MAX_SUMMARY_TOKENS,
            temperature: request.temperature,
        };

        log::debug!("posting completion request to {}", self.completions_url);

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.map(|detail| detail.message))
                .unwrap_or_else(|| format!("OpenAI API error: {}", status.as_u16()));

            return Err(CompletionError::Upstream(message));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::Transport("completion response contained no choices".to_string())
            })
    }
}
