use serde::{Deserialize, Serialize};
use std::{env, fmt};
use utoipa::ToSchema;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes text. Provide concise, accurate summaries.";

pub enum Endpoints {
    Summarize,
}

fn default_temperature() -> f32 {
    0.3
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct SummarizeRequest {
    /// An absent field deserializes to empty and is rejected by validation.
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_system_prompt", rename = "systemPrompt")]
    pub system_prompt: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relay_host =
            env::var("RELAY_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        match self {
            &Endpoints::Summarize => write!(f, "{}/summarize", relay_host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_apply_when_fields_are_omitted() {
        let request: SummarizeRequest = serde_json::from_str(r#"{"text":"hello world"}"#).unwrap();

        assert_eq!(request.text, "hello world");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn test_request_accepts_camel_case_system_prompt() {
        let request: SummarizeRequest = serde_json::from_str(
            r#"{"text":"hello","temperature":0.7,"systemPrompt":"Be terse."}"#,
        )
        .unwrap();

        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.system_prompt, "Be terse.");
    }

    #[test]
    fn test_missing_text_deserializes_to_empty() {
        let request: SummarizeRequest = serde_json::from_str("{}").unwrap();

        assert!(request.text.is_empty());
    }
}
