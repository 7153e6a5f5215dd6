use log::{debug, error};
use recap_core::helpers::dto::{ErrorResponse, SummarizeRequest, SummarizeResponse};
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay answered with an error payload.
    #[error("{0}")]
    Api(String),
    /// The relay was unreachable or returned something unreadable.
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Network(error.to_string())
    }
}

#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: String) -> Self {
        let client = Client::new();

        Self { client, url }
    }

    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<String, RelayError> {
        debug!("posting summarize request to {}", self.url);

        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error)
                .unwrap_or_else(|| "An unknown API error occurred.".to_string());

            error!("relay returned {}: {}", status, message);

            return Err(RelayError::Api(message));
        }

        let body: SummarizeResponse = response.json().await?;

        Ok(body.summary)
    }
}
