use std::{env, sync::Arc};

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use recap_core::helpers::dto::{SummarizeRequest, SummarizeResponse};

use crate::{error::ErrorServer, state::ServerState};

const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeRequest,
    description = "Summarize",
    responses(
        (status = 200, description = "Success", body = SummarizeResponse),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Internal Server Error"),
    )
)]
#[axum::debug_handler]
pub async fn summarize(
    State(server_state): State<Arc<ServerState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ErrorServer> {
    if request.text.trim().is_empty() {
        log::warn!("summarize request rejected: empty text");
        return Err(ErrorServer {
            error: "Please provide text to summarize.".to_string(),
            status: StatusCode::BAD_REQUEST.into(),
        });
    }

    // Read at request time so the key can be configured after startup.
    let api_key = env::var(API_KEY_ENV).map_err(|_| {
        log::error!("{} is not set, refusing to call the completion API", API_KEY_ENV);
        ErrorServer {
            error: "OpenAI API key not configured. Please add OPENAI_API_KEY to your environment variables.".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.into(),
        }
    })?;

    let summary = server_state
        .completions()
        .summarize(&api_key, &request)
        .await
        .map_err(|e| {
            log::error!("summarize failed: {:?}", e);
            ErrorServer {
                error: e.to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR.into(),
            }
        })?;

    Ok(Json(SummarizeResponse { summary }))
}
