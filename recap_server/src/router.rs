use std::{env, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use recap_core::completion::handler::{CompletionClient, OPENAI_API_URL};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    info::handler::info,
    state::ServerState,
    summarize::handler::summarize,
};

pub async fn router() -> Router {
    let completions_url = env::var("OPENAI_API_URL").unwrap_or_else(|_| OPENAI_API_URL.to_string());

    let state = Arc::new(ServerState::from(CompletionClient::new(completions_url)));

    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
