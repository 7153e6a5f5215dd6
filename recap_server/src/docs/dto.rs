use crate::{info, summarize};
use recap_core::helpers::dto::{ErrorResponse, SummarizeRequest, SummarizeResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(info::handler::info, summarize::handler::summarize,),
    components(schemas(
        info::dto::Info,
        SummarizeRequest,
        SummarizeResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;
