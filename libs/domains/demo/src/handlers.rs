use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiQuery,
    errors::responses::{
        BadRequestQueryResponse, ConflictResponse, InternalServerErrorResponse,
        ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::TAG;
use crate::error::DemoResult;
use crate::models::{CreateParams, CreatedResponse, GREETING, ListParams, StoredRecord};
use crate::repository::DemoRepository;
use crate::service::DemoService;

/// OpenAPI documentation for the demo API
#[derive(OpenApi)]
#[openapi(
    paths(greeting, create_record, list_records),
    components(
        schemas(StoredRecord, CreatedResponse),
        responses(
            BadRequestQueryResponse,
            ConflictResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Demo record ingestion endpoints")
    )
)]
pub struct ApiDoc;

/// Create the demo router with all HTTP endpoints
pub fn router<R: DemoRepository + 'static>(service: DemoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(greeting))
        .route("/demo", get(list_records).post(create_record))
        .with_state(shared_service)
}

/// Fixed greeting
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greeting() -> &'static str {
    GREETING
}

/// Generate a record and store it directly or through the queue
#[utoipa::path(
    post,
    path = "/demo",
    tag = TAG,
    params(CreateParams),
    responses(
        (status = 201, description = "Record stored, or handed to the queue", body = CreatedResponse),
        (status = 400, response = BadRequestQueryResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_record<R: DemoRepository>(
    State(service): State<Arc<DemoService<R>>>,
    ApiQuery(params): ApiQuery<CreateParams>,
) -> DemoResult<impl IntoResponse> {
    service.create(params.use_queue).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::ok())))
}

/// Most recent records (at most 20)
#[utoipa::path(
    get,
    path = "/demo",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Most recent records", body = Vec<StoredRecord>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_records<R: DemoRepository>(
    State(service): State<Arc<DemoService<R>>>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> DemoResult<Json<Vec<StoredRecord>>> {
    let records = service
        .list(params.order_by_timestamp.unwrap_or(false))
        .await?;
    Ok(Json(records))
}
