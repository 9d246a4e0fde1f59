use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::contact_query::{
    repository::mock::MemoryContactQueryRepository, ContactPolicy, ContactQueryRepository, ContactQueryService,
    DynContactQueryService,
};

pub mod contact_queries;

#[derive(Clone)]
pub struct ServerState {
    pub contacts: Arc<DynContactQueryService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ContactQueryRepository>, policy: ContactPolicy) -> Self {
        Self { contacts: Arc::new(ContactQueryService::new(repo, policy)) }
    }

    /// State backed by the in-memory repository.
    pub fn in_memory(policy: ContactPolicy) -> Self {
        Self::new(Arc::new(MemoryContactQueryRepository::new()), policy)
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/api/query", get(contact_queries::list).post(contact_queries::create))
        .route(
            "/api/query/:id",
            get(contact_queries::get).put(contact_queries::update).delete(contact_queries::delete),
        );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx 以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
