use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod producers;

#[cfg_attr(not(feature = "mock"), derive(Clone))]
pub struct ServerState {
    pub db: DatabaseConnection,
}

// sea-orm drops `Clone` from `DatabaseConnection` when its `mock` feature is on,
// even though every variant still holds a cloneable handle, so the derive above
// is spelled out by hand for mock builds.
#[cfg(feature = "mock")]
impl Clone for ServerState {
    fn clone(&self) -> Self {
        let db = match &self.db {
            DatabaseConnection::SqlxPostgresPoolConnection(conn) => {
                DatabaseConnection::SqlxPostgresPoolConnection(conn.clone())
            }
            DatabaseConnection::MockDatabaseConnection(conn) => {
                DatabaseConnection::MockDatabaseConnection(conn.clone())
            }
            DatabaseConnection::Disconnected => DatabaseConnection::Disconnected,
        };
        Self { db }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: producer routes, health and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .route("/producers", get(producers::list).post(producers::create))
        .route("/producers/dashboard", get(producers::dashboard))
        .route(
            "/producers/:id",
            get(producers::get_by_id).put(producers::update).delete(producers::remove),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
