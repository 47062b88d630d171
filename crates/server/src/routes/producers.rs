use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use models::dashboard::DashboardTotals;
use models::producer::{self, NewProducer, ProducerPatch};
use service::producer_service;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/producers", tag = "producers",
    request_body = crate::openapi::NewProducerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProducerDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewProducer>,
) -> Result<(StatusCode, Json<producer::Model>), ApiError> {
    let created = producer_service::create_producer(&state.db, input).await?;
    info!(id = created.id, "created producer");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/producers/{id}", tag = "producers",
    params(("id" = i32, Path, description = "Producer ID")),
    request_body = crate::openapi::ProducerPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProducerDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(patch): Json<ProducerPatch>,
) -> Result<Json<producer::Model>, ApiError> {
    let updated = producer_service::update_producer(&state.db, id, patch).await?;
    info!(id = updated.id, "updated producer");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/producers/{id}", tag = "producers",
    params(("id" = i32, Path, description = "Producer ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageBody),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // the deleted record is not echoed back; the body is a fixed message
    let deleted = producer_service::delete_producer(&state.db, id).await?;
    info!(id = deleted.id, "deleted producer");
    Ok(Json(serde_json::json!({ "message": "Producer deleted successfully" })))
}

#[utoipa::path(
    get, path = "/producers/{id}", tag = "producers",
    params(("id" = i32, Path, description = "Producer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProducerDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<producer::Model>, ApiError> {
    let found = producer_service::get_producer(&state.db, id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/producers", tag = "producers",
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ProducerDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<producer::Model>>, ApiError> {
    let all = producer_service::list_producers(&state.db).await?;
    info!(count = all.len(), "list producers");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/producers/dashboard", tag = "producers",
    responses(
        (status = 200, description = "OK", body = crate::openapi::DashboardTotalsDoc),
        (status = 500, description = "Dashboard Failed")
    )
)]
pub async fn dashboard(
    State(state): State<ServerState>,
) -> Result<Json<DashboardTotals>, ApiError> {
    let totals = producer_service::get_dashboard_totals(&state.db).await?;
    Ok(Json(totals))
}
