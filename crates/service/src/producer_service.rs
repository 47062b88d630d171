use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::dashboard::{self, DashboardTotals};
use models::producer::{self, NewProducer, ProducerPatch};

/// Create a producer. No checks beyond what the storage layer enforces.
pub async fn create_producer(
    db: &DatabaseConnection,
    input: NewProducer,
) -> Result<producer::Model, ServiceError> {
    let created = producer::create(db, input).await?;
    Ok(created)
}

/// Apply a partial update; a missing id is a not-found error.
pub async fn update_producer(
    db: &DatabaseConnection,
    id: i32,
    patch: ProducerPatch,
) -> Result<producer::Model, ServiceError> {
    producer::update(db, id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found("Producer"))
}

/// Hard delete; returns the record as it was before deletion.
pub async fn delete_producer(
    db: &DatabaseConnection,
    id: i32,
) -> Result<producer::Model, ServiceError> {
    producer::delete(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Producer"))
}

/// Get producer by id; a miss is a not-found error.
pub async fn get_producer(
    db: &DatabaseConnection,
    id: i32,
) -> Result<producer::Model, ServiceError> {
    producer::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Producer"))
}

/// Every producer, store default order.
pub async fn list_producers(
    db: &DatabaseConnection,
) -> Result<Vec<producer::Model>, ServiceError> {
    let all = producer::get_all(db).await?;
    Ok(all)
}

/// Aggregate dashboard report over all producers.
pub async fn get_dashboard_totals(
    db: &DatabaseConnection,
) -> Result<DashboardTotals, ServiceError> {
    let totals = dashboard::totals(db).await?;
    Ok(totals)
}
