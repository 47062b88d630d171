//! Aggregate dashboard queries over the producer table.
//!
//! Four independent queries on the same connection, no transaction between
//! them; minor skew under concurrent writes is acceptable.
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect,
};
use serde::Serialize;

use crate::errors::ModelError;
use crate::producer;

/// Per-state record count.
#[derive(Clone, Debug, PartialEq, Serialize, FromQueryResult)]
pub struct StateCount {
    pub state: String,
    pub count: i64,
}

/// Per-crop contribution count; a record with three crops contributes three
/// times (duplicates within a record each count).
#[derive(Clone, Debug, PartialEq, Serialize, FromQueryResult)]
pub struct CropCount {
    pub crop: String,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub total_farms: u64,
    pub total_area: f64,
    pub total_by_state: Vec<StateCount>,
    pub total_by_crop: Vec<CropCount>,
}

#[derive(FromQueryResult)]
struct SumRow {
    total_area: Option<f64>,
}

pub async fn totals(db: &DatabaseConnection) -> Result<DashboardTotals, ModelError> {
    let total_farms = producer::Entity::find()
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;

    // SUM over an empty table yields SQL NULL; coalesce to 0 here.
    let sum = producer::Entity::find()
        .select_only()
        .column_as(producer::Column::TotalArea.sum(), "total_area")
        .into_model::<SumRow>()
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let total_area = sum.and_then(|r| r.total_area).unwrap_or(0.0);

    let total_by_state = producer::Entity::find()
        .select_only()
        .column(producer::Column::State)
        .column_as(producer::Column::Id.count(), "count")
        .group_by(producer::Column::State)
        .into_model::<StateCount>()
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;

    // One contribution per array element; no builder spelling exists for
    // UNNEST, so the expression itself is custom SQL.
    let total_by_crop = producer::Entity::find()
        .select_only()
        .column_as(Expr::cust("UNNEST(crops)"), "crop")
        .column_as(producer::Column::Id.count(), "count")
        .group_by(Expr::cust("crop"))
        .into_model::<CropCount>()
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;

    Ok(DashboardTotals { total_farms, total_area, total_by_state, total_by_crop })
}
