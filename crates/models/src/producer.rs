//! Producer entity and its CRUD operations.
//!
//! The producer table is the only entity in the system: one row per rural
//! producer, with the crop list stored as a Postgres `text[]` column.
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub document_id: String,
    pub name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area: f64,
    pub cultivable_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Candidate record for creation. Every field defaults so a partial body
/// like `{"name": "Test Producer"}` is accepted; the store assigns the id.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProducer {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub farm_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub cultivable_area: f64,
    #[serde(default)]
    pub vegetation_area: f64,
    #[serde(default)]
    pub crops: Vec<String>,
}

/// Partial update. `None` leaves the stored value unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerPatch {
    pub document_id: Option<String>,
    pub name: Option<String>,
    pub farm_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub total_area: Option<f64>,
    pub cultivable_area: Option<f64>,
    pub vegetation_area: Option<f64>,
    pub crops: Option<Vec<String>>,
}

pub async fn create(
    db: &DatabaseConnection,
    input: NewProducer,
) -> Result<Model, errors::ModelError> {
    info!(name = %input.name, farm_name = %input.farm_name, "saving new producer");
    let am = ActiveModel {
        id: NotSet,
        document_id: Set(input.document_id),
        name: Set(input.name),
        farm_name: Set(input.farm_name),
        city: Set(input.city),
        state: Set(input.state),
        total_area: Set(input.total_area),
        cultivable_area: Set(input.cultivable_area),
        vegetation_area: Set(input.vegetation_area),
        crops: Set(input.crops),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Read-merge-write: fetch the row, apply the patch, persist the merge.
/// Returns `Ok(None)` when the id does not exist.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    patch: ProducerPatch,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(mut merged) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };

    if let Some(v) = patch.document_id {
        merged.document_id = v;
    }
    if let Some(v) = patch.name {
        merged.name = v;
    }
    if let Some(v) = patch.farm_name {
        merged.farm_name = v;
    }
    if let Some(v) = patch.city {
        merged.city = v;
    }
    if let Some(v) = patch.state {
        merged.state = v;
    }
    if let Some(v) = patch.total_area {
        merged.total_area = v;
    }
    if let Some(v) = patch.cultivable_area {
        merged.cultivable_area = v;
    }
    if let Some(v) = patch.vegetation_area {
        merged.vegetation_area = v;
    }
    if let Some(v) = patch.crops {
        merged.crops = v;
    }

    let am = ActiveModel {
        id: Unchanged(merged.id),
        document_id: Set(merged.document_id),
        name: Set(merged.name),
        farm_name: Set(merged.farm_name),
        city: Set(merged.city),
        state: Set(merged.state),
        total_area: Set(merged.total_area),
        cultivable_area: Set(merged.cultivable_area),
        vegetation_area: Set(merged.vegetation_area),
        crops: Set(merged.crops),
    };
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

/// Hard delete. Returns the row as it was immediately before deletion,
/// or `Ok(None)` when the id does not exist.
pub async fn delete(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(found))
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All rows, store default order.
pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().all(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
