//! Create `producer` table.
//!
//! Single business entity: one row per rural producer, crop list stored
//! as a `text[]` column so the dashboard can unnest it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producer::Table)
                    .if_not_exists()
                    .col(pk_auto(Producer::Id))
                    .col(string_len(Producer::DocumentId, 32).not_null())
                    .col(string_len(Producer::Name, 255).not_null())
                    .col(string_len(Producer::FarmName, 255).not_null())
                    .col(string_len(Producer::City, 128).not_null())
                    .col(string_len(Producer::State, 64).not_null())
                    .col(double(Producer::TotalArea).not_null())
                    .col(double(Producer::CultivableArea).not_null())
                    .col(double(Producer::VegetationArea).not_null())
                    .col(
                        ColumnDef::new(Producer::Crops)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Producer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Producer {
    Table,
    Id,
    DocumentId,
    Name,
    FarmName,
    City,
    State,
    TotalArea,
    CultivableArea,
    VegetationArea,
    Crops,
}
