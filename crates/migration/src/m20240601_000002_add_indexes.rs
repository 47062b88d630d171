use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Producer: index on state (dashboard group-by)
        manager
            .create_index(
                Index::create()
                    .name("idx_producer_state")
                    .table(Producer::Table)
                    .col(Producer::State)
                    .to_owned(),
            )
            .await?;

        // Producer: index on document_id (business identifier lookups)
        manager
            .create_index(
                Index::create()
                    .name("idx_producer_document")
                    .table(Producer::Table)
                    .col(Producer::DocumentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_producer_state").table(Producer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_producer_document").table(Producer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Producer { Table, State, DocumentId }
