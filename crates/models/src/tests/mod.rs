/// Database connection and configuration tests
pub mod db_tests;



/// Live CRUD round-trip combining migrations and the real store
pub mod live_tests {
    use crate::{dashboard, db, producer};
    use anyhow::Result;
    use migration::MigratorTrait;
    use uuid::Uuid;

    #[tokio::test]
    async fn producer_crud_round_trip() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }

        let db = match db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        migration::Migrator::up(&db, None).await?;

        let doc = format!("doc_{}", Uuid::new_v4());
        let created = producer::create(
            &db,
            producer::NewProducer {
                document_id: doc.clone(),
                name: "Maria Silva".into(),
                farm_name: "Fazenda Boa Vista".into(),
                city: "Ribeirao Preto".into(),
                state: "SP".into(),
                total_area: 120.0,
                cultivable_area: 80.0,
                vegetation_area: 40.0,
                crops: vec!["Soja".into(), "Milho".into()],
            },
        )
        .await?;
        assert!(created.id > 0);
        assert_eq!(created.document_id, doc);

        let found = producer::get_by_id(&db, created.id).await?.unwrap();
        assert_eq!(found, created);

        let updated = producer::update(
            &db,
            created.id,
            producer::ProducerPatch { name: Some("Maria Souza".into()), ..Default::default() },
        )
        .await?
        .unwrap();
        assert_eq!(updated.name, "Maria Souza");
        assert_eq!(updated.farm_name, created.farm_name);

        let totals = dashboard::totals(&db).await?;
        assert!(totals.total_farms >= 1);
        assert!(totals.total_area >= 120.0);

        let deleted = producer::delete(&db, created.id).await?.unwrap();
        assert_eq!(deleted.id, created.id);
        assert!(producer::get_by_id(&db, created.id).await?.is_none());

        Ok(())
    }
}
