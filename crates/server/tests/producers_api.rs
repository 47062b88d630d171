use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use models::producer;
use server::routes::{self, ServerState};

fn app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState { db }, CorsLayer::very_permissive())
}

fn sample(id: i32) -> producer::Model {
    producer::Model {
        id,
        document_id: "12345678900".into(),
        name: "Test Producer".into(),
        farm_name: "Fazenda Boa Vista".into(),
        city: "Ribeirao Preto".into(),
        state: "SP".into(),
        total_area: 120.0,
        cultivable_area: 80.0,
        vegetation_area: 40.0,
        crops: vec!["Soja".into(), "Milho".into()],
    }
}

fn row(pairs: Vec<(&'static str, Value)>) -> BTreeMap<&'static str, Value> {
    pairs.into_iter().collect()
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = res.into_body().collect().await.expect("read body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn post_creates_producer_with_201() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample(1)]])
        .into_connection();

    let res = app(db)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/producers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Test Producer"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = body_json(res).await;
    assert_eq!(body["name"], "Test Producer");
    assert!(body["id"].is_number());
    // camelCase contract on the wire
    assert_eq!(body["farmName"], "Fazenda Boa Vista");
    assert_eq!(body["totalArea"], 120.0);
}

#[tokio::test]
async fn put_updates_name_and_preserves_other_fields() {
    let updated = producer::Model { name: "Updated Producer".into(), ..sample(1) };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample(1)], vec![updated]])
        .into_connection();

    let res = app(db)
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/producers/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Updated Producer"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["name"], "Updated Producer");
    assert_eq!(body["farmName"], "Fazenda Boa Vista");
    assert_eq!(body["state"], "SP");
}

#[tokio::test]
async fn put_missing_id_returns_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<producer::Model>::new()])
        .into_connection();

    let res = app(db)
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/producers/42")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"ghost"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Producer not found");
}

#[tokio::test]
async fn delete_returns_fixed_message_body() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample(1)]])
        .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
        .into_connection();

    let res = app(db)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/producers/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    // the deleted record is not echoed back
    assert_eq!(body, serde_json::json!({ "message": "Producer deleted successfully" }));
}

#[tokio::test]
async fn get_missing_id_returns_404_with_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<producer::Model>::new()])
        .into_connection();

    let res = app(db)
        .oneshot(Request::builder().uri("/producers/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_json(res).await;
    assert_eq!(body["message"], "Producer not found");
}

#[tokio::test]
async fn get_all_on_empty_store_returns_empty_array() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<producer::Model>::new()])
        .into_connection();

    let res = app(db)
        .oneshot(Request::builder().uri("/producers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, serde_json::json!([]));
}

#[tokio::test]
async fn dashboard_reports_camel_case_totals() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(vec![("num_items", Value::BigInt(Some(3)))])]])
        .append_query_results([vec![row(vec![("total_area", Value::Double(Some(130.0)))])]])
        .append_query_results([vec![
            row(vec![("state", "A".into()), ("count", Value::BigInt(Some(2)))]),
            row(vec![("state", "B".into()), ("count", Value::BigInt(Some(1)))]),
        ]])
        .append_query_results([vec![
            row(vec![("crop", "Soja".into()), ("count", Value::BigInt(Some(2)))]),
            row(vec![("crop", "Milho".into()), ("count", Value::BigInt(Some(1)))]),
        ]])
        .into_connection();

    let res = app(db)
        .oneshot(Request::builder().uri("/producers/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["totalFarms"], 3);
    assert_eq!(body["totalArea"], 130.0);
    assert_eq!(body["totalByState"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalByCrop"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn storage_failure_maps_to_500_with_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".into())])
        .into_connection();

    let res = app(db)
        .oneshot(Request::builder().uri("/producers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(res).await;
    assert!(body["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn health_answers_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let res = app(db)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["status"], "ok");
}
