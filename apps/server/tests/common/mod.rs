#![allow(dead_code)]

use std::{path::PathBuf, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use diesel::connection::SimpleConnection;
use paygrid_server::{api::app_router, build_state, config::Config};
use paygrid_storage_sqlite::{create_pool, get_connection, init, run_migrations};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const WAREHOUSE: &str =
    include_str!("../../../../crates/storage-sqlite/tests/fixtures/warehouse.sql");

pub struct TestApp {
    pub router: Router,
    pub db_path: PathBuf,
    // Dropping the directory removes the database.
    _dir: TempDir,
}

pub fn test_config(db_path: &str) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: db_path.to_string(),
        queries_path: None,
        db_pool_size: 2,
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    }
}

/// Creates the schema and loads `sql` into a fresh database file.
pub fn seed_database(db_path: &str, sql: &str) {
    let db_path = init(db_path).unwrap();
    let pool = create_pool(&db_path, 1).unwrap();
    run_migrations(&pool).unwrap();
    get_connection(&pool).unwrap().batch_execute(sql).unwrap();
}

pub async fn seeded_app() -> TestApp {
    seeded_app_with("").await
}

/// Seeded warehouse plus `extra_sql` run after the fixture.
pub async fn seeded_app_with(extra_sql: &str) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("olap.db");
    let db_str = db_path.to_str().unwrap();
    seed_database(db_str, &format!("{}\n{}", WAREHOUSE, extra_sql));

    let config = test_config(db_str);
    let state = build_state(&config).await.unwrap();
    let router = app_router(state, &config).unwrap();
    TestApp {
        router,
        db_path,
        _dir: dir,
    }
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn rows(body: &Value) -> &Vec<Value> {
    body.as_array().expect("expected a JSON array")
}

pub fn find<'a>(body: &'a Value, column: &str, value: Value) -> &'a Value {
    rows(body)
        .iter()
        .find(|row| row[column] == value)
        .unwrap_or_else(|| panic!("no row with {} = {}", column, value))
}
