mod common;

use common::{find, get, rows, seeded_app, seeded_app_with};
use serde_json::json;

#[tokio::test]
async fn employee_history_in_native_currency() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/employees/2").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 2);
    let latest = find(&body, "year", json!(2018));
    assert_eq!(latest["yearly_salary"], json!(100000.0));
    assert_eq!(latest["currency"], json!("USD"));
}

#[tokio::test]
async fn employee_snapshot_in_reference_currency() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/employees/2?year=2018&EUR=true").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 1);
    assert_eq!(body[0]["yearly_salary"], json!(86000.0));
    assert_eq!(body[0]["bonus"], json!(8600.0));
    assert_eq!(body[0]["currency"], json!("EUR"));
}

#[tokio::test]
async fn lowercase_flag_is_accepted() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/employees/3?year=2018&eur=true").await;
    assert_eq!(status, 200);
    assert_eq!(body[0]["total_compensation"], json!(48000.0));
}

#[tokio::test]
async fn department_roster_converts_by_default() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/departments/20").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 2);
    assert_eq!(find(&body, "employee_id", json!(2))["yearly_salary"], json!(86000.0));

    let (_, native) = get(&app.router, "/departments/20?EUR=false").await;
    let ben = find(&native, "employee_id", json!(2));
    assert_eq!(ben["yearly_salary"], json!(100000.0));
    assert_eq!(ben["currency"], json!("USD"));
}

#[tokio::test]
async fn year_listing_and_validation() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/years/2018").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 5);

    let (status, body) = get(&app.router, "/years/1999").await;
    assert_eq!(status, 200);
    assert!(rows(&body).is_empty());

    let (status, body) = get(&app.router, "/years/0").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn malformed_parameters_are_rejected() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/employees/abc").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
    assert!(body["message"].is_string());

    let (status, body) = get(&app.router, "/employees/1?EUR=maybe").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("maybe"));

    let (status, body) = get(&app.router, "/top-paid-per-department?top=many").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn both_flag_spellings_together_are_rejected() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/years/2018?EUR=true&eur=true").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("duplicate field"));
}

#[tokio::test]
async fn region_totals_in_reference_currency() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/total-compensation-by-region?EUR=true").await;
    assert_eq!(status, 200);
    assert!(rows(&body).iter().all(|row| row["currency"] == json!("EUR")));

    let asia_2018 = rows(&body)
        .iter()
        .find(|row| row["region_name"] == json!("Asia") && row["year"] == json!(2018))
        .unwrap();
    assert_eq!(asia_2018["total_compensation"], json!(48000.0));
}

#[tokio::test]
async fn latest_totals_per_employee() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/total-compensation-per-employee-latest").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 5);
    assert_eq!(find(&body, "employee_id", json!(5))["currency"], json!("ZAR"));
}

#[tokio::test]
async fn average_salary_per_job_category() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/average-salary-per-job-category").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([
            { "job_category": "Engineering", "salary": 83000.0 },
            { "job_category": "Finance", "salary": 24000.0 },
            { "job_category": "Sales", "salary": 49200.0 }
        ])
    );

    let (_, older) = get(&app.router, "/average-salary-per-job-category?year=2005").await;
    assert_eq!(find(&older, "job_category", json!("Engineering"))["salary"], json!(60200.0));
}

#[tokio::test]
async fn department_changes_with_default_and_swapped_years() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/employees-changed-departments").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 1);
    assert_eq!(body[0]["from_department"], json!("Sales"));
    assert_eq!(body[0]["to_department"], json!("Engineering"));
    assert!(body[0].get("currency").is_none());

    let (_, forward) = get(
        &app.router,
        "/employees-changed-departments?from_year=2012&to_year=2018",
    )
    .await;
    let (_, reversed) = get(
        &app.router,
        "/employees-changed-departments?from_year=2018&to_year=2012",
    )
    .await;
    assert_eq!(rows(&forward).len(), 2);
    assert_eq!(forward, reversed);
}

#[tokio::test]
async fn top_paid_per_department() {
    let app = seeded_app().await;

    let (status, body) = get(&app.router, "/top-paid-per-department?top=1&EUR=true").await;
    assert_eq!(status, 200);
    assert_eq!(rows(&body).len(), 3);
    assert_eq!(find(&body, "full_name", json!("Ben Carter"))["salary"], json!(86000.0));

    let (_, all) = get(&app.router, "/top-paid-per-department").await;
    assert_eq!(rows(&all).len(), 5);

    let (status, _) = get(&app.router, "/top-paid-per-department?top=0").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn unknown_region_fails_the_request() {
    let app = seeded_app_with(
        "INSERT INTO location_dim (surrogate_location_id, country_name, region_name) \
             VALUES (6, 'Nowhere', 'Atlantis');
         INSERT INTO employee_dim (surrogate_employee_id, employee_id, full_name) \
             VALUES (6, 6, 'Finn Gale');
         INSERT INTO employee_yearly_salary_fact VALUES (6, 3, 1, 1, 6, 1000, 0, 1000);",
    )
    .await;

    let (status, body) = get(&app.router, "/years/2018").await;
    assert_eq!(status, 500);
    assert!(body["message"].as_str().unwrap().contains("Atlantis"));

    // Rows outside the bad year still convert.
    let (status, _) = get(&app.router, "/years/2012?EUR=true").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn invalid_query_file_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("olap.db");
    let queries = dir.path().join("queries.sql");
    std::fs::write(&queries, "-- name: total_compensation_by_region\nSELECT 1\n").unwrap();

    let mut config = common::test_config(db_path.to_str().unwrap());
    config.queries_path = Some(queries);

    let err = paygrid_server::build_state(&config).await.err().unwrap();
    assert!(err.to_string().contains("Missing canned query"));
}
