//! Endpoints backed by the canned query catalog.

use std::sync::Arc;

use crate::{
    api::{
        compensation::CurrencyQuery,
        shared::{self, ApiQuery},
    },
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use paygrid_core::constants::{DEFAULT_FROM_YEAR, DEFAULT_TO_YEAR, DEFAULT_TOP_PAID};
use paygrid_core::ResultRow;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct YearSpanQuery {
    #[serde(default = "default_from_year")]
    from_year: i32,
    #[serde(default = "default_to_year")]
    to_year: i32,
}

#[derive(Debug, Deserialize)]
pub struct TopPaidQuery {
    #[serde(default = "default_top")]
    top: i64,
    #[serde(
        default,
        rename = "EUR",
        alias = "eur",
        deserialize_with = "shared::deserialize_flag"
    )]
    to_reference: bool,
}

fn default_from_year() -> i32 {
    DEFAULT_FROM_YEAR
}

fn default_to_year() -> i32 {
    DEFAULT_TO_YEAR
}

fn default_top() -> i64 {
    DEFAULT_TOP_PAID
}

#[utoipa::path(
    get,
    path = "/total-compensation-by-region",
    params(("EUR" = Option<bool>, Query, description = "Convert amounts to EUR")),
    responses((status = 200, description = "Totals per region and year"))
)]
pub async fn get_total_compensation_by_region(
    ApiQuery(q): ApiQuery<CurrencyQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.total_compensation_by_region(q.to_reference)
    })
    .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/total-compensation-per-employee-latest",
    params(("EUR" = Option<bool>, Query, description = "Convert amounts to EUR")),
    responses((status = 200, description = "Totals per employee for the latest year"))
)]
pub async fn get_total_compensation_per_employee_latest(
    ApiQuery(q): ApiQuery<CurrencyQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.total_compensation_per_employee_latest(q.to_reference)
    })
    .await?;
    Ok(Json(rows))
}

/// Mean salary per job category in EUR, rounded to cents.
#[utoipa::path(
    get,
    path = "/average-salary-per-job-category",
    params(("year" = Option<i32>, Query, description = "Year, latest when omitted")),
    responses((status = 200, description = "One row per job category"))
)]
pub async fn get_average_salary_per_job_category(
    ApiQuery(q): ApiQuery<YearQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.average_salary_per_job_category(q.year)
    })
    .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/employees-changed-departments",
    params(
        ("from_year" = Option<i32>, Query, description = "First year, 2005 by default"),
        ("to_year" = Option<i32>, Query, description = "Last year, 2018 by default")
    ),
    responses((status = 200, description = "Employees whose department differs between the years"))
)]
pub async fn get_employees_changed_departments(
    ApiQuery(q): ApiQuery<YearSpanQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.employees_changed_departments(q.from_year, q.to_year)
    })
    .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/top-paid-per-department",
    params(
        ("top" = Option<i64>, Query, description = "Employees kept per department, 5 by default"),
        ("EUR" = Option<bool>, Query, description = "Convert amounts to EUR")
    ),
    responses((status = 200, description = "Highest salaries per department"))
)]
pub async fn get_top_paid_per_department(
    ApiQuery(q): ApiQuery<TopPaidQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.top_paid_per_department(q.top, q.to_reference)
    })
    .await?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/total-compensation-by-region",
            get(get_total_compensation_by_region),
        )
        .route(
            "/total-compensation-per-employee-latest",
            get(get_total_compensation_per_employee_latest),
        )
        .route(
            "/average-salary-per-job-category",
            get(get_average_salary_per_job_category),
        )
        .route(
            "/employees-changed-departments",
            get(get_employees_changed_departments),
        )
        .route("/top-paid-per-department", get(get_top_paid_per_department))
}
