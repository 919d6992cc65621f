use std::sync::Arc;

use crate::{
    api::shared::{self, ApiPath, ApiQuery},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use paygrid_core::ResultRow;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EmployeeQuery {
    year: Option<i32>,
    #[serde(
        default,
        rename = "EUR",
        alias = "eur",
        deserialize_with = "shared::deserialize_flag"
    )]
    to_reference: bool,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentQuery {
    year: Option<i32>,
    #[serde(
        default = "shared::enabled",
        rename = "EUR",
        alias = "eur",
        deserialize_with = "shared::deserialize_flag"
    )]
    to_reference: bool,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyQuery {
    #[serde(
        default,
        rename = "EUR",
        alias = "eur",
        deserialize_with = "shared::deserialize_flag"
    )]
    pub to_reference: bool,
}

/// Compensation history of one employee, or a single year when `year` is set.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee id"),
        ("year" = Option<i32>, Query, description = "Restrict to one year"),
        ("EUR" = Option<bool>, Query, description = "Convert amounts to EUR")
    ),
    responses((status = 200, description = "Compensation rows"))
)]
pub async fn get_employee_compensation(
    ApiPath(id): ApiPath<i64>,
    ApiQuery(q): ApiQuery<EmployeeQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.employee_compensation(id, q.year, q.to_reference)
    })
    .await?;
    Ok(Json(rows))
}

/// Department roster for a year, the latest loaded year by default.
#[utoipa::path(
    get,
    path = "/departments/{id}",
    params(
        ("id" = i64, Path, description = "Department id"),
        ("year" = Option<i32>, Query, description = "Year, latest when omitted"),
        ("EUR" = Option<bool>, Query, description = "Convert amounts to EUR, on by default")
    ),
    responses((status = 200, description = "Compensation rows"))
)]
pub async fn get_department_roster(
    ApiPath(id): ApiPath<i64>,
    ApiQuery(q): ApiQuery<DepartmentQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.department_roster(id, q.year, q.to_reference)
    })
    .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/years/{year}",
    params(
        ("year" = i32, Path, description = "Calendar year"),
        ("EUR" = Option<bool>, Query, description = "Convert amounts to EUR")
    ),
    responses((status = 200, description = "Compensation rows"))
)]
pub async fn get_year_compensation(
    ApiPath(year): ApiPath<i32>,
    ApiQuery(q): ApiQuery<CurrencyQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ResultRow>>> {
    let rows = shared::run_blocking(&state, move |service| {
        service.year_compensation(year, q.to_reference)
    })
    .await?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/employees/{id}", get(get_employee_compensation))
        .route("/departments/{id}", get(get_department_roster))
        .route("/years/{year}", get(get_year_compensation))
}
