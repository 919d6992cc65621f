use std::sync::Arc;

use axum::extract::FromRequestParts;
use paygrid_core::compensation::CompensationServiceTrait;
use serde::{Deserialize, Deserializer};
use tokio::task;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// `Path` extractor whose rejection is an `ApiError` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `Query` extractor whose rejection is an `ApiError` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Runs a service call on the blocking pool; diesel connections are synchronous.
pub async fn run_blocking<T, F>(state: &Arc<AppState>, call: F) -> ApiResult<T>
where
    F: FnOnce(&dyn CompensationServiceTrait) -> paygrid_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let service = state.compensation_service.clone();
    let result = task::spawn_blocking(move || call(service.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to execute query task: {}", e)))?;
    Ok(result?)
}

/// Reads the `EUR` flag leniently: `true`/`false` in any case, `1`/`0`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, got '{}'",
            other
        ))),
    }
}

pub fn enabled() -> bool {
    true
}
