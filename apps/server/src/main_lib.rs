use std::sync::Arc;

use crate::config::Config;
use paygrid_core::compensation::{CompensationService, CompensationServiceTrait};
use paygrid_storage_sqlite::{db, CompensationRepository, QueryCatalog};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub compensation_service: Arc<dyn CompensationServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let catalog = Arc::new(QueryCatalog::from_optional_path(
        config.queries_path.as_deref(),
    )?);
    match &config.queries_path {
        Some(path) => tracing::info!("Canned queries loaded from {}", path.display()),
        None => tracing::info!("Using bundled canned queries"),
    }

    let pool = db::create_pool(&db_path, config.db_pool_size)?;
    db::run_migrations(&pool)?;

    let compensation_repository = Arc::new(CompensationRepository::new(pool, catalog));
    let compensation_service = Arc::new(CompensationService::new(compensation_repository));

    Ok(Arc::new(AppState {
        compensation_service,
    }))
}
