use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/olap.db";
const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_TIMEOUT_MS: u64 = 30000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Canned query file; the bundled queries are used when unset.
    pub queries_path: Option<PathBuf>,
    pub db_pool_size: u32,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PAYGRID_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid PAYGRID_LISTEN_ADDR")?;
        let db_path = std::env::var("PAYGRID_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.into());
        let queries_path = std::env::var("PAYGRID_QUERIES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let db_pool_size: u32 = std::env::var("PAYGRID_DB_POOL_SIZE")
            .unwrap_or_else(|_| DEFAULT_POOL_SIZE.to_string())
            .parse()
            .context("Invalid PAYGRID_DB_POOL_SIZE")?;
        if db_pool_size == 0 {
            anyhow::bail!("PAYGRID_DB_POOL_SIZE must be at least 1");
        }
        let cors_allow = std::env::var("PAYGRID_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PAYGRID_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .context("Invalid PAYGRID_REQUEST_TIMEOUT_MS")?;
        Ok(Self {
            listen_addr,
            db_path,
            queries_path,
            db_pool_size,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
