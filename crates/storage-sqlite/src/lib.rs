//! SQLite storage implementation for Paygrid.
//!
//! This crate is the only place where Diesel dependencies exist. It implements
//! the repository trait defined in `paygrid-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations for the warehouse star schema
//! - The canned query catalog
//! - Row models with Diesel derives
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod compensation;
pub mod db;
pub mod errors;
pub mod queries;

pub use compensation::CompensationRepository;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use queries::{CannedQuery, QueryCatalog, BUNDLED_QUERIES};

// Re-export from paygrid-core for convenience
pub use paygrid_core::errors::{DatabaseError, Error, Result};
