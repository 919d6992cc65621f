//! Paygrid Core - Domain entities, services, and traits.
//!
//! This crate holds the business logic of the compensation warehouse API.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod compensation;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod rows;

pub use rows::ResultRow;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
