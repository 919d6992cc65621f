//! Canned SQL loaded from the query file.

mod catalog;

pub use catalog::{CannedQuery, QueryCatalog, BUNDLED_QUERIES};
