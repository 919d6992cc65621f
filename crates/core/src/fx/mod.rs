//! FX module - region rate tables and currency normalization of result rows.

mod currency_normalizer;
mod fx_errors;
mod region;

pub use currency_normalizer::{normalize, row_region};
pub use fx_errors::CurrencyError;
pub use region::Region;
