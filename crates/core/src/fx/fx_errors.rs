use thiserror::Error;

/// Errors raised while normalizing result rows.
///
/// Every variant is a broken assumption about the query result (a schema or
/// data problem), never a condition callers are expected to recover from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurrencyError {
    #[error("Unknown region label '{0}'")]
    UnknownRegion(String),

    #[error("Result row is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Column '{column}' holds a non-numeric amount: {value}")]
    InvalidAmount { column: String, value: String },

    #[error("Converted amount in column '{0}' is not representable")]
    Unrepresentable(String),
}
