//! Row-oriented result sets returned by the warehouse queries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// One result row: column name to JSON value.
///
/// Serializes as a plain JSON object so a `Vec<ResultRow>` is the response
/// body of every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow(Map<String, Value>);

impl ResultRow {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds a row from any type that serializes to a JSON object.
    pub fn from_serializable<T: Serialize>(record: &T) -> Result<Self> {
        Self::try_from(serde_json::to_value(record)?)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn get_mut(&mut self, column: &str) -> Option<&mut Value> {
        self.0.get_mut(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Sets `column`, returning the previous value if there was one.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(column.into(), value.into())
    }
}

impl TryFrom<Value> for ResultRow {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::Unexpected(format!(
                "Expected a JSON object for a result row, got {}",
                other
            ))),
        }
    }
}
