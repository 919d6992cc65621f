use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FROM_YEAR, DEFAULT_TO_YEAR};
use crate::errors::{Result, ValidationError};

/// Ordered pair of years bounding a comparison window.
///
/// Always holds `from_year <= to_year`; a reversed pair is swapped on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSpan {
    from_year: i32,
    to_year: i32,
}

impl YearSpan {
    pub fn new(from_year: i32, to_year: i32) -> Self {
        if from_year > to_year {
            Self {
                from_year: to_year,
                to_year: from_year,
            }
        } else {
            Self { from_year, to_year }
        }
    }

    pub fn from_year(&self) -> i32 {
        self.from_year
    }

    pub fn to_year(&self) -> i32 {
        self.to_year
    }
}

impl Default for YearSpan {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_YEAR, DEFAULT_TO_YEAR)
    }
}

/// Mean reference-currency salary of one job category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCategoryAverage {
    pub job_category: String,
    pub salary: Option<f64>,
}

pub(crate) fn validate_year(year: i32) -> Result<i32> {
    if year <= 0 {
        return Err(ValidationError::InvalidYear(year).into());
    }
    Ok(year)
}

pub(crate) fn validate_optional_year(year: Option<i32>) -> Result<Option<i32>> {
    year.map(validate_year).transpose()
}

pub(crate) fn validate_limit(limit: i64) -> Result<i64> {
    if limit < 1 {
        return Err(ValidationError::InvalidLimit(limit).into());
    }
    Ok(limit)
}
