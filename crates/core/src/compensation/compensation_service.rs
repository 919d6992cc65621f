use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde_json::Value;

use super::compensation_model::{
    validate_limit, validate_optional_year, validate_year, JobCategoryAverage, YearSpan,
};
use super::compensation_traits::{CompensationRepositoryTrait, CompensationServiceTrait};
use crate::constants::{AVERAGE_DECIMAL_PRECISION, COMPENSATION_AMOUNT_COLUMNS};
use crate::errors::{Error, Result};
use crate::fx::normalize;
use crate::rows::ResultRow;

const TOTAL_COMPENSATION_COLUMNS: [&str; 1] = ["total_compensation"];
const SALARY_COLUMNS: [&str; 1] = ["salary"];
const JOB_CATEGORY_COLUMN: &str = "job_category";

/// Single service behind every compensation endpoint.
pub struct CompensationService {
    repository: Arc<dyn CompensationRepositoryTrait>,
}

impl CompensationService {
    pub fn new(repository: Arc<dyn CompensationRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn normalized(
        rows: Vec<ResultRow>,
        amount_columns: &[&str],
        to_reference: bool,
    ) -> Result<Vec<ResultRow>> {
        Ok(normalize(rows, amount_columns, to_reference)?)
    }
}

impl CompensationServiceTrait for CompensationService {
    fn check_ready(&self) -> Result<()> {
        self.repository.ping()
    }

    fn employee_compensation(
        &self,
        employee_id: i64,
        year: Option<i32>,
        to_reference: bool,
    ) -> Result<Vec<ResultRow>> {
        let year = validate_optional_year(year)?;
        let rows = self.repository.employee_compensation(employee_id, year)?;
        Self::normalized(rows, &COMPENSATION_AMOUNT_COLUMNS, to_reference)
    }

    fn department_roster(
        &self,
        department_id: i64,
        year: Option<i32>,
        to_reference: bool,
    ) -> Result<Vec<ResultRow>> {
        let year = validate_optional_year(year)?;
        let rows = self.repository.department_roster(department_id, year)?;
        Self::normalized(rows, &COMPENSATION_AMOUNT_COLUMNS, to_reference)
    }

    fn year_compensation(&self, year: i32, to_reference: bool) -> Result<Vec<ResultRow>> {
        let rows = self.repository.year_compensation(validate_year(year)?)?;
        Self::normalized(rows, &COMPENSATION_AMOUNT_COLUMNS, to_reference)
    }

    fn total_compensation_by_region(&self, to_reference: bool) -> Result<Vec<ResultRow>> {
        let rows = self.repository.total_compensation_by_region()?;
        Self::normalized(rows, &TOTAL_COMPENSATION_COLUMNS, to_reference)
    }

    fn total_compensation_per_employee_latest(
        &self,
        to_reference: bool,
    ) -> Result<Vec<ResultRow>> {
        let rows = self.repository.total_compensation_per_employee_latest()?;
        Self::normalized(rows, &TOTAL_COMPENSATION_COLUMNS, to_reference)
    }

    fn average_salary_per_job_category(&self, year: Option<i32>) -> Result<Vec<ResultRow>> {
        let year = validate_optional_year(year)?;
        let rows = self.repository.job_category_salaries(year)?;
        let converted = Self::normalized(rows, &SALARY_COLUMNS, true)?;
        average_by_category(&converted)?
            .iter()
            .map(ResultRow::from_serializable)
            .collect()
    }

    fn employees_changed_departments(
        &self,
        from_year: i32,
        to_year: i32,
    ) -> Result<Vec<ResultRow>> {
        let span = YearSpan::new(validate_year(from_year)?, validate_year(to_year)?);
        debug!(
            "Looking up department changes between {} and {}",
            span.from_year(),
            span.to_year()
        );
        self.repository.employees_changed_departments(span)
    }

    fn top_paid_per_department(&self, top: i64, to_reference: bool) -> Result<Vec<ResultRow>> {
        let rows = self.repository.top_paid_per_department(validate_limit(top)?)?;
        Self::normalized(rows, &SALARY_COLUMNS, to_reference)
    }
}

/// Running salary sum of one job category.
///
/// `exact` is dropped once a salary or the sum leaves the Decimal range; the
/// float sum then carries the mean.
#[derive(Default)]
struct CategorySum {
    exact: Option<Decimal>,
    float: f64,
    count: u32,
}

impl CategorySum {
    fn add(&mut self, salary: f64) {
        self.exact = match (self.count, self.exact) {
            (0, _) => Decimal::from_f64(salary),
            (_, Some(sum)) => Decimal::from_f64(salary).and_then(|s| sum.checked_add(s)),
            (_, None) => None,
        };
        self.float += salary;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        match self.exact {
            Some(sum) => (sum / Decimal::from(self.count))
                .round_dp(AVERAGE_DECIMAL_PRECISION)
                .to_f64(),
            // Floats this large carry no fractional digits to round.
            None => Some(self.float / f64::from(self.count)),
        }
    }
}

/// Groups converted salaries by job category and averages them.
///
/// Null salaries are skipped; a category with no salary at all averages to
/// `None`. Means are rounded half-to-even and categories come out sorted.
fn average_by_category(rows: &[ResultRow]) -> Result<Vec<JobCategoryAverage>> {
    let mut totals: BTreeMap<String, CategorySum> = BTreeMap::new();

    for row in rows {
        let category = match row.get(JOB_CATEGORY_COLUMN) {
            Some(Value::String(category)) => category.clone(),
            Some(Value::Null) | None => {
                return Err(Error::Unexpected(format!(
                    "Salary row without a '{}'",
                    JOB_CATEGORY_COLUMN
                )))
            }
            Some(other) => other.to_string(),
        };
        let entry = totals.entry(category).or_default();

        if let Some(Value::Number(number)) = row.get(SALARY_COLUMNS[0]) {
            if let Some(salary) = number.as_f64() {
                entry.add(salary);
            }
        }
    }

    Ok(totals
        .into_iter()
        .map(|(job_category, sum)| JobCategoryAverage {
            job_category,
            salary: sum.mean(),
        })
        .collect())
}
