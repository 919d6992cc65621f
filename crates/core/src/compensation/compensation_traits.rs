use crate::compensation::compensation_model::YearSpan;
use crate::errors::Result;
use crate::rows::ResultRow;

/// Read access to the compensation warehouse.
///
/// Every method returns raw rows in the currency each amount was recorded in;
/// conversion is the service's job.
pub trait CompensationRepositoryTrait: Send + Sync {
    /// Cheap round trip used by the readiness probe.
    fn ping(&self) -> Result<()>;

    /// Compensation records of one employee, every year when `year` is `None`.
    fn employee_compensation(&self, employee_id: i64, year: Option<i32>)
        -> Result<Vec<ResultRow>>;

    /// Members of one department in `year`, the latest loaded year when `None`.
    fn department_roster(&self, department_id: i64, year: Option<i32>) -> Result<Vec<ResultRow>>;

    fn year_compensation(&self, year: i32) -> Result<Vec<ResultRow>>;

    fn total_compensation_by_region(&self) -> Result<Vec<ResultRow>>;

    fn total_compensation_per_employee_latest(&self) -> Result<Vec<ResultRow>>;

    /// `job_category`, `salary`, `region_name` per fact row of `year`.
    fn job_category_salaries(&self, year: Option<i32>) -> Result<Vec<ResultRow>>;

    fn employees_changed_departments(&self, span: YearSpan) -> Result<Vec<ResultRow>>;

    fn top_paid_per_department(&self, top: i64) -> Result<Vec<ResultRow>>;
}

/// Endpoint-level operations: repository reads plus currency normalization.
pub trait CompensationServiceTrait: Send + Sync {
    fn check_ready(&self) -> Result<()>;

    fn employee_compensation(
        &self,
        employee_id: i64,
        year: Option<i32>,
        to_reference: bool,
    ) -> Result<Vec<ResultRow>>;

    fn department_roster(
        &self,
        department_id: i64,
        year: Option<i32>,
        to_reference: bool,
    ) -> Result<Vec<ResultRow>>;

    fn year_compensation(&self, year: i32, to_reference: bool) -> Result<Vec<ResultRow>>;

    fn total_compensation_by_region(&self, to_reference: bool) -> Result<Vec<ResultRow>>;

    fn total_compensation_per_employee_latest(&self, to_reference: bool)
        -> Result<Vec<ResultRow>>;

    fn average_salary_per_job_category(&self, year: Option<i32>) -> Result<Vec<ResultRow>>;

    fn employees_changed_departments(&self, from_year: i32, to_year: i32)
        -> Result<Vec<ResultRow>>;

    fn top_paid_per_department(&self, top: i64, to_reference: bool) -> Result<Vec<ResultRow>>;
}
