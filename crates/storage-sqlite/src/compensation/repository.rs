use std::sync::Arc;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Nullable};
use serde::Serialize;

use paygrid_core::compensation::{CompensationRepositoryTrait, YearSpan};
use paygrid_core::{Result, ResultRow};

use super::model::{
    CompensationRecordDB, DepartmentChangeDB, EmployeeTotalDB, JobCategorySalaryDB,
    RegionTotalDB, TopPaidDB,
};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::queries::{CannedQuery, QueryCatalog};

const COMPENSATION_RECORDS: &str = "
    SELECT t.year, e.employee_id, e.full_name, j.job_title, j.job_category,
           l.country_name, l.region_name, d.department_name,
           f.salary AS yearly_salary, f.bonus, f.total_compensation
    FROM employee_yearly_salary_fact f
    JOIN time_dim t ON t.surrogate_time_id = f.surrogate_time_id
    JOIN employee_dim e ON e.surrogate_employee_id = f.surrogate_employee_id
    JOIN job_dim j ON j.surrogate_job_id = f.surrogate_job_id
    JOIN department_dim d ON d.surrogate_department_id = f.surrogate_department_id
    JOIN location_dim l ON l.surrogate_location_id = f.surrogate_location_id";

pub struct CompensationRepository {
    pool: Arc<DbPool>,
    catalog: Arc<QueryCatalog>,
}

impl CompensationRepository {
    pub fn new(pool: Arc<DbPool>, catalog: Arc<QueryCatalog>) -> Self {
        CompensationRepository { pool, catalog }
    }

    fn canned(&self, query: CannedQuery) -> &str {
        self.catalog.sql(query)
    }
}

fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<ResultRow>> {
    records.iter().map(ResultRow::from_serializable).collect()
}

impl CompensationRepositoryTrait for CompensationRepository {
    fn ping(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn employee_compensation(
        &self,
        employee_id: i64,
        year: Option<i32>,
    ) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(format!(
            "{} WHERE e.employee_id = ?1 AND (?2 IS NULL OR t.year = ?2) ORDER BY t.year",
            COMPENSATION_RECORDS
        ))
        .bind::<BigInt, _>(employee_id)
        .bind::<Nullable<Integer>, _>(year)
        .load::<CompensationRecordDB>(&mut conn)
        .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn department_roster(&self, department_id: i64, year: Option<i32>) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(format!(
            "{} WHERE d.department_id = ?1 \
             AND t.year = COALESCE(?2, (SELECT MAX(year) FROM time_dim)) \
             ORDER BY e.employee_id",
            COMPENSATION_RECORDS
        ))
        .bind::<BigInt, _>(department_id)
        .bind::<Nullable<Integer>, _>(year)
        .load::<CompensationRecordDB>(&mut conn)
        .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn year_compensation(&self, year: i32) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(format!(
            "{} WHERE t.year = ?1 ORDER BY e.employee_id",
            COMPENSATION_RECORDS
        ))
        .bind::<Integer, _>(year)
        .load::<CompensationRecordDB>(&mut conn)
        .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn total_compensation_by_region(&self) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(self.canned(CannedQuery::TotalCompensationByRegion))
            .load::<RegionTotalDB>(&mut conn)
            .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn total_compensation_per_employee_latest(&self) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(self.canned(CannedQuery::TotalCompensationPerEmployeeLatest))
            .load::<EmployeeTotalDB>(&mut conn)
            .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn job_category_salaries(&self, year: Option<i32>) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(self.canned(CannedQuery::AverageSalaryPerJobCategory))
            .bind::<Nullable<Integer>, _>(year)
            .load::<JobCategorySalaryDB>(&mut conn)
            .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn employees_changed_departments(&self, span: YearSpan) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(self.canned(CannedQuery::EmployeesChangedDepartments))
            .bind::<Integer, _>(span.from_year())
            .bind::<Integer, _>(span.to_year())
            .load::<DepartmentChangeDB>(&mut conn)
            .map_err(StorageError::from)?;
        to_rows(&records)
    }

    fn top_paid_per_department(&self, top: i64) -> Result<Vec<ResultRow>> {
        let mut conn = get_connection(&self.pool)?;
        let records = sql_query(self.canned(CannedQuery::TopPaidPerDepartment))
            .bind::<BigInt, _>(top)
            .load::<TopPaidDB>(&mut conn)
            .map_err(StorageError::from)?;
        to_rows(&records)
    }
}
