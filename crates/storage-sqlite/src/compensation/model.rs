//! Database row models for compensation queries.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Integer, Nullable, Text};
use serde::Serialize;

/// One fact row with every dimension resolved.
#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct CompensationRecordDB {
    #[diesel(sql_type = Integer)]
    pub year: i32,
    #[diesel(sql_type = BigInt)]
    pub employee_id: i64,
    #[diesel(sql_type = Text)]
    pub full_name: String,
    #[diesel(sql_type = Text)]
    pub job_title: String,
    #[diesel(sql_type = Text)]
    pub job_category: String,
    #[diesel(sql_type = Text)]
    pub country_name: String,
    #[diesel(sql_type = Text)]
    pub region_name: String,
    #[diesel(sql_type = Text)]
    pub department_name: String,
    #[diesel(sql_type = Nullable<Double>)]
    pub yearly_salary: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    pub bonus: Option<f64>,
    #[diesel(sql_type = Nullable<Double>)]
    pub total_compensation: Option<f64>,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct RegionTotalDB {
    #[diesel(sql_type = Text)]
    pub region_name: String,
    #[diesel(sql_type = Integer)]
    pub year: i32,
    #[diesel(sql_type = Nullable<Double>)]
    pub total_compensation: Option<f64>,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct EmployeeTotalDB {
    #[diesel(sql_type = Integer)]
    pub year: i32,
    #[diesel(sql_type = BigInt)]
    pub employee_id: i64,
    #[diesel(sql_type = Text)]
    pub full_name: String,
    #[diesel(sql_type = Text)]
    pub region_name: String,
    #[diesel(sql_type = Nullable<Double>)]
    pub total_compensation: Option<f64>,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct JobCategorySalaryDB {
    #[diesel(sql_type = Text)]
    pub job_category: String,
    #[diesel(sql_type = Nullable<Double>)]
    pub salary: Option<f64>,
    #[diesel(sql_type = Text)]
    pub region_name: String,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct DepartmentChangeDB {
    #[diesel(sql_type = BigInt)]
    pub employee_id: i64,
    #[diesel(sql_type = Text)]
    pub full_name: String,
    #[diesel(sql_type = Integer)]
    pub from_year: i32,
    #[diesel(sql_type = Text)]
    pub from_department: String,
    #[diesel(sql_type = Integer)]
    pub to_year: i32,
    #[diesel(sql_type = Text)]
    pub to_department: String,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct TopPaidDB {
    #[diesel(sql_type = Text)]
    pub department_name: String,
    #[diesel(sql_type = BigInt)]
    pub salary_rank: i64,
    #[diesel(sql_type = BigInt)]
    pub employee_id: i64,
    #[diesel(sql_type = Text)]
    pub full_name: String,
    #[diesel(sql_type = Text)]
    pub region_name: String,
    #[diesel(sql_type = Nullable<Double>)]
    pub salary: Option<f64>,
}
