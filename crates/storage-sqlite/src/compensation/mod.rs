//! SQLite storage implementation for compensation queries.

mod model;
mod repository;

pub use model::{
    CompensationRecordDB, DepartmentChangeDB, EmployeeTotalDB, JobCategorySalaryDB,
    RegionTotalDB, TopPaidDB,
};
pub use repository::CompensationRepository;
