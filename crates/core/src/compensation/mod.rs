//! Compensation module - warehouse queries, conversion and aggregation.

mod compensation_model;
mod compensation_service;
mod compensation_traits;

pub use compensation_model::{JobCategoryAverage, YearSpan};
pub use compensation_service::CompensationService;
pub use compensation_traits::{CompensationRepositoryTrait, CompensationServiceTrait};
