pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::AppConfig;
pub use crate::core::{aggregate, calculator, GradeScale};
pub use domain::model::{
    AggregationResult, Calculation, CalculationMode, CourseEntry, LineItem, SemesterEntry,
};
pub use utils::error::{GpaError, Result};
