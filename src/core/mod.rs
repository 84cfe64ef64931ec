pub mod aggregator;
pub mod calculator;

pub use crate::domain::grade_scale::GradeScale;
pub use crate::domain::model::{AggregationResult, Calculation, CalculationMode, LineItem};
pub use crate::utils::error::Result;
pub use aggregator::aggregate;
