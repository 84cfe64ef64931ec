use crate::domain::model::{CourseEntry, SemesterEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings the batch commands and report rendering depend on.
pub trait ConfigProvider {
    fn max_entries(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn show_totals(&self) -> bool;
    /// Row used to pre-fill courses that were counted but not given.
    fn default_course(&self) -> CourseEntry;
    fn default_semester(&self) -> SemesterEntry;
}
