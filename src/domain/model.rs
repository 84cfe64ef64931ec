use serde::{Deserialize, Serialize};

/// One weighted value: credit hours and either grade points or a semester GPA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub weight: f64,
    pub value: f64,
}

impl LineItem {
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Only items with a positive weight take part in an average.
    pub fn counts(&self) -> bool {
        self.weight > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Rounded to 2 decimals.
    pub average: f64,
    pub total_weight: f64,
    pub total_weighted_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    SemesterGpa,
    Cgpa,
}

impl CalculationMode {
    /// What a single entry is called in messages.
    pub fn item_noun(&self) -> &'static str {
        match self {
            CalculationMode::SemesterGpa => "course",
            CalculationMode::Cgpa => "semester",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculationMode::SemesterGpa => "Semester GPA",
            CalculationMode::Cgpa => "CGPA",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub credit_hours: f64,
    pub grade: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemesterEntry {
    pub credit_hours: f64,
    pub gpa: f64,
}

/// A finished calculation together with how many entries were considered.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub mode: CalculationMode,
    pub result: AggregationResult,
    pub entries: usize,
    pub excluded: usize,
}
