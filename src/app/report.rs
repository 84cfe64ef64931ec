//! Rendering of finished calculations and of the grade scale.

use crate::domain::grade_scale::GradeScale;
use crate::domain::model::{Calculation, CalculationMode};
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: CalculationMode,
    pub average: f64,
    pub total_credit_hours: f64,
    pub total_weighted_points: f64,
    pub entries: usize,
    pub excluded: usize,
}

impl From<&Calculation> for Report {
    fn from(calc: &Calculation) -> Self {
        Self {
            mode: calc.mode,
            average: calc.result.average,
            total_credit_hours: calc.result.total_weight,
            total_weighted_points: calc.result.total_weighted_value,
            entries: calc.entries,
            excluded: calc.excluded,
        }
    }
}

impl Report {
    pub fn render(&self, format: OutputFormat, show_totals: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(show_totals)),
            OutputFormat::Json => self.render_json(),
        }
    }

    pub fn render_text(&self, show_totals: bool) -> String {
        let mut out = format!("Your {}: {:.2}", self.mode.title(), self.average);
        if !show_totals {
            return out;
        }

        let (credits_label, points_label) = match self.mode {
            CalculationMode::SemesterGpa => (
                "Total Credit Hours",
                "Total Grade Points (Σ credits × points)",
            ),
            CalculationMode::Cgpa => (
                "Total Credits (All Semesters)",
                "Total Weighted Points (Σ credits × GPA)",
            ),
        };
        out.push_str(&format!(
            "\n{}: {:.2}\n{}: {:.2}",
            credits_label, self.total_credit_hours, points_label, self.total_weighted_points
        ));
        if self.excluded > 0 {
            out.push_str(&format!(
                "\nSkipped {} {}(s) with 0 credit hours",
                self.excluded,
                self.mode.item_noun()
            ));
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Serialize)]
struct ScaleEntry {
    letter: &'static str,
    points: f64,
}

pub fn render_scale(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(GradeScale::entries()
            .iter()
            .map(|(letter, points)| format!("{:<3} {:.2}", letter, points))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let entries: Vec<ScaleEntry> = GradeScale::entries()
                .iter()
                .map(|&(letter, points)| ScaleEntry { letter, points })
                .collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        }
    }
}
