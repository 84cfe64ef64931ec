use crate::core::aggregator::aggregate;
use crate::domain::grade_scale::GradeScale;
use crate::domain::model::{Calculation, CalculationMode, CourseEntry, LineItem, SemesterEntry};
use crate::utils::error::{GpaError, Result};
use crate::utils::validation::validate_semester_gpa;

/// Semester GPA: credit hours weighted by the grade points of each letter grade.
pub fn semester_gpa(courses: &[CourseEntry]) -> Result<Calculation> {
    let items = courses
        .iter()
        .map(|course| {
            let points = GradeScale::points_for(&course.grade)?;
            Ok(LineItem::new(course.credit_hours, points))
        })
        .collect::<Result<Vec<_>>>()?;

    calculate(CalculationMode::SemesterGpa, &items)
}

/// CGPA: semester credit hours weighted by each semester's GPA.
pub fn cumulative_gpa(semesters: &[SemesterEntry]) -> Result<Calculation> {
    let items = semesters
        .iter()
        .map(|semester| {
            validate_semester_gpa(semester.gpa)?;
            Ok(LineItem::new(semester.credit_hours, semester.gpa))
        })
        .collect::<Result<Vec<_>>>()?;

    calculate(CalculationMode::Cgpa, &items)
}

pub fn calculate(mode: CalculationMode, items: &[LineItem]) -> Result<Calculation> {
    let excluded = items.iter().filter(|item| !item.counts()).count();
    if excluded > 0 {
        tracing::debug!(
            "Skipping {} {}(s) without positive credit hours",
            excluded,
            mode.item_noun()
        );
    }

    let result = aggregate(items).ok_or_else(|| GpaError::EmptyAggregation {
        item: mode.item_noun().to_string(),
    })?;

    tracing::debug!(
        "{}: {:.2} over {} credit hours",
        mode.title(),
        result.average,
        result.total_weight
    );

    Ok(Calculation {
        mode,
        result,
        entries: items.len(),
        excluded,
    })
}
