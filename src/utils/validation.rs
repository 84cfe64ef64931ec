use crate::domain::grade_scale::GradeScale;
use crate::domain::model::{CourseEntry, SemesterEntry};
use crate::utils::error::{GpaError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_GPA: f64 = 0.0;
pub const MAX_GPA: f64 = 4.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Digits with at most one decimal point: `3`, `1.5`, `2.`, `.5`.
fn plain_decimal() -> &'static Regex {
    static PLAIN_DECIMAL: OnceLock<Regex> = OnceLock::new();
    PLAIN_DECIMAL.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("plain decimal pattern compiles")
    })
}

/// Parses unsigned decimal text. Signs, exponents and other characters are rejected.
pub fn parse_decimal(field_name: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if !plain_decimal().is_match(trimmed) {
        return Err(GpaError::InvalidNumber {
            field: field_name.to_string(),
            value: text.to_string(),
        });
    }

    trimmed.parse::<f64>().map_err(|_| GpaError::InvalidNumber {
        field: field_name.to_string(),
        value: text.to_string(),
    })
}

/// Whole number of courses or semesters, at least 1 and at most `max` when given.
pub fn parse_count(field_name: &str, text: &str, max: Option<usize>) -> Result<usize> {
    let trimmed = text.trim();
    let invalid = |reason: String| GpaError::InvalidCount {
        field: field_name.to_string(),
        value: text.to_string(),
        reason,
    };

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("must be a positive whole number".to_string()));
    }

    let count = trimmed
        .parse::<usize>()
        .map_err(|_| invalid("is too large".to_string()))?;
    validate_count(field_name, count, max)?;
    Ok(count)
}

pub fn validate_count(field_name: &str, count: usize, max: Option<usize>) -> Result<()> {
    if count < 1 {
        return Err(GpaError::InvalidCount {
            field: field_name.to_string(),
            value: count.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if let Some(max) = max {
        if count > max {
            return Err(GpaError::InvalidCount {
                field: field_name.to_string(),
                value: count.to_string(),
                reason: format!("must be at most {}", max),
            });
        }
    }
    Ok(())
}

/// Credit hours may be zero here; zero-credit entries are left out of the average later.
pub fn parse_credit_hours(text: &str) -> Result<f64> {
    parse_decimal("credit hours", text)
}

pub fn require_positive_credit_hours(value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GpaError::OutOfRange {
            field: "credit hours".to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        })
    }
}

pub fn parse_semester_gpa(text: &str) -> Result<f64> {
    let gpa = parse_decimal("semester GPA", text)?;
    validate_semester_gpa(gpa)?;
    Ok(gpa)
}

pub fn validate_semester_gpa(gpa: f64) -> Result<()> {
    validate_range("semester GPA", gpa, MIN_GPA, MAX_GPA)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN fails too
    if !(value >= min && value <= max) {
        return Err(GpaError::OutOfRange {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn split_entry(entry: &str) -> Result<(&str, &str)> {
    entry
        .split_once(':')
        .ok_or_else(|| GpaError::InvalidEntry {
            entry: entry.to_string(),
            reason: "is missing ':' between credit hours and value".to_string(),
        })
}

/// `CREDITS:GRADE`, e.g. `3:B+`.
pub fn parse_course_entry(entry: &str) -> Result<CourseEntry> {
    let (credits, grade) = split_entry(entry)?;
    let credit_hours = parse_credit_hours(credits)?;
    let grade = GradeScale::canonical(grade).ok_or_else(|| GpaError::InvalidGrade {
        letter: grade.to_string(),
    })?;

    Ok(CourseEntry {
        credit_hours,
        grade: grade.to_string(),
    })
}

/// `CREDITS:GPA`, e.g. `15:3.4`.
pub fn parse_semester_entry(entry: &str) -> Result<SemesterEntry> {
    let (credits, gpa) = split_entry(entry)?;
    Ok(SemesterEntry {
        credit_hours: parse_credit_hours(credits)?,
        gpa: parse_semester_gpa(gpa)?,
    })
}
