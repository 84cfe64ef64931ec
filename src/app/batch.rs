use crate::core::calculator;
use crate::domain::model::Calculation;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GpaError, Result};
use crate::utils::validation::{parse_course_entry, parse_semester_entry, validate_count};

/// Number of rows to compute over: the explicit count, or one row per given entry.
fn row_count<C: ConfigProvider>(
    config: &C,
    field: &str,
    given: usize,
    count: Option<usize>,
) -> Result<usize> {
    let total = count.unwrap_or(given);
    if total < given {
        return Err(GpaError::InvalidCount {
            field: field.to_string(),
            value: total.to_string(),
            reason: format!("is smaller than the {} {} given", given, field),
        });
    }
    validate_count(field, total, Some(config.max_entries()))?;
    Ok(total)
}

/// Semester GPA from `CREDITS:GRADE` entries, padded with the default course up to `count`.
pub fn run_gpa<C: ConfigProvider>(
    config: &C,
    raw_entries: &[String],
    count: Option<usize>,
) -> Result<Calculation> {
    let mut courses = raw_entries
        .iter()
        .map(|entry| parse_course_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let total = row_count(config, "courses", courses.len(), count)?;
    if total > courses.len() {
        tracing::debug!(
            "Filling {} course(s) with the default row",
            total - courses.len()
        );
        courses.resize(total, config.default_course());
    }

    calculator::semester_gpa(&courses)
}

/// CGPA from `CREDITS:GPA` entries, padded with the default semester up to `count`.
pub fn run_cgpa<C: ConfigProvider>(
    config: &C,
    raw_entries: &[String],
    count: Option<usize>,
) -> Result<Calculation> {
    let mut semesters = raw_entries
        .iter()
        .map(|entry| parse_semester_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let total = row_count(config, "semesters", semesters.len(), count)?;
    if total > semesters.len() {
        tracing::debug!(
            "Filling {} semester(s) with the default row",
            total - semesters.len()
        );
        semesters.resize(total, config.default_semester());
    }

    calculator::cumulative_gpa(&semesters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn entries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_gpa() {
        let calc = run_gpa(&AppConfig::default(), &entries(&["3:A", "3:c"]), None).unwrap();
        assert_eq!(calc.result.average, 3.0);
        assert_eq!(calc.entries, 2);
    }

    #[test]
    fn test_run_gpa_pads_with_default_course() {
        // one A plus three default 3-credit B rows
        let calc = run_gpa(&AppConfig::default(), &entries(&["3:A"]), Some(4)).unwrap();
        assert_eq!(calc.entries, 4);
        assert_eq!(calc.result.total_weight, 12.0);
        assert_eq!(calc.result.average, 3.25);
    }

    #[test]
    fn test_run_gpa_count_only_uses_defaults() {
        let calc = run_gpa(&AppConfig::default(), &[], Some(4)).unwrap();
        assert_eq!(calc.result.average, 3.0);
    }

    #[test]
    fn test_run_gpa_zero_credit_rows_only() {
        let err = run_gpa(&AppConfig::default(), &entries(&["0:A", "0.0:B"]), None).unwrap_err();
        assert!(matches!(err, GpaError::EmptyAggregation { .. }));
    }

    #[test]
    fn test_run_gpa_enforces_count_limits() {
        let config = AppConfig::default();
        assert!(matches!(
            run_gpa(&config, &[], None),
            Err(GpaError::InvalidCount { .. })
        ));
        assert!(matches!(
            run_gpa(&config, &[], Some(51)),
            Err(GpaError::InvalidCount { .. })
        ));
        assert!(matches!(
            run_gpa(&config, &entries(&["3:A", "3:B"]), Some(1)),
            Err(GpaError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_run_cgpa_pads_with_default_semester() {
        let calc = run_cgpa(&AppConfig::default(), &entries(&["15:4.0"]), Some(2)).unwrap();
        assert_eq!(calc.result.total_weight, 30.0);
        assert_eq!(calc.result.average, 3.5);
    }

    #[test]
    fn test_run_cgpa_rejects_bad_entry() {
        let err = run_cgpa(&AppConfig::default(), &entries(&["15:4.5"]), None).unwrap_err();
        assert!(matches!(err, GpaError::OutOfRange { .. }));
    }
}
