//! Fixed letter-grade to grade-point mapping on the 0.00-4.00 scale.

use crate::utils::error::{GpaError, Result};

/// Letter grades in the order they are listed to users.
const GRADE_POINTS: [(&str, f64); 11] = [
    ("A", 4.00),
    ("A-", 3.66),
    ("B+", 3.33),
    ("B", 3.00),
    ("B-", 2.60),
    ("C+", 2.33),
    ("C", 2.00),
    ("C-", 1.66),
    ("D+", 1.30),
    ("D", 1.00),
    ("F", 0.00),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct GradeScale;

impl GradeScale {
    /// Grade points for `letter`, matched case-insensitively after trimming.
    pub fn points_for(letter: &str) -> Result<f64> {
        let wanted = letter.trim();
        GRADE_POINTS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(wanted))
            .map(|(_, points)| *points)
            .ok_or_else(|| GpaError::InvalidGrade {
                letter: letter.to_string(),
            })
    }

    /// Canonical (upper-case) spelling of `letter`, if it is on the scale.
    pub fn canonical(letter: &str) -> Option<&'static str> {
        let wanted = letter.trim();
        GRADE_POINTS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(wanted))
            .map(|(key, _)| *key)
    }

    pub fn entries() -> &'static [(&'static str, f64)] {
        &GRADE_POINTS
    }

    pub fn letters() -> impl Iterator<Item = &'static str> {
        GRADE_POINTS.iter().map(|(key, _)| *key)
    }

    /// "A, A-, B+, ..." as shown in prompts.
    pub fn hint() -> String {
        Self::letters().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_every_letter() {
        assert_eq!(GradeScale::points_for("A").unwrap(), 4.00);
        assert_eq!(GradeScale::points_for("A-").unwrap(), 3.66);
        assert_eq!(GradeScale::points_for("B+").unwrap(), 3.33);
        assert_eq!(GradeScale::points_for("B").unwrap(), 3.00);
        assert_eq!(GradeScale::points_for("B-").unwrap(), 2.60);
        assert_eq!(GradeScale::points_for("C+").unwrap(), 2.33);
        assert_eq!(GradeScale::points_for("C").unwrap(), 2.00);
        assert_eq!(GradeScale::points_for("C-").unwrap(), 1.66);
        assert_eq!(GradeScale::points_for("D+").unwrap(), 1.30);
        assert_eq!(GradeScale::points_for("D").unwrap(), 1.00);
        assert_eq!(GradeScale::points_for("F").unwrap(), 0.00);
    }

    #[test]
    fn test_points_for_is_case_insensitive() {
        assert_eq!(
            GradeScale::points_for("b").unwrap(),
            GradeScale::points_for("B").unwrap()
        );
        assert_eq!(GradeScale::points_for("a-").unwrap(), 3.66);
        assert_eq!(GradeScale::points_for(" c+ ").unwrap(), 2.33);
    }

    #[test]
    fn test_points_for_rejects_unknown_letters() {
        for bad in ["X", "", "A+", "E", "B++", "4.0"] {
            match GradeScale::points_for(bad) {
                Err(GpaError::InvalidGrade { letter }) => assert_eq!(letter, bad),
                other => panic!("expected InvalidGrade for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_canonical_and_hint() {
        assert_eq!(GradeScale::canonical("d+"), Some("D+"));
        assert_eq!(GradeScale::canonical("z"), None);
        assert_eq!(
            GradeScale::hint(),
            "A, A-, B+, B, B-, C+, C, C-, D+, D, F"
        );
        assert_eq!(GradeScale::entries().len(), 11);
    }
}
