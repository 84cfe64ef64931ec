//! Menu-driven prompt session.
//!
//! Every question is asked again until the answer is valid. Only the
//! finished, already-numeric entries reach the calculator. End of input
//! closes the session at whatever point it happens.

use crate::core::calculator;
use crate::domain::grade_scale::GradeScale;
use crate::domain::model::{Calculation, CourseEntry, SemesterEntry};
use crate::utils::error::{GpaError, Result};
use crate::utils::validation::{
    parse_count, parse_credit_hours, parse_semester_gpa, require_positive_credit_hours,
};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SemesterGpa,
    Cgpa,
    Exit,
}

impl MenuChoice {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MenuChoice::SemesterGpa),
            "2" => Some(MenuChoice::Cgpa),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct InteractiveSession<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n===== GPA/CGPA Calculator =====")?;
            writeln!(self.output, "1. Calculate Semester GPA")?;
            writeln!(self.output, "2. Calculate CGPA")?;
            writeln!(self.output, "3. Exit")?;

            let Some(answer) = self.ask("Enter your choice (1, 2, or 3): ")? else {
                tracing::debug!("Input closed at the menu");
                return Ok(());
            };

            let finished = match MenuChoice::parse(&answer) {
                Some(MenuChoice::SemesterGpa) => self.semester_gpa()?,
                Some(MenuChoice::Cgpa) => self.cumulative_gpa()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice! Please enter 1, 2, or 3.")?;
                    continue;
                }
            };

            if finished.is_none() {
                tracing::debug!("Input closed during a calculation");
                return Ok(());
            }
        }
    }

    /// Asks for every course and prints the semester GPA. `None` if input ended first.
    pub fn semester_gpa(&mut self) -> Result<Option<Calculation>> {
        writeln!(self.output, "\n--- Semester GPA ---")?;
        let Some(count) = self.ask_count("Enter number of courses: ", "courses")? else {
            return Ok(None);
        };

        let grade_prompt = format!("  Enter grade ({}): ", GradeScale::hint());
        let mut courses = Vec::with_capacity(count);
        for index in 1..=count {
            writeln!(self.output, "\nCourse {}", index)?;

            let Some(credit_hours) = self.ask_credit_hours(
                "  Enter credit hours: ",
                "  Invalid input! Enter a number like 3 or 1.5.",
            )?
            else {
                return Ok(None);
            };

            let grade = loop {
                let Some(answer) = self.ask(&grade_prompt)? else {
                    return Ok(None);
                };
                match GradeScale::canonical(&answer) {
                    Some(grade) => break grade,
                    None => writeln!(
                        self.output,
                        "  Invalid grade! Try again using correct format."
                    )?,
                }
            };

            courses.push(CourseEntry {
                credit_hours,
                grade: grade.to_string(),
            });
        }

        let calc = calculator::semester_gpa(&courses)?;
        writeln!(
            self.output,
            "\nYour Semester GPA is: {:.2}",
            calc.result.average
        )?;
        Ok(Some(calc))
    }

    /// Asks for every semester and prints the CGPA. `None` if input ended first.
    pub fn cumulative_gpa(&mut self) -> Result<Option<Calculation>> {
        writeln!(self.output, "\n--- CGPA Calculator ---")?;
        let Some(count) = self.ask_count("Enter number of semesters: ", "semesters")? else {
            return Ok(None);
        };

        let mut semesters = Vec::with_capacity(count);
        for index in 1..=count {
            writeln!(self.output, "\nSemester {}", index)?;

            let Some(credit_hours) = self.ask_credit_hours(
                "  Enter total credit hours: ",
                "  Invalid input! Enter a number like 15 or 18.5.",
            )?
            else {
                return Ok(None);
            };

            let gpa = loop {
                let Some(answer) = self.ask("  Enter GPA (0.0 - 4.0): ")? else {
                    return Ok(None);
                };
                match parse_semester_gpa(&answer) {
                    Ok(gpa) => break gpa,
                    Err(GpaError::OutOfRange { .. }) => writeln!(
                        self.output,
                        "  GPA must be between 0.0 and 4.0. Try again."
                    )?,
                    Err(_) => writeln!(self.output, "  Invalid input! Enter a number like 3.5.")?,
                }
            };

            semesters.push(SemesterEntry { credit_hours, gpa });
        }

        let calc = calculator::cumulative_gpa(&semesters)?;
        writeln!(self.output, "\nYour CGPA is: {:.2}", calc.result.average)?;
        Ok(Some(calc))
    }

    fn ask_count(&mut self, prompt: &str, field: &str) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_count(field, &answer, None) {
                Ok(count) => return Ok(Some(count)),
                Err(e) => {
                    tracing::debug!("Rejected count: {}", e);
                    writeln!(
                        self.output,
                        "Invalid input! Please enter a positive whole number."
                    )?;
                }
            }
        }
    }

    /// Unlike batch mode, zero credit hours are refused here and asked again.
    fn ask_credit_hours(&mut self, prompt: &str, invalid_message: &str) -> Result<Option<f64>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_credit_hours(&answer).and_then(require_positive_credit_hours) {
                Ok(credit_hours) => return Ok(Some(credit_hours)),
                Err(GpaError::OutOfRange { .. }) => writeln!(
                    self.output,
                    "  Credit hours must be positive. Try again."
                )?,
                Err(_) => writeln!(self.output, "{}", invalid_message)?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
