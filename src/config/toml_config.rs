use crate::domain::grade_scale::GradeScale;
use crate::domain::model::{CourseEntry, SemesterEntry};
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::{GpaError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "gpa-calc.toml";
pub const DEFAULT_MAX_ENTRIES: usize = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub limits: LimitsConfig,
    pub output: OutputConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub show_totals: Option<bool>,
}

/// Values for rows that were counted but not filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub course_credits: Option<f64>,
    pub course_grade: Option<String>,
    pub semester_credits: Option<f64>,
    pub semester_gpa: Option<f64>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GpaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Reads `path` when given, otherwise `gpa-calc.toml` if it exists, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GpaError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        let re = match Regex::new(r"\$\{([^}]+)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max) = self.limits.max_entries {
            validation::validate_count("limits.max_entries", max, None)
                .map_err(|e| config_error("limits.max_entries", e))?;
        }

        if let Some(credits) = self.defaults.course_credits {
            validation::validate_range("defaults.course_credits", credits, 0.0, f64::MAX)
                .map_err(|e| config_error("defaults.course_credits", e))?;
        }

        if let Some(grade) = &self.defaults.course_grade {
            GradeScale::points_for(grade).map_err(|e| config_error("defaults.course_grade", e))?;
        }

        if let Some(credits) = self.defaults.semester_credits {
            validation::validate_range("defaults.semester_credits", credits, 0.0, f64::MAX)
                .map_err(|e| config_error("defaults.semester_credits", e))?;
        }

        if let Some(gpa) = self.defaults.semester_gpa {
            validation::validate_semester_gpa(gpa)
                .map_err(|e| config_error("defaults.semester_gpa", e))?;
        }

        Ok(())
    }
}

fn config_error(field: &str, source: GpaError) -> GpaError {
    GpaError::ConfigError {
        field: field.to_string(),
        message: source.user_friendly_message(),
    }
}

impl ConfigProvider for AppConfig {
    fn max_entries(&self) -> usize {
        self.limits.max_entries.unwrap_or(DEFAULT_MAX_ENTRIES)
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn show_totals(&self) -> bool {
        self.output.show_totals.unwrap_or(true)
    }

    fn default_course(&self) -> CourseEntry {
        let grade = self
            .defaults
            .course_grade
            .as_deref()
            .and_then(GradeScale::canonical)
            .unwrap_or("B");

        CourseEntry {
            credit_hours: self.defaults.course_credits.unwrap_or(3.0),
            grade: grade.to_string(),
        }
    }

    fn default_semester(&self) -> SemesterEntry {
        SemesterEntry {
            credit_hours: self.defaults.semester_credits.unwrap_or(15.0),
            gpa: self.defaults.semester_gpa.unwrap_or(3.0),
        }
    }
}
