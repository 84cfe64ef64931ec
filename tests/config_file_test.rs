use anyhow::Result;
use gpa_calc::app::batch;
use gpa_calc::app::report::Report;
use gpa_calc::domain::ports::{ConfigProvider, OutputFormat};
use gpa_calc::utils::validation::Validate;
use gpa_calc::{AppConfig, GpaError};
use tempfile::TempDir;

#[test]
fn test_config_file_drives_batch_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("gpa-calc.toml");
    std::fs::write(
        &config_path,
        r#"
[limits]
max_entries = 3

[output]
format = "json"

[defaults]
course_credits = 4.0
course_grade = "A"
"#,
    )?;

    let config = AppConfig::load(Some(&config_path))?;
    config.validate()?;
    assert_eq!(config.output_format(), OutputFormat::Json);

    // 2 * 2.0 + two default 4-credit A rows = 36 over 10 hours
    let calc = batch::run_gpa(&config, &["2:C".to_string()], Some(3))?;
    assert_eq!(calc.result.total_weight, 10.0);
    assert_eq!(calc.result.average, 3.6);

    let err = batch::run_gpa(&config, &[], Some(4)).unwrap_err();
    assert!(matches!(err, GpaError::InvalidCount { .. }));

    let json = Report::from(&calc).render(config.output_format(), config.show_totals())?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["average"], 3.6);
    assert_eq!(value["entries"], 3);
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = AppConfig::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, GpaError::IoError(_)));
}

#[test]
fn test_env_var_substitution_in_config_file() -> Result<()> {
    std::env::set_var("GPA_CALC_TEST_DEFAULT_GPA", "3.75");

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("env.toml");
    std::fs::write(
        &config_path,
        "[defaults]\nsemester_gpa = ${GPA_CALC_TEST_DEFAULT_GPA}\n",
    )?;

    let config = AppConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.default_semester().gpa, 3.75);

    let calc = batch::run_cgpa(&config, &[], Some(2))?;
    assert_eq!(calc.result.average, 3.75);
    Ok(())
}
