use crate::domain::ports::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gpa-calc")]
#[command(about = "Semester GPA and cumulative GPA calculator")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML configuration file (defaults to ./gpa-calc.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Semester GPA from CREDITS:GRADE pairs, e.g. 3:B+
    Gpa {
        #[arg(long = "course", value_name = "CREDITS:GRADE", value_delimiter = ',')]
        courses: Vec<String>,

        /// Total number of courses; missing ones use the configured defaults
        #[arg(short = 'n', long = "courses")]
        count: Option<usize>,
    },
    /// Cumulative GPA from CREDITS:GPA pairs, e.g. 15:3.4
    Cgpa {
        #[arg(long = "semester", value_name = "CREDITS:GPA", value_delimiter = ',')]
        semesters: Vec<String>,

        /// Total number of semesters; missing ones use the configured defaults
        #[arg(short = 'n', long = "semesters")]
        count: Option<usize>,
    },
    /// Menu-driven prompt session (the default)
    Interactive,
    /// Print the letter grade scale
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}
