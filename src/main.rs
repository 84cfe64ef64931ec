use clap::Parser;
use gpa_calc::app::batch;
use gpa_calc::app::prompt::InteractiveSession;
use gpa_calc::app::report::{render_scale, Report};
use gpa_calc::config::{CliConfig, Command, LogFormat};
use gpa_calc::domain::ports::ConfigProvider;
use gpa_calc::utils::error::{ErrorSeverity, Result};
use gpa_calc::utils::{logger, validation::Validate};
use gpa_calc::AppConfig;

fn main() {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!("Configuration: {:?}", config);

    let format = cli.format.unwrap_or_else(|| config.output_format());

    match cli.command.clone().unwrap_or(Command::Interactive) {
        Command::Gpa { courses, count } => {
            let calc = batch::run_gpa(&config, &courses, count)?;
            tracing::info!("Semester GPA computed from {} course(s)", calc.entries);
            println!("{}", Report::from(&calc).render(format, config.show_totals())?);
        }
        Command::Cgpa { semesters, count } => {
            let calc = batch::run_cgpa(&config, &semesters, count)?;
            tracing::info!("CGPA computed from {} semester(s)", calc.entries);
            println!("{}", Report::from(&calc).render(format, config.show_totals())?);
        }
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut session = InteractiveSession::new(stdin.lock(), std::io::stdout());
            session.run()?;
        }
        Command::Scale => {
            println!("{}", render_scale(format)?);
        }
    }

    Ok(())
}
