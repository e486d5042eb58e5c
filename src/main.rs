use anyhow::Context;
use clap::Parser;
use term_deposit::app::{report, run};
use term_deposit::config::OutputFormat;
use term_deposit::utils::logger;
use term_deposit::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // The config file may select the output format, so it is resolved
    // before the logger exists.
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(settings.verbose, settings.logs_as_json());

    tracing::info!("Starting term-deposit calculator");
    if let Some(path) = &config.config {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let outcome = run(&settings.inputs);

    let rendered = report::render(&settings, &outcome).context("failed to render report")?;
    print!("{}", rendered);

    if let Err(e) = outcome {
        tracing::error!("Run failed: {} (exit code {})", e, e.exit_code());
        if settings.format == OutputFormat::Text {
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
        std::process::exit(e.exit_code());
    }

    Ok(())
}
