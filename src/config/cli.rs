use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings, DEFAULT_DECIMAL_PLACES};
use crate::domain::RawInputs;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "term-deposit")]
#[command(about = "Calculates the final balance of a term deposit")]
pub struct CliConfig {
    /// The starting balance for the term deposit (e.g. 10000)
    #[arg(long, allow_negative_numbers = true)]
    pub start_deposit: Option<i64>,

    /// The interest rate for the term deposit in percent (e.g. 1.1)
    #[arg(long, allow_negative_numbers = true)]
    pub interest_rate: Option<f64>,

    /// The term length for the term deposit (e.g. "3 years" or "1 year 6 months")
    #[arg(long)]
    pub term_length: Option<String>,

    /// When the interest is paid (monthly, quarterly, annually, at maturity)
    #[arg(long)]
    pub interest_paid: Option<String>,

    /// TOML file with default values; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places used when printing the final balance
    #[arg(long)]
    pub decimal_places: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(file)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Loads the config file (if any), applies the flags on top and
    /// validates the result.
    pub fn resolve(&self) -> Result<Settings> {
        let settings = self.merge(self.load_file()?);
        settings.validate()?;
        Ok(settings)
    }

    /// Flags win over file values; anything still missing falls back to
    /// zero or an empty string so that validation reports it.
    pub fn merge(&self, file: TomlConfig) -> Settings {
        let deposit = file.deposit;

        Settings {
            inputs: RawInputs {
                start_deposit: self.start_deposit.or(deposit.start_deposit).unwrap_or(0),
                interest_rate: self.interest_rate.or(deposit.interest_rate).unwrap_or(0.0),
                term_length: self
                    .term_length
                    .clone()
                    .or(deposit.term_length)
                    .unwrap_or_default(),
                interest_paid: self
                    .interest_paid
                    .clone()
                    .or(deposit.interest_paid)
                    .unwrap_or_default(),
            },
            format: self.format.or(file.output.format).unwrap_or_default(),
            decimal_places: self
                .decimal_places
                .or(file.output.decimal_places)
                .unwrap_or(DEFAULT_DECIMAL_PLACES),
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = CliConfig::try_parse_from([
            "term-deposit",
            "--start-deposit",
            "10000",
            "--interest-rate",
            "1.1",
            "--term-length",
            "3 years",
            "--interest-paid",
            "at maturity",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.start_deposit, Some(10_000));
        assert_eq!(cli.interest_rate, Some(1.1));
        assert_eq!(cli.term_length.as_deref(), Some("3 years"));
        assert_eq!(cli.interest_paid.as_deref(), Some("at maturity"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = CliConfig::try_parse_from([
            "term-deposit",
            "--start-deposit",
            "-5",
            "--interest-rate",
            "-1.5",
        ])
        .unwrap();

        assert_eq!(cli.start_deposit, Some(-5));
        assert_eq!(cli.interest_rate, Some(-1.5));
    }

    #[test]
    fn test_missing_values_default_to_empty() {
        let settings = CliConfig::default().resolve().unwrap();
        assert_eq!(settings.inputs, RawInputs::default());
        assert_eq!(settings.decimal_places, DEFAULT_DECIMAL_PLACES);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[deposit]
start_deposit = 500
interest_rate = 2.0
term_length = "2 years"

[output]
decimal_places = 4
"#,
        )
        .unwrap();

        let cli = CliConfig {
            start_deposit: Some(1_000),
            interest_paid: Some("monthly".to_string()),
            ..CliConfig::default()
        };

        let settings = cli.merge(file);
        assert_eq!(settings.inputs.start_deposit, 1_000);
        assert_eq!(settings.inputs.interest_rate, 2.0);
        assert_eq!(settings.inputs.term_length, "2 years");
        assert_eq!(settings.inputs.interest_paid, "monthly");
        assert_eq!(settings.decimal_places, 4);
    }

    #[test]
    fn test_decimal_places_flag_is_validated() {
        let cli = CliConfig {
            decimal_places: Some(9),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
