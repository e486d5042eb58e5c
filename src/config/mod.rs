#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::RawInputs;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DECIMAL_PLACES: usize = 2;
pub const MAX_DECIMAL_PLACES: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything one run needs, after flags and the config file are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub inputs: RawInputs,
    pub format: OutputFormat,
    pub decimal_places: usize,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inputs: RawInputs::default(),
            format: OutputFormat::default(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            verbose: false,
        }
    }
}

impl Settings {
    /// Logs follow the report format so a JSON run emits JSON throughout.
    pub fn logs_as_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("decimal-places", self.decimal_places, 0, MAX_DECIMAL_PLACES)
    }
}
