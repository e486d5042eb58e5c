pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::{run, Quote};
pub use config::{OutputFormat, Settings};
pub use crate::core::{calculate, calculate_request, validate};
pub use domain::{Field, NormalizedRequest, PaymentFrequency, RawInputs, TermLength};
pub use utils::error::{AppError, DepositError, ErrorKind, Result, ValidationError};
