use crate::app::Quote;
use crate::config::{OutputFormat, Settings};
use crate::domain::{Field, NormalizedRequest, RawInputs};
use crate::utils::error::{AppError, ErrorKind, Result};
use serde::Serialize;
use std::fmt::{self, Write};

const TITLE: &str = "[ Term Deposit Calculator ]";

/// Renders the outcome of a run in the configured format.
pub fn render(settings: &Settings, outcome: &Result<Quote>) -> Result<String> {
    match settings.format {
        OutputFormat::Text => render_text(
            &settings.inputs,
            outcome.as_ref().ok(),
            settings.decimal_places,
        ),
        OutputFormat::Json => render_json(&settings.inputs, outcome, settings.decimal_places),
    }
}

/// Console report. Errors are not part of it; the caller prints those.
pub fn render_text(
    inputs: &RawInputs,
    quote: Option<&Quote>,
    decimal_places: usize,
) -> Result<String> {
    let mut out = String::new();
    write_text(&mut out, inputs, quote, decimal_places)?;
    Ok(out)
}

fn write_text(
    out: &mut impl fmt::Write,
    inputs: &RawInputs,
    quote: Option<&Quote>,
    decimal_places: usize,
) -> fmt::Result {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "Users inputs:")?;
    writeln!(out, "\tstart-deposit: '{}'", inputs.start_deposit)?;
    writeln!(out, "\tinterest-rate: '{}'", inputs.interest_rate)?;
    writeln!(out, "\tterm-length: '{}'", inputs.term_length)?;
    writeln!(out, "\tinterest-paid: '{}'", inputs.interest_paid)?;

    let Some(quote) = quote else {
        return Ok(());
    };

    let request = &quote.request;
    writeln!(out, "Normalised inputs:")?;
    writeln!(out, "\tStart Deposit: ${}", request.start_deposit())?;
    writeln!(out, "\tInterest Rate: {:.2}%", request.interest_rate())?;
    writeln!(out, "\tTerm Length: {}", request.term_length())?;
    writeln!(out, "\tPaid: {}", request.paid_at())?;
    writeln!(out, "Final Balance:")?;
    writeln!(out, "\t${:.*}", decimal_places, quote.final_balance)
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    inputs: &'a RawInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalised: Option<&'a NormalizedRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_balance: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError>,
}

#[derive(Debug, Serialize)]
struct JsonError {
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    message: String,
}

pub fn render_json(
    inputs: &RawInputs,
    outcome: &Result<Quote>,
    decimal_places: usize,
) -> Result<String> {
    let report = match outcome {
        Ok(quote) => JsonReport {
            inputs,
            normalised: Some(&quote.request),
            final_balance: Some(round_to(quote.final_balance, decimal_places)),
            errors: Vec::new(),
        },
        Err(e) => JsonReport {
            inputs,
            normalised: None,
            final_balance: None,
            errors: json_errors(e),
        },
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn json_errors(error: &AppError) -> Vec<JsonError> {
    match error {
        AppError::Validation(errors) => errors
            .iter()
            .map(|e| JsonError {
                field: Some(e.field),
                kind: Some(e.kind()),
                message: e.source.to_string(),
            })
            .collect(),
        AppError::Calculation(e) => vec![JsonError {
            field: None,
            kind: Some(e.kind()),
            message: e.to_string(),
        }],
        other => vec![JsonError {
            field: None,
            kind: None,
            message: other.to_string(),
        }],
    }
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, decimal_places: usize) -> f64 {
    let factor = 10_f64.powi(decimal_places.min(crate::config::MAX_DECIMAL_PLACES) as i32);
    (value * factor).round() / factor
}
