use crate::domain::{Field, NormalizedRequest, PaymentFrequency, TermLength};
use crate::utils::error::{DepositError, ValidationError};
use crate::utils::validation::{validate_positive_integer, validate_positive_real};

/// Validates the raw user inputs. Every field is checked; on failure all
/// errors are returned together, each tagged with its field.
pub fn validate(
    start_deposit: i64,
    interest_rate: f64,
    term_length: &str,
    interest_paid: &str,
) -> Result<NormalizedRequest, Vec<ValidationError>> {
    tracing::info!("Running input validation...");

    let result: Result<NormalizedRequest, Vec<ValidationError>> = match (
        validate_start_deposit(start_deposit),
        validate_interest_rate(interest_rate),
        validate_term_length(term_length),
        validate_interest_paid(interest_paid),
    ) {
        (Ok(start_deposit), Ok(interest_rate), Ok(term_length), Ok(paid_at)) => Ok(
            NormalizedRequest::new(start_deposit, interest_rate, term_length, paid_at),
        ),
        (start_deposit, interest_rate, term_length, paid_at) => Err([
            start_deposit
                .err()
                .map(|e| ValidationError::new(Field::StartDeposit, e)),
            interest_rate
                .err()
                .map(|e| ValidationError::new(Field::InterestRate, e)),
            term_length
                .err()
                .map(|e| ValidationError::new(Field::TermLength, e)),
            paid_at
                .err()
                .map(|e| ValidationError::new(Field::InterestPaid, e)),
        ]
        .into_iter()
        .flatten()
        .collect()),
    };

    match &result {
        Ok(request) => {
            tracing::info!("Input validation successful.");
            tracing::debug!("Normalised request: {:?}", request);
        }
        Err(errors) => {
            tracing::warn!("Input validation unsuccessful ({} errors).", errors.len());
        }
    }

    result
}

pub fn validate_start_deposit(start_deposit: i64) -> Result<u64, DepositError> {
    validate_positive_integer(start_deposit)
}

pub fn validate_interest_rate(interest_rate: f64) -> Result<f64, DepositError> {
    validate_positive_real(interest_rate)
}

/// Accepts one or two `<quantity> <unit>` pairs, e.g. "3 years" or
/// "3 years 9 months".
pub fn validate_term_length(term_length: &str) -> Result<TermLength, DepositError> {
    let tokens: Vec<&str> = term_length.split_whitespace().collect();

    let result = match tokens.len() {
        2 | 4 => parse_term_pairs(&tokens)?,
        _ => return Err(DepositError::parse("could not parse term length")),
    };

    if result.years == 0 && result.months == 0 {
        return Err(DepositError::invalid_value(
            "years and months cannot both be zero",
        ));
    }

    Ok(result)
}

pub fn validate_interest_paid(interest_paid: &str) -> Result<PaymentFrequency, DepositError> {
    match PaymentFrequency::parse(interest_paid) {
        PaymentFrequency::Undefined => Err(DepositError::invalid_value(
            "input for paid at interval undefined",
        )),
        paid_at => Ok(paid_at),
    }
}

fn parse_term_pairs(tokens: &[&str]) -> Result<TermLength, DepositError> {
    let mut years = None;
    let mut months = None;

    for pair in tokens.chunks_exact(2) {
        let [quantity, unit] = pair else {
            return Err(DepositError::parse("could not parse term length"));
        };

        let value: u32 = quantity.parse().map_err(|_| {
            DepositError::parse(format!("could not parse term length value '{}'", quantity))
        })?;

        let slot = if unit.contains("year") {
            &mut years
        } else if unit.contains("month") {
            &mut months
        } else {
            return Err(DepositError::parse(format!(
                "unrecognised term length unit '{}'",
                unit
            )));
        };

        if slot.replace(value).is_some() {
            return Err(DepositError::DuplicateUnit);
        }
    }

    Ok(TermLength::new(years.unwrap_or(0), months.unwrap_or(0)))
}
