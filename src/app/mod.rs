pub mod report;

use crate::core::{calculate_request, validate};
use crate::domain::{NormalizedRequest, RawInputs};
use crate::utils::error::{AppError, Result};

/// A validated request together with its computed, unrounded balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub request: NormalizedRequest,
    pub final_balance: f64,
}

/// Validates the raw inputs and calculates the final balance.
pub fn run(inputs: &RawInputs) -> Result<Quote> {
    let request = validate(
        inputs.start_deposit,
        inputs.interest_rate,
        &inputs.term_length,
        &inputs.interest_paid,
    )
    .map_err(AppError::Validation)?;

    let final_balance = calculate_request(&request).map_err(AppError::Calculation)?;

    Ok(Quote {
        request,
        final_balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaymentFrequency, TermLength};
    use approx::assert_relative_eq;

    fn inputs(start_deposit: i64, interest_rate: f64, term: &str, paid: &str) -> RawInputs {
        RawInputs {
            start_deposit,
            interest_rate,
            term_length: term.to_string(),
            interest_paid: paid.to_string(),
        }
    }

    #[test]
    fn test_run_produces_quote() {
        let quote = run(&inputs(10_000, 1.1, "3 years", "at maturity")).unwrap();
        assert_eq!(quote.request.term_length(), TermLength::new(3, 0));
        assert_eq!(quote.request.paid_at(), PaymentFrequency::AtMaturity);
        assert_relative_eq!(quote.final_balance, 10_330.0, epsilon = 1e-9);
    }

    #[test]
    fn test_run_reports_validation_errors() {
        match run(&inputs(0, 0.0, "3 years", "monthly")) {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }
}
