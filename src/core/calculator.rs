use crate::domain::{NormalizedRequest, PaymentFrequency, TermLength};
use crate::utils::error::DepositError;

/// Final balance of a term deposit after interest. The result is not
/// rounded.
pub fn calculate(
    start_deposit: u64,
    interest_rate: f64,
    term_length: TermLength,
    paid_at: PaymentFrequency,
) -> Result<f64, DepositError> {
    tracing::info!("Running calculation for final balance...");

    match final_balance(start_deposit, interest_rate, term_length, paid_at) {
        Ok(balance) => {
            tracing::info!("Final balance calculation successful.");
            Ok(balance)
        }
        Err(e) => {
            tracing::error!("Final balance calculation unsuccessful: {}", e);
            Err(e)
        }
    }
}

pub fn calculate_request(request: &NormalizedRequest) -> Result<f64, DepositError> {
    calculate(
        request.start_deposit(),
        request.interest_rate(),
        request.term_length(),
        request.paid_at(),
    )
}

fn final_balance(
    start_deposit: u64,
    interest_rate: f64,
    term_length: TermLength,
    paid_at: PaymentFrequency,
) -> Result<f64, DepositError> {
    if paid_at == PaymentFrequency::Undefined {
        return Err(DepositError::invalid_state(
            "cannot calculate final balance without a defined paid at interval",
        ));
    }

    let total_months = term_length.total_months();
    if total_months == 0 {
        return Err(DepositError::invalid_state(
            "total time of investment term cannot be less than 1 month",
        ));
    }

    let principal = start_deposit as f64;
    let rate = interest_rate / 100.0;
    let years = total_months as f64 / 12.0;

    let balance = match paid_at.compounding_periods_per_year() {
        Some(periods) => compound_interest(principal, rate, periods, years),
        None => simple_interest(principal, rate, years),
    };

    Ok(balance)
}

/// Interest accrues linearly and is paid once at the end of the term.
fn simple_interest(principal: f64, rate: f64, years: f64) -> f64 {
    principal + principal * rate * years
}

fn compound_interest(principal: f64, rate: f64, periods: f64, years: f64) -> f64 {
    principal * (1.0 + rate / periods).powf(periods * years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_at_maturity_is_simple_interest() {
        let balance = calculate(
            10_000,
            1.1,
            TermLength::new(3, 0),
            PaymentFrequency::AtMaturity,
        )
        .unwrap();
        assert_eq!(balance, 10_330.0);
    }

    #[test]
    fn test_at_maturity_partial_year() {
        let balance = calculate(
            12_000,
            5.0,
            TermLength::new(0, 6),
            PaymentFrequency::AtMaturity,
        )
        .unwrap();
        assert_relative_eq!(balance, 12_300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annually_compounds_once_a_year() {
        let balance = calculate(
            10_000,
            1.1,
            TermLength::new(3, 0),
            PaymentFrequency::Annually,
        )
        .unwrap();
        assert_relative_eq!(balance, 10_000.0 * 1.011_f64.powi(3), epsilon = 1e-9);
        assert_relative_eq!(balance, 10_333.64331, epsilon = 1e-4);
    }

    #[test]
    fn test_monthly_compounds_twelve_times() {
        let balance = calculate(
            10_000,
            12.0,
            TermLength::new(1, 0),
            PaymentFrequency::Monthly,
        )
        .unwrap();
        assert_relative_eq!(balance, 10_000.0 * 1.01_f64.powi(12), epsilon = 1e-9);
        assert_relative_eq!(balance, 11_268.25, epsilon = 1e-2);
    }

    #[test]
    fn test_quarterly_with_fractional_years() {
        let balance = calculate(
            10_000,
            4.0,
            TermLength::new(1, 6),
            PaymentFrequency::Quarterly,
        )
        .unwrap();
        assert_relative_eq!(balance, 10_000.0 * 1.01_f64.powi(6), epsilon = 1e-9);
    }

    #[test]
    fn test_undefined_frequency_is_invalid_state() {
        let err = calculate(
            10_000,
            1.1,
            TermLength::new(3, 0),
            PaymentFrequency::Undefined,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_zero_term_is_invalid_state() {
        let err = calculate(
            10_000,
            1.1,
            TermLength::new(0, 0),
            PaymentFrequency::Monthly,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_calculate_request_matches_calculate() {
        let request = NormalizedRequest::new(
            5_000,
            2.5,
            TermLength::new(2, 3),
            PaymentFrequency::Quarterly,
        );
        assert_eq!(
            calculate_request(&request).unwrap().to_bits(),
            calculate(5_000, 2.5, TermLength::new(2, 3), PaymentFrequency::Quarterly)
                .unwrap()
                .to_bits()
        );
    }
}
