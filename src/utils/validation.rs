use crate::utils::error::{AppError, DepositError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const NOT_POSITIVE: &str = "value cannot be less than or equal to zero";

/// Rejects zero and negative integers, returning the value as unsigned.
pub fn validate_positive_integer(value: i64) -> std::result::Result<u64, DepositError> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| DepositError::invalid_value(NOT_POSITIVE))
}

/// Rejects zero, negative and NaN values.
pub fn validate_positive_real(value: f64) -> std::result::Result<f64, DepositError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DepositError::invalid_value(NOT_POSITIVE))
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::config(
            field_name,
            format!("value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_integer() {
        assert_eq!(validate_positive_integer(1), Ok(1));
        assert_eq!(validate_positive_integer(10_000), Ok(10_000));
        assert!(validate_positive_integer(0).is_err());
        assert!(validate_positive_integer(-1).is_err());
        assert!(validate_positive_integer(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_positive_real() {
        assert_eq!(validate_positive_real(1.1), Ok(1.1));
        assert!(validate_positive_real(0.0).is_err());
        assert!(validate_positive_real(-0.5).is_err());
        assert!(validate_positive_real(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.decimal_places", 2, 0, 8).is_ok());
        assert!(validate_range("output.decimal_places", 0, 0, 8).is_ok());
        assert!(validate_range("output.decimal_places", 9, 0, 8).is_err());
    }
}
