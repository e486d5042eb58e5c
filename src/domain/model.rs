use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a deposit term. Validated values never have both parts zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLength {
    pub years: u32,
    pub months: u32,
}

impl TermLength {
    pub fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }
}

impl fmt::Display for TermLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(count: u32, unit: &str) -> String {
            if count == 1 {
                format!("{} {}", count, unit)
            } else {
                format!("{} {}s", count, unit)
            }
        }

        match (self.years, self.months) {
            (0, months) => write!(f, "{}", part(months, "month")),
            (years, 0) => write!(f, "{}", part(years, "year")),
            (years, months) => write!(f, "{} {}", part(years, "year"), part(months, "month")),
        }
    }
}

/// When interest is paid on the deposit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    #[default]
    Undefined,
    Monthly,
    Quarterly,
    Annually,
    AtMaturity,
}

impl PaymentFrequency {
    /// Case-insensitive substring match, first hit wins: "monthly",
    /// "quarterly", "annually", "maturity". Anything else is `Undefined`.
    pub fn parse(text: &str) -> Self {
        let text = text.to_lowercase();

        if text.contains("monthly") {
            Self::Monthly
        } else if text.contains("quarterly") {
            Self::Quarterly
        } else if text.contains("annually") {
            Self::Annually
        } else if text.contains("maturity") {
            Self::AtMaturity
        } else {
            Self::Undefined
        }
    }

    /// Number of times per year interest is added to the principal.
    pub fn compounding_periods_per_year(&self) -> Option<f64> {
        match self {
            Self::Monthly => Some(12.0),
            Self::Quarterly => Some(4.0),
            Self::Annually => Some(1.0),
            Self::AtMaturity | Self::Undefined => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::AtMaturity => "at maturity",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, strongly-typed inputs ready for calculation. Only the
/// validator builds these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRequest {
    start_deposit: u64,
    interest_rate: f64,
    term_length: TermLength,
    paid_at: PaymentFrequency,
}

impl NormalizedRequest {
    pub(crate) fn new(
        start_deposit: u64,
        interest_rate: f64,
        term_length: TermLength,
        paid_at: PaymentFrequency,
    ) -> Self {
        Self {
            start_deposit,
            interest_rate,
            term_length,
            paid_at,
        }
    }

    /// Starting balance in whole units, e.g. 10000.
    pub fn start_deposit(&self) -> u64 {
        self.start_deposit
    }

    /// Annual rate in percentage points, e.g. 1.1 for 1.1%.
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn term_length(&self) -> TermLength {
        self.term_length
    }

    pub fn paid_at(&self) -> PaymentFrequency {
        self.paid_at
    }
}

/// The four raw values as entered by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub start_deposit: i64,
    pub interest_rate: f64,
    pub term_length: String,
    pub interest_paid: String,
}

/// Raw input fields, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    StartDeposit,
    InterestRate,
    TermLength,
    InterestPaid,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartDeposit => "start-deposit",
            Self::InterestRate => "interest-rate",
            Self::TermLength => "term-length",
            Self::InterestPaid => "interest-paid",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
