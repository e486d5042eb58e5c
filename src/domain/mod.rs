// Domain layer: plain data types shared by the validator and the calculator.

pub mod model;

pub use model::{Field, NormalizedRequest, PaymentFrequency, RawInputs, TermLength};
