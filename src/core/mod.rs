pub mod calculator;
pub mod validator;

pub use calculator::{calculate, calculate_request};
pub use validator::validate;
