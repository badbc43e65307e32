pub mod catalog;
pub mod clock;
pub mod date;
pub mod rules;
pub mod search;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rules::{evaluate, RuleResult, RuleViolation, SearchRule};
pub use search::{FlightSearchRequest, ValidatedRequest};
pub use validator::RequestValidator;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] RuleViolation),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
