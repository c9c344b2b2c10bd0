use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BmiError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Unknown unit system: '{0}'. Available: metric, imperial")]
    UnknownUnit(String),

    #[error("BMI computation overflowed the decimal range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, BmiError>;

impl BmiError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, BmiError::InvalidInput { .. } | BmiError::UnknownUnit(_))
    }
}
