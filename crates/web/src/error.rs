use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bmi::BmiError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Bmi(BmiError),
    Validation(ValidationErrors),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bmi(e) => write!(f, "BMI error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Bmi(BmiError::Overflow) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Bmi(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Bmi(e) => {
                tracing::warn!("Rejected BMI computation: {}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<BmiError> for WebError {
    fn from(error: BmiError) -> Self {
        Self::Bmi(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
