pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BmiError, Result};
pub use models::{BmiResult, CATEGORIES, Category, UnitSystem};
pub use services::bmi_computation::{classify, compute_bmi, compute_bmi_f64, raw_bmi, round_bmi};
