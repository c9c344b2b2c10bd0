use rust_decimal::Decimal;
use serde::Serialize;

use super::{Category, UnitSystem};

/// Outcome of one BMI computation.
///
/// `matched_category` borrows an entry of the static category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BmiResult<'a> {
    /// BMI rounded to one decimal place
    pub bmi_value: Decimal,
    pub matched_category: &'a Category,
    pub unit: UnitSystem,
}

impl BmiResult<'_> {
    /// The BMI as display text with exactly one decimal, e.g. "25.0"
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.bmi_value)
    }

    pub fn label(&self) -> &str {
        self.matched_category.label
    }
}
