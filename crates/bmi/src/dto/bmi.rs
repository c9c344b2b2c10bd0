use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::category::NORMAL_INDEX;
use crate::models::{BmiResult, Category, UnitSystem};

/// Request payload for a BMI computation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ComputeBmiRequest {
    /// Weight in kg (metric) or lb (imperial)
    #[validate(custom(function = "validate_positive", message = "Weight must be greater than zero"))]
    pub weight: Decimal,

    /// Height in cm (metric) or in (imperial)
    #[validate(custom(function = "validate_positive", message = "Height must be greater than zero"))]
    pub height: Decimal,

    #[serde(default)]
    pub unit: UnitSystem,
}

fn validate_positive(value: &Decimal) -> Result<(), validator::ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(validator::ValidationError::new("not_positive"))
    }
}

/// Result of a BMI computation with the matched category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComputeBmiResponse {
    pub bmi_value: Decimal,
    /// BMI formatted with exactly one decimal
    pub bmi_display: String,
    pub unit: UnitSystem,
    pub category: CategoryResponse,
}

impl From<BmiResult<'_>> for ComputeBmiResponse {
    fn from(result: BmiResult<'_>) -> Self {
        let index = result.matched_category.index().unwrap_or(NORMAL_INDEX);

        Self {
            bmi_value: result.bmi_value,
            bmi_display: result.display_value(),
            unit: result.unit,
            category: CategoryResponse::new(index, result.matched_category),
        }
    }
}

/// One entry of the BMI category table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub index: usize,
    pub min: Decimal,
    pub max: Decimal,
    pub label: String,
    pub range_text: String,
    pub color_class: String,
}

impl CategoryResponse {
    pub fn new(index: usize, category: &Category) -> Self {
        Self {
            index,
            min: category.min,
            max: category.max,
            label: category.label.to_string(),
            range_text: category.range_text.to_string(),
            color_class: category.color_class.to_string(),
        }
    }

    pub fn table() -> Vec<Self> {
        Category::all()
            .iter()
            .enumerate()
            .map(|(index, category)| Self::new(index, category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::bmi_computation::compute_bmi;

    #[test]
    fn test_unit_defaults_to_metric() {
        let req: ComputeBmiRequest =
            serde_json::from_str(r#"{"weight": 70, "height": 175}"#).unwrap();
        assert_eq!(req.unit, UnitSystem::Metric);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_accepts_imperial_and_fractional_input() {
        let req: ComputeBmiRequest =
            serde_json::from_str(r#"{"weight": 154.5, "height": "69", "unit": "imperial"}"#)
                .unwrap();
        assert_eq!(req.unit, UnitSystem::Imperial);
        assert_eq!(req.weight, Decimal::new(1545, 1));
    }

    #[test]
    fn test_rejects_unknown_unit() {
        let result = serde_json::from_str::<ComputeBmiRequest>(
            r#"{"weight": 70, "height": 175, "unit": "stones"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_flags_non_positive_fields() {
        let req = ComputeBmiRequest {
            weight: Decimal::ZERO,
            height: Decimal::new(-5, 0),
            unit: UnitSystem::Metric,
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
    }

    #[test]
    fn test_response_from_result() {
        let result = compute_bmi(Decimal::from(70), Decimal::from(175), UnitSystem::Metric).unwrap();
        let response = ComputeBmiResponse::from(result);

        assert_eq!(response.bmi_display, "22.9");
        assert_eq!(response.category.index, 3);
        assert_eq!(response.category.label, "Normal");
        assert_eq!(response.category.color_class, "bg-[#4ADE80]");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["unit"], "metric");
        assert_eq!(json["category"]["range_text"], "18.5 - 24.9");
    }

    #[test]
    fn test_table_has_every_category_in_order() {
        let table = CategoryResponse::table();
        assert_eq!(table.len(), 8);
        assert_eq!(table[0].label, "Very severely underweight");
        assert_eq!(table[7].label, "Obese class III");
        assert!(table.iter().enumerate().all(|(i, c)| c.index == i));
    }
}
