use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{BmiError, Result};
use crate::models::unit::{CM_PER_METER, IMPERIAL_FACTOR};
use crate::models::{BmiResult, CATEGORIES, Category, UnitSystem};

/// Computes the BMI for `weight`/`height` in the given unit system and
/// classifies it against [`CATEGORIES`].
///
/// Metric: kg / m² with height given in centimeters.
/// Imperial: (lb / in²) × 703.
///
/// The value is rounded half away from zero to one decimal place before the
/// lookup, so a raw 24.95 lands in "Overweight".
pub fn compute_bmi(
    weight: Decimal,
    height: Decimal,
    unit: UnitSystem,
) -> Result<BmiResult<'static>> {
    let raw = raw_bmi(weight, height, unit)?;
    let bmi_value = round_bmi(raw);
    let matched_category = classify(bmi_value);

    tracing::debug!(
        %weight,
        %height,
        %unit,
        %bmi_value,
        category = matched_category.label,
        "Computed BMI"
    );

    Ok(BmiResult {
        bmi_value,
        matched_category,
        unit,
    })
}

/// Same as [`compute_bmi`] for float inputs. NaN and infinities are rejected.
pub fn compute_bmi_f64(weight: f64, height: f64, unit: UnitSystem) -> Result<BmiResult<'static>> {
    let weight = decimal_from_f64(weight, "weight")?;
    let height = decimal_from_f64(height, "height")?;

    compute_bmi(weight, height, unit)
}

/// The unrounded BMI.
pub fn raw_bmi(weight: Decimal, height: Decimal, unit: UnitSystem) -> Result<Decimal> {
    ensure_positive(weight, "weight")?;
    ensure_positive(height, "height")?;

    match unit {
        UnitSystem::Metric => {
            let height_m = height.checked_div(CM_PER_METER).ok_or(BmiError::Overflow)?;
            let height_sq = height_m.checked_mul(height_m).ok_or(BmiError::Overflow)?;
            weight.checked_div(height_sq).ok_or(BmiError::Overflow)
        }
        UnitSystem::Imperial => {
            let height_sq = height.checked_mul(height).ok_or(BmiError::Overflow)?;
            weight
                .checked_div(height_sq)
                .and_then(|ratio| ratio.checked_mul(IMPERIAL_FACTOR))
                .ok_or(BmiError::Overflow)
        }
    }
}

/// One decimal place, midpoints rounded away from zero.
pub fn round_bmi(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// First category whose `[min, max)` holds `bmi_value`, "Normal" when none does.
pub fn classify(bmi_value: Decimal) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|category| category.contains(bmi_value))
        .unwrap_or_else(|| {
            tracing::warn!(%bmi_value, "BMI outside category table, using Normal");
            Category::normal()
        })
}

fn ensure_positive(value: Decimal, field: &'static str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(BmiError::InvalidInput {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

fn decimal_from_f64(value: f64, field: &'static str) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(BmiError::InvalidInput {
            field,
            reason: "must be a finite number",
        });
    }

    Decimal::from_f64(value).ok_or(BmiError::InvalidInput {
        field,
        reason: "is outside the supported numeric range",
    })
}
