use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::BmiError;

/// Unit system of the weight and height inputs.
///
/// Metric takes kilograms and centimeters, imperial takes pounds and inches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Centimeters per meter
pub const CM_PER_METER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// lb/in² to kg/m² conversion factor
pub const IMPERIAL_FACTOR: Decimal = Decimal::from_parts(703, 0, 0, false, 0);

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn all() -> &'static [UnitSystem] {
        &[Self::Metric, Self::Imperial]
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lb",
        }
    }

    pub fn height_unit(&self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }

    fn parse_str(s: &str) -> Result<Self, BmiError> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            _ => Err(BmiError::UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = BmiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
