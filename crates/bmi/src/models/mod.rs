pub mod bmi_result;
pub mod category;
pub mod unit;

pub use bmi_result::BmiResult;
pub use category::{CATEGORIES, Category};
pub use unit::UnitSystem;
