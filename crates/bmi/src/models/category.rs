use rust_decimal::Decimal;
use serde::Serialize;

/// A labeled half-open BMI interval `[min, max)`.
///
/// Entries only exist inside [`CATEGORIES`]; callers receive `&'static`
/// references into that table and never own a copy of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Inclusive lower bound
    pub min: Decimal,
    /// Exclusive upper bound
    pub max: Decimal,
    pub label: &'static str,
    /// Display text for the interval, e.g. "18.5 - 24.9"
    pub range_text: &'static str,
    /// Presentation color token, passed through untouched
    pub color_class: &'static str,
}

/// Index of "Normal", used when a value falls outside every interval.
pub const NORMAL_INDEX: usize = 3;

const fn tenths(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 1)
}

/// WHO-style BMI classification, ascending and contiguous over `[0, 1000)`.
pub static CATEGORIES: [Category; 8] = [
    Category {
        min: tenths(0),
        max: tenths(160),
        label: "Very severely underweight",
        range_text: "< 16",
        color_class: "bg-[#0096FF]",
    },
    Category {
        min: tenths(160),
        max: tenths(170),
        label: "Severely underweight",
        range_text: "16.0 - 16.9",
        color_class: "bg-[#00D2FF]",
    },
    Category {
        min: tenths(170),
        max: tenths(185),
        label: "Underweight",
        range_text: "17.0 - 18.4",
        color_class: "bg-[#7DF9FF]",
    },
    Category {
        min: tenths(185),
        max: tenths(250),
        label: "Normal",
        range_text: "18.5 - 24.9",
        color_class: "bg-[#4ADE80]",
    },
    Category {
        min: tenths(250),
        max: tenths(300),
        label: "Overweight",
        range_text: "25.0 - 29.9",
        color_class: "bg-[#FACC15]",
    },
    Category {
        min: tenths(300),
        max: tenths(350),
        label: "Obese class I",
        range_text: "30.0 - 34.9",
        color_class: "bg-[#F97316]",
    },
    Category {
        min: tenths(350),
        max: tenths(400),
        label: "Obese class II",
        range_text: "35.0 - 39.9",
        color_class: "bg-[#EA580C]",
    },
    Category {
        min: tenths(400),
        max: tenths(10000),
        label: "Obese class III",
        range_text: "> 39.9",
        color_class: "bg-[#EF4444]",
    },
];

impl Category {
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// The fallback category for values no interval claims
    pub fn normal() -> &'static Category {
        &CATEGORIES[NORMAL_INDEX]
    }

    pub fn get(index: usize) -> Option<&'static Category> {
        CATEGORIES.get(index)
    }

    /// Case-insensitive lookup by label
    pub fn by_label(label: &str) -> Option<&'static Category> {
        let needle = label.trim();
        CATEGORIES
            .iter()
            .find(|category| category.label.eq_ignore_ascii_case(needle))
    }

    /// Position of this entry in [`CATEGORIES`]
    pub fn index(&self) -> Option<usize> {
        CATEGORIES.iter().position(|category| category.label == self.label)
    }

    /// Half-open membership test: `min <= value < max`
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_ascending() {
        for category in CATEGORIES.iter() {
            assert!(category.min < category.max, "{} has min >= max", category.label);
        }
    }

    #[test]
    fn test_intervals_are_contiguous() {
        for pair in CATEGORIES.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
        }
    }

    #[test]
    fn test_table_covers_zero_to_thousand() {
        assert_eq!(CATEGORIES[0].min, Decimal::ZERO);
        assert_eq!(CATEGORIES[CATEGORIES.len() - 1].max, Decimal::from(1000));
    }

    #[test]
    fn test_exact_boundaries_match_source_values() {
        assert_eq!(CATEGORIES[2].max.to_string(), "18.5");
        assert_eq!(CATEGORIES[3].min.to_string(), "18.5");
        assert_eq!(CATEGORIES[4].min, Decimal::from(25));
    }

    #[test]
    fn test_normal_is_fourth_entry() {
        let normal = Category::normal();
        assert_eq!(normal.label, "Normal");
        assert_eq!(normal.index(), Some(3));
    }

    #[test]
    fn test_contains_is_half_open() {
        let normal = Category::normal();
        assert!(normal.contains(Decimal::new(185, 1)));
        assert!(normal.contains(Decimal::new(249, 1)));
        assert!(!normal.contains(Decimal::from(25)));
        assert!(!normal.contains(Decimal::new(184, 1)));
    }

    #[test]
    fn test_by_label_ignores_case() {
        let category = Category::by_label("obese class ii").unwrap();
        assert_eq!(category.range_text, "35.0 - 39.9");
        assert!(Category::by_label("Morbid").is_none());
    }

    #[test]
    fn test_get_out_of_range() {
        assert!(Category::get(7).is_some());
        assert!(Category::get(8).is_none());
    }
}
