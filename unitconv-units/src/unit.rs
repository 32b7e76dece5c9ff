//! Unit representation with conversion factors

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::Category;

/// A named unit with its category and conversion factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// The unit name (e.g., "meter", "kilogram"), matched case-insensitively
    pub name: String,
    /// Category the unit belongs to
    pub category: Category,
    /// Factor to convert to the category base unit (value_base = value * to_base_factor).
    /// Placeholder for temperature, which converts through dedicated formulas.
    pub to_base_factor: f64,
}

impl UnitDefinition {
    pub fn new(name: &str, to_base_factor: f64, category: Category) -> Self {
        UnitDefinition {
            name: name.to_string(),
            category,
            to_base_factor,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        !self.category.is_affine() && self.to_base_factor == 1.0
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.category == other.category
    }

    /// Multiplier taking a value in this unit to `target` (same category)
    pub fn ratio_to(&self, target: &UnitDefinition) -> f64 {
        self.to_base_factor / target.to_base_factor
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Unit name has no match in the table
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units resolved but belong to different categories
    #[error("cannot convert between different categories: {0} and {1}")]
    CategoryMismatch(Category, Category),

    /// Temperature conversion asked for a scale other than celsius, fahrenheit or kelvin
    #[error("unsupported temperature scale: {0}")]
    UnsupportedScale(String),
}
