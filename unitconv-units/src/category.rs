//! Unit categories
//!
//! A category groups units that are mutually convertible. The set is closed:
//! every unit in the table belongs to exactly one of these.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Text that names no category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Category of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Speed,
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Speed,
    ];

    /// Lowercase name (e.g., "length")
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Speed => "speed",
        }
    }

    /// Temperature is the only category that needs an offset
    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == needle)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
