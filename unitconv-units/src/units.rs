//! Unit definitions - the fixed table of known units, organized by category

use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use crate::{Category, UnitDefinition};

/// Global unit table
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::standard);

/// Errors building a custom table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate unit name: {0}")]
    DuplicateName(String),

    /// Linear units need a finite, positive factor
    #[error("invalid conversion factor for unit: {0}")]
    InvalidFactor(String),
}

/// Table of unit definitions, in definition order, indexed by lowercased name
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    units: Vec<UnitDefinition>,
    index: HashMap<String, usize>,
}

impl UnitTable {
    /// The built-in table
    pub fn standard() -> Self {
        let mut table = UnitTable::default();
        table.register_length_units();
        table.register_weight_units();
        table.register_temperature_units();
        table.register_volume_units();
        table.register_speed_units();
        table
    }

    /// Build a table from arbitrary definitions.
    ///
    /// Names must stay unique once lowercased, and every non-temperature
    /// unit needs a finite factor greater than zero.
    pub fn try_from_units<I>(units: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = UnitDefinition>,
    {
        let mut table = UnitTable::default();
        for unit in units {
            table.try_register(unit)?;
        }
        Ok(table)
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<&UnitDefinition> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.units[i])
    }

    /// All unit names in definition order
    pub fn all_unit_names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name.as_str()).collect()
    }

    /// Names of the units in a category, in definition order
    pub fn units_in_category(&self, category: Category) -> Vec<&str> {
        self.units
            .iter()
            .filter(|u| u.category == category)
            .map(|u| u.name.as_str())
            .collect()
    }

    /// Categories with at least one unit, in menu order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.units.iter().any(|u| u.category == *c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn try_register(&mut self, unit: UnitDefinition) -> Result<(), TableError> {
        if !unit.category.is_affine()
            && !(unit.to_base_factor.is_finite() && unit.to_base_factor > 0.0)
        {
            return Err(TableError::InvalidFactor(unit.name));
        }
        let key = unit.name.to_lowercase();
        if self.index.contains_key(&key) {
            return Err(TableError::DuplicateName(unit.name));
        }
        self.index.insert(key, self.units.len());
        self.units.push(unit);
        Ok(())
    }

    fn register(&mut self, name: &str, to_base_factor: f64, category: Category) {
        let result = self.try_register(UnitDefinition::new(name, to_base_factor, category));
        debug_assert!(result.is_ok(), "built-in unit rejected: {:?}", result);
    }

    fn register_length_units(&mut self) {
        // Base: meter
        self.register("meter", 1.0, Category::Length);
        self.register("kilometer", 1000.0, Category::Length);
        self.register("centimeter", 0.01, Category::Length);
        self.register("mile", 1609.34, Category::Length);
        self.register("foot", 0.3048, Category::Length);
        self.register("inch", 0.0254, Category::Length);
    }

    fn register_weight_units(&mut self) {
        // Base: kilogram
        self.register("kilogram", 1.0, Category::Weight);
        self.register("gram", 0.001, Category::Weight);
        self.register("pound", 0.453592, Category::Weight);
        self.register("ounce", 0.0283495, Category::Weight);
        self.register("ton", 1000.0, Category::Weight);
    }

    fn register_temperature_units(&mut self) {
        // Factors unused: temperature goes through TemperatureScale
        self.register("celsius", 1.0, Category::Temperature);
        self.register("fahrenheit", 1.0, Category::Temperature);
        self.register("kelvin", 1.0, Category::Temperature);
    }

    fn register_volume_units(&mut self) {
        // Base: liter
        self.register("liter", 1.0, Category::Volume);
        self.register("milliliter", 0.001, Category::Volume);
        self.register("gallon", 3.78541, Category::Volume);
        self.register("cup", 0.236588, Category::Volume);
    }

    fn register_speed_units(&mut self) {
        // Base: meters per second
        self.register("mps", 1.0, Category::Speed);
        self.register("kph", 0.277778, Category::Speed);
        self.register("mph", 0.44704, Category::Speed);
    }
}
