//! Unit conversion
//!
//! Resolves both unit names against a table, checks that they share a
//! category, then scales through the category base unit. Temperature is
//! dispatched to [`crate::temperature`].

use crate::temperature::convert_temperature;
use crate::units::{UnitTable, UNITS};
use crate::ConversionError;

/// Converts values between units of one table
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    table: &'t UnitTable,
}

impl Converter<'static> {
    /// Converter over the built-in table
    pub fn standard() -> Self {
        Converter { table: &UNITS }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> Converter<'t> {
    pub fn new(table: &'t UnitTable) -> Self {
        Converter { table }
    }

    pub fn table(&self) -> &'t UnitTable {
        self.table
    }

    /// Convert `value` from one named unit to another.
    ///
    /// An unknown name is reported before a category mismatch, and the
    /// source name is checked before the target.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from_unit = self
            .table
            .find_by_name(from)
            .ok_or_else(|| ConversionError::UnknownUnit(from.to_string()))?;
        let to_unit = self
            .table
            .find_by_name(to)
            .ok_or_else(|| ConversionError::UnknownUnit(to.to_string()))?;

        if !from_unit.is_compatible(to_unit) {
            return Err(ConversionError::CategoryMismatch(from_unit.category, to_unit.category));
        }

        let result = if from_unit.category.is_affine() {
            convert_temperature(value, &from_unit.name, &to_unit.name)?
        } else {
            value * from_unit.ratio_to(to_unit)
        };

        tracing::debug!(
            value,
            from = %from_unit.name,
            to = %to_unit.name,
            category = %from_unit.category,
            result,
            "converted"
        );

        Ok(result)
    }
}

/// Convert using the built-in table
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    Converter::standard().convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, UnitDefinition};

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_identity_for_every_unit() {
        for name in UNITS.all_unit_names() {
            for x in [0.0, 1.0, -17.5, 273.15, 1e9] {
                assert_eq!(convert(x, name, name).unwrap(), x, "{} -> {}", name, name);
            }
        }
    }

    #[test]
    fn test_round_trip_within_category() {
        for category in Category::ALL.into_iter().filter(|c| !c.is_affine()) {
            let names = UNITS.units_in_category(category);
            for a in &names {
                for b in &names {
                    let there = convert(123.456, a, b).unwrap();
                    let back = convert(there, b, a).unwrap();
                    assert!(approx_eq(back, 123.456, 1e-12), "{} <-> {}: {}", a, b, back);
                }
            }
        }
    }

    #[test]
    fn test_temperature_reference_points() {
        assert_eq!(convert(0.0, "celsius", "fahrenheit").unwrap(), 32.0);
        assert_eq!(convert(100.0, "celsius", "fahrenheit").unwrap(), 212.0);
        assert_eq!(convert(0.0, "celsius", "kelvin").unwrap(), 273.15);
        assert!(approx_eq(convert(32.0, "fahrenheit", "kelvin").unwrap(), 273.15, 1e-12));
    }

    #[test]
    fn test_linear_conversions() {
        assert_eq!(convert(1.0, "kilometer", "meter").unwrap(), 1000.0);

        let feet = convert(1.0, "mile", "foot").unwrap();
        assert!(approx_eq(feet, 1609.34 / 0.3048, 1e-12));
        assert!((feet - 5279.9869).abs() < 1e-4);

        assert!(approx_eq(convert(1.0, "pound", "gram").unwrap(), 453.592, 1e-12));
        assert!(approx_eq(convert(1.0, "gallon", "milliliter").unwrap(), 3785.41, 1e-12));
        assert!(approx_eq(convert(100.0, "kph", "mps").unwrap(), 27.7778, 1e-12));
    }

    #[test]
    fn test_category_mismatch() {
        let err = convert(1.0, "meter", "kilogram").unwrap_err();
        assert_eq!(err, ConversionError::CategoryMismatch(Category::Length, Category::Weight));

        let err = convert(1.0, "celsius", "liter").unwrap_err();
        assert_eq!(err, ConversionError::CategoryMismatch(Category::Temperature, Category::Volume));
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(1.0, "parsec", "meter").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));

        let err = convert(1.0, "meter", "furlong").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("furlong".to_string()));
    }

    #[test]
    fn test_unknown_unit_takes_precedence() {
        // Source is checked first
        let err = convert(1.0, "parsec", "furlong").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));

        // Unknown target wins over what would be a mismatch
        let err = convert(1.0, "kilogram", "parsec").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));
    }

    #[test]
    fn test_case_insensitive_names() {
        assert_eq!(
            convert(1.0, "METER", "Kilometer").unwrap(),
            convert(1.0, "meter", "kilometer").unwrap()
        );
        assert_eq!(convert(0.0, "Celsius", "FAHRENHEIT").unwrap(), 32.0);
    }

    #[test]
    fn test_unsupported_scale_in_custom_table() {
        let table = UnitTable::try_from_units([
            UnitDefinition::new("celsius", 1.0, Category::Temperature),
            UnitDefinition::new("rankine", 1.0, Category::Temperature),
        ])
        .unwrap();
        let converter = Converter::new(&table);

        let err = converter.convert(491.67, "rankine", "celsius").unwrap_err();
        assert_eq!(err, ConversionError::UnsupportedScale("rankine".to_string()));

        // Unknown names are still unknown, not unsupported
        let err = converter.convert(1.0, "kelvin", "celsius").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("kelvin".to_string()));
    }

    #[test]
    fn test_standard_converter_uses_global_table() {
        let converter = Converter::default();
        assert_eq!(converter.table().len(), UNITS.len());
    }
}
