//! Temperature scales
//!
//! Temperature needs an offset as well as a scale, so it cannot share the
//! factor path used by the other categories. Every conversion goes through
//! Celsius.

use std::fmt;
use crate::ConversionError;

const KELVIN_OFFSET: f64 = 273.15;

/// A recognised temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Resolve a scale from a unit name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, ConversionError> {
        match name.to_lowercase().as_str() {
            "celsius" => Ok(TemperatureScale::Celsius),
            "fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" => Ok(TemperatureScale::Kelvin),
            _ => Err(ConversionError::UnsupportedScale(name.to_string())),
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - KELVIN_OFFSET,
        }
    }

    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
        }
    }

    /// Convert a reading on this scale to another scale
    pub fn convert(&self, value: f64, target: TemperatureScale) -> f64 {
        if *self == target {
            return value;
        }
        target.from_celsius(self.to_celsius(value))
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        };
        write!(f, "{}", name)
    }
}

/// Convert between two temperature unit names
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from = TemperatureScale::from_name(from)?;
    let to = TemperatureScale::from_name(to)?;
    Ok(from.convert(value, to))
}
