//! Unitconv Units - Unit table and conversion
//!
//! A fixed table of named units grouped into categories, and a converter
//! between units of the same category.
//!
//! Categories:
//! - Length (meter, kilometer, mile, foot, ...)
//! - Weight (kilogram, gram, pound, ounce, ton)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liter, milliliter, gallon, cup)
//! - Speed (mps, kph, mph)
//!
//! ```
//! let feet = unitconv_units::convert(1.0, "mile", "foot").unwrap();
//! assert!((feet - 5280.0).abs() < 0.01);
//! ```

mod category;
mod unit;
mod units;
mod temperature;
mod convert;

pub use category::{Category, UnknownCategory};
pub use unit::{UnitDefinition, ConversionError};
pub use units::{UnitTable, TableError, UNITS};
pub use temperature::{TemperatureScale, convert_temperature};
pub use convert::{Converter, convert};
