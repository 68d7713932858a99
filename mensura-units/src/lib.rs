//! Mensura Units - Category-based unit conversion
//!
//! A static table of measurement categories, each mapping unit names to
//! conversion rules, plus the single `convert` operation over it. All
//! linear categories convert by pivoting through their base unit;
//! Temperature pivots through Celsius with per-unit formulas.
//!
//! Categories:
//! - Length (meters, kilometers, miles, feet, inches)
//! - Weight (grams, kilograms, pounds, ounces)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Time (seconds, minutes, hours, days)
//! - Volume (liters, milliliters, gallons, cups)
//! - Area (square meters, square kilometers, acres, square miles)
//! - Speed (m/s, km/h, mph)
//! - Energy (joules, calories, kilojoules, kilocalories)
//! - Pressure (pascals, bar, psi, atmospheres)
//! - Digital Storage (bytes, kilobytes, megabytes, gigabytes)

mod convert;
mod listing;
mod table;

pub use convert::{convert, explanation};
pub use listing::{format_result, CategoryListing};
pub use table::{Category, ConversionTable, TABLE};

pub use mensura_core::{NotFound, Rule};
