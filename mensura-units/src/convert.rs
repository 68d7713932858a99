//! The convert operation and the formula explanation helper

use mensura_core::{NotFound, Rule};

use crate::table::{ConversionTable, TABLE};

impl ConversionTable {
    /// Convert `value` from `from_unit` to `to_unit` within `category`.
    ///
    /// Linear categories pivot through the base unit:
    /// `value * factor(from) / factor(to)`. Temperature pivots through
    /// Celsius: the source side applies the unit's own function, the
    /// target side is a fixed branch on the unit name. Plain IEEE f64
    /// arithmetic, no internal rounding.
    pub fn convert(
        &self,
        category: &str,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, NotFound> {
        let from_rule = self.rule(category, from_unit)?;
        let to_rule = self.rule(category, to_unit)?;

        match (*from_rule, *to_rule) {
            (
                Rule::Linear {
                    factor: from_factor,
                },
                Rule::Linear { factor: to_factor },
            ) => Ok(value * from_factor / to_factor),
            (from_rule, _) => {
                let reference = from_rule.to_reference(value);
                Ok(match to_unit {
                    "fahrenheit" => reference * 9.0 / 5.0 + 32.0,
                    "kelvin" => reference + 273.15,
                    _ => reference,
                })
            }
        }
    }

    /// Human-readable description of how a conversion is computed, for the
    /// presentation layer's explanation panel
    pub fn explanation(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<String, NotFound> {
        let from_rule = self.rule(category, from_unit)?;
        let to_rule = self.rule(category, to_unit)?;

        Ok(match (from_rule, to_rule) {
            (
                Rule::Linear {
                    factor: from_factor,
                },
                Rule::Linear { factor: to_factor },
            ) => format!("value * {} / {}", from_factor, to_factor),
            _ => "Temperature conversions are non-linear. Conversions use formulas \
                  depending on the selected units."
                .to_string(),
        })
    }
}

/// Convert using the global [`TABLE`]
pub fn convert(category: &str, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, NotFound> {
    TABLE.convert(category, value, from_unit, to_unit)
}

/// Explain a conversion using the global [`TABLE`]
pub fn explanation(category: &str, from_unit: &str, to_unit: &str) -> Result<String, NotFound> {
    TABLE.explanation(category, from_unit, to_unit)
}
