//! Enumeration and display support for the presentation layer

use serde::Serialize;

use crate::table::ConversionTable;

/// One category with its unit names, ready for selection widgets
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub name: String,
    pub units: Vec<String>,
}

impl ConversionTable {
    /// Every category with its units, sorted for deterministic display
    pub fn listing(&self) -> Vec<CategoryListing> {
        let mut listing: Vec<CategoryListing> = self
            .categories()
            .map(|category| CategoryListing {
                name: category.name().to_string(),
                units: category
                    .unit_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
            .collect();
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        listing
    }
}

/// Render a conversion the way the interactive screen shows it, with the
/// result fixed to 4 decimal places: `1 kilometers = 1000.0000 meters`
pub fn format_result(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{} {} = {:.4} {}", value, from_unit, result, to_unit)
}
