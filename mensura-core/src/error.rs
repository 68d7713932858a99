//! Lookup errors
//!
//! The conversion core has a single failure mode: a name that is not in
//! the table. Lookups are exact and case-sensitive; the table performs no
//! normalization. Nothing is retried, masked, or degraded - the caller
//! must supply valid names.

use serde::Serialize;
use thiserror::Error;

/// A category or unit name that is not present in the conversion table
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum NotFound {
    /// Unknown category name
    #[error("unknown category: {0}")]
    Category(String),

    /// Unit name not present in the selected category
    #[error("unknown unit in {category}: {unit}")]
    Unit { category: String, unit: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        let err = NotFound::Category("Sound".to_string());
        assert_eq!(format!("{}", err), "unknown category: Sound");
    }

    #[test]
    fn test_unit_display() {
        let err = NotFound::Unit {
            category: "Length".to_string(),
            unit: "furlongs".to_string(),
        };
        assert_eq!(format!("{}", err), "unknown unit in Length: furlongs");
    }
}
