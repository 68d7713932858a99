//! The conversion table - ten categories with their units and rules

use std::collections::HashMap;
use std::sync::LazyLock;

use mensura_core::{NotFound, Rule};

/// Global conversion table, built once and read-only afterwards
pub static TABLE: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::new);

/// A named, disjoint set of units sharing one base unit
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    units: HashMap<String, Rule>,
}

impl Category {
    fn new(name: &str) -> Self {
        Category {
            name: name.to_string(),
            units: HashMap::new(),
        }
    }

    /// Builder: add a unit to this category
    fn unit(mut self, name: &str, rule: Rule) -> Self {
        self.units.insert(name.to_string(), rule);
        self
    }

    /// The category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All unit names in this category, sorted for deterministic display
    pub fn unit_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up the rule for a unit name (exact, case-sensitive match)
    pub fn rule(&self, unit: &str) -> Result<&Rule, NotFound> {
        self.units.get(unit).ok_or_else(|| NotFound::Unit {
            category: self.name.clone(),
            unit: unit.to_string(),
        })
    }
}

/// Registry of all categories known to the converter
pub struct ConversionTable {
    categories: HashMap<String, Category>,
}

impl ConversionTable {
    pub fn new() -> Self {
        let mut table = ConversionTable {
            categories: HashMap::new(),
        };
        table.register_all_categories();
        table
    }

    /// Look up a category by name (exact, case-sensitive match)
    pub fn category(&self, name: &str) -> Result<&Category, NotFound> {
        self.categories
            .get(name)
            .ok_or_else(|| NotFound::Category(name.to_string()))
    }

    /// Look up the rule for a unit within a category
    pub fn rule(&self, category: &str, unit: &str) -> Result<&Rule, NotFound> {
        self.category(category)?.rule(unit)
    }

    /// All category names, sorted for deterministic display
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All unit names in a category, sorted
    pub fn unit_names(&self, category: &str) -> Result<Vec<&str>, NotFound> {
        Ok(self.category(category)?.unit_names())
    }

    pub(crate) fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    fn register(&mut self, category: Category) {
        self.categories.insert(category.name.clone(), category);
    }

    fn register_all_categories(&mut self) {
        self.register_length();
        self.register_weight();
        self.register_temperature();
        self.register_time();
        self.register_volume();
        self.register_area();
        self.register_speed();
        self.register_energy();
        self.register_pressure();
        self.register_digital_storage();
    }

    fn register_length(&mut self) {
        self.register(
            Category::new("Length")
                .unit("meters", Rule::linear(1.0))
                .unit("kilometers", Rule::linear(1000.0))
                .unit("miles", Rule::linear(1609.34))
                .unit("feet", Rule::linear(0.3048))
                .unit("inches", Rule::linear(0.0254)),
        );
    }

    fn register_weight(&mut self) {
        self.register(
            Category::new("Weight")
                .unit("grams", Rule::linear(1.0))
                .unit("kilograms", Rule::linear(1000.0))
                .unit("pounds", Rule::linear(453.592))
                .unit("ounces", Rule::linear(28.3495)),
        );
    }

    fn register_temperature(&mut self) {
        // Celsius is the reference unit; each pair converts to and from it.
        self.register(
            Category::new("Temperature")
                .unit("celsius", Rule::affine(|x| x, |x| x))
                .unit(
                    "fahrenheit",
                    Rule::affine(|x| (x - 32.0) * 5.0 / 9.0, |x| x * 9.0 / 5.0 + 32.0),
                )
                .unit("kelvin", Rule::affine(|x| x - 273.15, |x| x + 273.15)),
        );
    }

    fn register_time(&mut self) {
        self.register(
            Category::new("Time")
                .unit("seconds", Rule::linear(1.0))
                .unit("minutes", Rule::linear(60.0))
                .unit("hours", Rule::linear(3600.0))
                .unit("days", Rule::linear(86400.0)),
        );
    }

    fn register_volume(&mut self) {
        self.register(
            Category::new("Volume")
                .unit("liters", Rule::linear(1.0))
                .unit("milliliters", Rule::linear(0.001))
                .unit("gallons", Rule::linear(3.78541))
                .unit("cups", Rule::linear(0.24)),
        );
    }

    fn register_area(&mut self) {
        self.register(
            Category::new("Area")
                .unit("square meters", Rule::linear(1.0))
                .unit("square kilometers", Rule::linear(1e6))
                .unit("acres", Rule::linear(4046.86))
                .unit("square miles", Rule::linear(2.59e6)),
        );
    }

    fn register_speed(&mut self) {
        self.register(
            Category::new("Speed")
                .unit("m/s", Rule::linear(1.0))
                .unit("km/h", Rule::linear(0.277778))
                .unit("mph", Rule::linear(0.44704)),
        );
    }

    fn register_energy(&mut self) {
        self.register(
            Category::new("Energy")
                .unit("joules", Rule::linear(1.0))
                .unit("calories", Rule::linear(4.184))
                .unit("kilojoules", Rule::linear(1000.0))
                .unit("kilocalories", Rule::linear(4184.0)),
        );
    }

    fn register_pressure(&mut self) {
        self.register(
            Category::new("Pressure")
                .unit("pascals", Rule::linear(1.0))
                .unit("bar", Rule::linear(100000.0))
                .unit("psi", Rule::linear(6894.76))
                .unit("atmospheres", Rule::linear(101325.0)),
        );
    }

    fn register_digital_storage(&mut self) {
        self.register(
            Category::new("Digital Storage")
                .unit("bytes", Rule::linear(1.0))
                .unit("kilobytes", Rule::linear(1024.0))
                .unit("megabytes", Rule::linear(1024.0 * 1024.0))
                .unit("gigabytes", Rule::linear(1024.0 * 1024.0 * 1024.0)),
        );
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_present() {
        let table = ConversionTable::new();
        assert_eq!(
            table.category_names(),
            vec![
                "Area",
                "Digital Storage",
                "Energy",
                "Length",
                "Pressure",
                "Speed",
                "Temperature",
                "Time",
                "Volume",
                "Weight",
            ]
        );
    }

    #[test]
    fn test_unit_lookup() {
        let table = ConversionTable::new();
        assert!(table.rule("Length", "meters").is_ok());
        assert!(table.rule("Weight", "pounds").is_ok());
        assert!(table.rule("Temperature", "kelvin").is_ok());
    }

    #[test]
    fn test_unknown_category() {
        let table = ConversionTable::new();
        assert_eq!(
            table.rule("Sound", "decibels"),
            Err(NotFound::Category("Sound".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit() {
        let table = ConversionTable::new();
        assert_eq!(
            table.rule("Length", "furlongs"),
            Err(NotFound::Unit {
                category: "Length".to_string(),
                unit: "furlongs".to_string(),
            })
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ConversionTable::new();
        assert!(table.category("length").is_err());
        assert!(table.rule("Length", "Meters").is_err());
    }

    #[test]
    fn test_every_category_has_one_base_unit() {
        let table = ConversionTable::new();
        for name in table.category_names() {
            let category = table.category(name).unwrap();
            let bases = category
                .unit_names()
                .iter()
                .filter(|unit| category.rule(unit).unwrap().is_base())
                .count();
            assert_eq!(bases, 1, "category {} should have exactly one base unit", name);
        }
    }

    #[test]
    fn test_linear_factors_are_positive_and_finite() {
        let table = ConversionTable::new();
        for name in table.category_names() {
            let category = table.category(name).unwrap();
            for unit in category.unit_names() {
                if let Rule::Linear { factor } = category.rule(unit).unwrap() {
                    assert!(factor.is_finite(), "{}/{} factor not finite", name, unit);
                    assert!(*factor > 0.0, "{}/{} factor not positive", name, unit);
                }
            }
        }
    }

    #[test]
    fn test_unit_names_sorted() {
        let table = ConversionTable::new();
        assert_eq!(
            table.unit_names("Length").unwrap(),
            vec!["feet", "inches", "kilometers", "meters", "miles"]
        );
    }
}
