//! Conversion rules - how a unit relates to its category base unit

/// Conversion rule for a single unit.
///
/// Most units are linear: a positive factor such that
/// `value_in_base = value * factor`, with the category base unit at
/// `factor = 1.0`. Temperature units are affine instead: a pair of
/// functions to and from the reference unit (Celsius), satisfying
/// `from_reference(to_reference(x)) == x` for all finite x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Scale factor relative to the category base unit
    Linear { factor: f64 },
    /// Function pair relative to the category reference unit
    Affine {
        to_reference: fn(f64) -> f64,
        from_reference: fn(f64) -> f64,
    },
}

impl Rule {
    /// Create a linear rule with the given factor
    pub fn linear(factor: f64) -> Self {
        Rule::Linear { factor }
    }

    /// Create an affine rule from a to/from function pair
    pub fn affine(to_reference: fn(f64) -> f64, from_reference: fn(f64) -> f64) -> Self {
        Rule::Affine {
            to_reference,
            from_reference,
        }
    }

    /// Check if this unit is the category pivot (factor 1.0, or the
    /// identity pair for affine units)
    pub fn is_base(&self) -> bool {
        match self {
            Rule::Linear { factor } => *factor == 1.0,
            // Function pointers are opaque, so identity is detected by probing.
            Rule::Affine { to_reference, .. } => {
                to_reference(0.0) == 0.0 && to_reference(100.0) == 100.0
            }
        }
    }

    /// Convert a value in this unit into the category base (reference) unit
    pub fn to_reference(&self, value: f64) -> f64 {
        match self {
            Rule::Linear { factor } => value * factor,
            Rule::Affine { to_reference, .. } => to_reference(value),
        }
    }

    /// Convert a value in the category base (reference) unit into this unit
    pub fn from_reference(&self, value: f64) -> f64 {
        match self {
            Rule::Linear { factor } => value / factor,
            Rule::Affine { from_reference, .. } => from_reference(value),
        }
    }
}
