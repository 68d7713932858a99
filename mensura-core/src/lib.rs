//! Mensura Core - Fundamental types
//!
//! This crate provides the types shared across Mensura:
//! - `Rule`: how a unit relates to its category base unit
//! - `NotFound`: the single failure mode of table lookups

mod error;
mod rule;

pub use error::NotFound;
pub use rule::Rule;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{NotFound, Rule};
}
