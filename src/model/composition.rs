//! Composition entry - One percentage-based component of a recipe.
//!
//! A recipe's composition list describes how its total weight splits into
//! components. Percentages are stored as authored; the list is expected to
//! sum to 100% once authoring finishes, but intermediate states may not.

use serde::{Deserialize, Serialize};

/// One percentage-based component of a recipe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Name of the component (e.g., "Milk", "Live Cultures")
    pub component_name: String,
    /// Share of the recipe's total weight, in percent
    pub percentage: f64,
    /// Optional free-form note shown alongside the component
    #[serde(default)]
    pub notes: Option<String>,
    /// Position within the recipe for display ordering
    #[serde(default)]
    pub sort_order: i32,
}
