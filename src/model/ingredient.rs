//! Ingredient entry - One fixed-quantity additional ingredient of a recipe.
//!
//! Unlike compositions, ingredients are not percentage-based: each quantity
//! is dosed per one base unit of the product (e.g., 2 g of salt per 380 g of
//! base yogurt) and scales with the ratio of total weight to base weight.

use serde::{Deserialize, Serialize};

/// One fixed-quantity additional ingredient of a recipe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Name of the ingredient (e.g., "Salt", "Rennet")
    pub ingredient_name: String,
    /// Amount needed per one base unit of the product
    pub quantity: f64,
    /// Free-form measurement unit (e.g., "g", "tsp")
    pub unit: String,
    /// Optional free-form note shown alongside the ingredient
    #[serde(default)]
    pub notes: Option<String>,
    /// Position within the recipe for display ordering
    #[serde(default)]
    pub sort_order: i32,
}
