//! Shared test utilities for `SynProd`.
//!
//! This module provides common helper functions for building test catalogs
//! and creating recipe fixtures with sensible defaults.

use crate::{
    catalog::Catalogs,
    model::{Composition, Ingredient, Product, ProductType},
};

/// Returns the built-in catalogs.
/// This is the standard catalog setup for all tests.
#[must_use]
pub fn test_catalogs() -> Catalogs {
    Catalogs::builtin()
}

/// Creates a test composition with sensible defaults.
///
/// # Defaults
/// * `notes`: None
/// * `sort_order`: 0
#[must_use]
pub fn create_test_composition(name: &str, percentage: f64) -> Composition {
    Composition {
        component_name: name.to_string(),
        percentage,
        notes: None,
        sort_order: 0,
    }
}

/// Creates a test composition with custom parameters.
/// Use this when a test needs specific notes or display ordering.
#[must_use]
pub fn create_custom_composition(
    name: &str,
    percentage: f64,
    notes: Option<&str>,
    sort_order: i32,
) -> Composition {
    Composition {
        component_name: name.to_string(),
        percentage,
        notes: notes.map(ToString::to_string),
        sort_order,
    }
}

/// Creates a test ingredient with sensible defaults.
///
/// # Defaults
/// * `notes`: None
/// * `sort_order`: 0
#[must_use]
pub fn create_test_ingredient(name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient {
        ingredient_name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        notes: None,
        sort_order: 0,
    }
}

/// Creates the standard test recipe: a Greek yogurt with two compositions
/// (90% / 10%) and one salt ingredient dosed at 2 g per base unit.
#[must_use]
pub fn create_test_recipe() -> Product {
    create_custom_recipe(
        "Test Yogurt",
        ProductType::GreekYogurt,
        vec![
            create_test_composition("Yogurt", 90.0),
            create_test_composition("Yacon", 10.0),
        ],
        vec![create_test_ingredient("Salt", 2.0, "g")],
    )
}

/// Creates a test recipe with custom parameters.
#[must_use]
pub fn create_custom_recipe(
    name: &str,
    product_type: ProductType,
    compositions: Vec<Composition>,
    ingredients: Vec<Ingredient>,
) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        description: None,
        product_type,
        compositions,
        additional_ingredients: ingredients,
        created_by: None,
        created_at: None,
    }
}
