//! Product entity - A production recipe with compositions and ingredients.
//!
//! Products are owned by the external authoring subsystem; this crate reads
//! them and never mutates stored state. A product arrives either as an
//! already-loaded value from the surrounding application or as a TOML file
//! read by the command-line front end.

use crate::model::{Composition, Ingredient, ProductType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A production recipe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the external store, if persisted
    #[serde(default)]
    pub id: Option<i64>,
    /// Name of the recipe (e.g., "Traditional Greek Yogurt")
    pub name: String,
    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Production category this recipe belongs to
    pub product_type: ProductType,
    /// Percentage-based components, in authored order
    #[serde(default)]
    pub compositions: Vec<Composition>,
    /// Fixed-quantity extras dosed per base unit, in authored order
    #[serde(default)]
    pub additional_ingredients: Vec<Ingredient>,
    /// Who created the recipe in the authoring subsystem
    #[serde(default)]
    pub created_by: Option<String>,
    /// When the recipe was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_recipe_from_toml() {
        let toml_str = r#"
            name = "Traditional Greek Yogurt"
            description = "Classic thick strained yogurt"
            product_type = "GREEK_YOGURT"
            created_by = "SynProd Admin"

            [[compositions]]
            component_name = "Milk"
            percentage = 85.0
            notes = "Whole milk base"

            [[compositions]]
            component_name = "Live Cultures"
            percentage = 15.0

            [[additional_ingredients]]
            ingredient_name = "Salt"
            quantity = 0.2
            unit = "g"
        "#;

        let product: Product = toml::from_str(toml_str).unwrap();
        assert_eq!(product.name, "Traditional Greek Yogurt");
        assert_eq!(product.product_type, ProductType::GreekYogurt);
        assert_eq!(product.compositions.len(), 2);
        assert_eq!(product.compositions[0].component_name, "Milk");
        assert_eq!(product.compositions[0].notes.as_deref(), Some("Whole milk base"));
        assert_eq!(product.additional_ingredients.len(), 1);
        assert_eq!(product.additional_ingredients[0].unit, "g");
        assert!(product.id.is_none());
        assert!(product.created_at.is_none());
    }
}
