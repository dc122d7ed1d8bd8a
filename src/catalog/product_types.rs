//! Product type catalog - Base unit definitions per production category.
//!
//! Every product type is produced in multiples of one base unit (e.g., one
//! 380 g tub of Greek yogurt). The catalog maps each type to that base unit's
//! weight and label. It is loaded once at startup, either from the built-in
//! table or from a TOML override file, and never mutated afterwards.

use crate::errors::{Error, Result};
use crate::model::ProductType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base unit definition for one product type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeInfo {
    /// Human-readable name (e.g., "Greek Yogurt")
    pub display_name: String,
    /// Weight of one base unit; always positive
    pub base_weight: f64,
    /// Unit label for the base weight (e.g., "g")
    pub base_weight_unit: String,
}

impl ProductTypeInfo {
    /// Formats the base weight for display (e.g., "380g").
    #[must_use]
    pub fn base_weight_display(&self) -> String {
        format!("{}{}", self.base_weight, self.base_weight_unit)
    }
}

/// Mapping from product type to its base unit definition
#[derive(Clone, Debug)]
pub struct ProductTypeCatalog {
    entries: HashMap<ProductType, ProductTypeInfo>,
}

impl ProductTypeCatalog {
    /// Builds the built-in catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            ProductType::GreekYogurt,
            ProductTypeInfo {
                display_name: "Greek Yogurt".to_string(),
                base_weight: 380.0,
                base_weight_unit: "g".to_string(),
            },
        );
        entries.insert(
            ProductType::Cheese,
            ProductTypeInfo {
                display_name: "Cheese".to_string(),
                base_weight: 400.0,
                base_weight_unit: "g".to_string(),
            },
        );
        entries.insert(
            ProductType::Drinks,
            ProductTypeInfo {
                display_name: "Drinks".to_string(),
                base_weight: 220.0,
                base_weight_unit: "g".to_string(),
            },
        );
        Self { entries }
    }

    /// Builds a catalog from explicit entries, validating each one.
    ///
    /// # Errors
    /// Returns `Error::Config` if:
    /// - A display name or base weight unit is empty
    /// - A base weight is zero, negative, or not finite
    pub fn from_entries(entries: HashMap<ProductType, ProductTypeInfo>) -> Result<Self> {
        for (product_type, info) in &entries {
            if info.display_name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product type {product_type} has an empty display name"),
                });
            }
            if !info.base_weight.is_finite() || info.base_weight <= 0.0 {
                return Err(Error::Config {
                    message: format!(
                        "Product type {product_type} has invalid base weight {}",
                        info.base_weight
                    ),
                });
            }
            if info.base_weight_unit.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product type {product_type} has an empty base weight unit"),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Looks up the base unit definition for a product type.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductType` if the type has no catalog entry.
    pub fn info(&self, product_type: ProductType) -> Result<&ProductTypeInfo> {
        self.entries
            .get(&product_type)
            .ok_or_else(|| Error::InvalidProductType {
                product_type: product_type.to_string(),
            })
    }

    /// Looks up the base unit weight for a product type.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductType` if the type has no catalog entry.
    pub fn base_weight(&self, product_type: ProductType) -> Result<f64> {
        Ok(self.info(product_type)?.base_weight)
    }

    /// Product types present in the catalog, in display order.
    #[must_use]
    pub fn product_types(&self) -> Vec<ProductType> {
        ProductType::ALL
            .into_iter()
            .filter(|product_type| self.entries.contains_key(product_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_builtin_base_weights() -> Result<()> {
        let catalog = ProductTypeCatalog::builtin();

        assert_eq!(catalog.base_weight(ProductType::GreekYogurt)?, 380.0);
        assert_eq!(catalog.base_weight(ProductType::Cheese)?, 400.0);
        assert_eq!(catalog.base_weight(ProductType::Drinks)?, 220.0);

        Ok(())
    }

    #[test]
    fn test_builtin_display_names() -> Result<()> {
        let catalog = ProductTypeCatalog::builtin();

        assert_eq!(catalog.info(ProductType::GreekYogurt)?.display_name, "Greek Yogurt");
        assert_eq!(catalog.info(ProductType::Drinks)?.display_name, "Drinks");

        Ok(())
    }

    #[test]
    fn test_base_weight_display_has_no_trailing_zeros() {
        let catalog = ProductTypeCatalog::builtin();

        let info = catalog.info(ProductType::GreekYogurt).unwrap();
        assert_eq!(info.base_weight_display(), "380g");
    }

    #[test]
    fn test_missing_entry_is_invalid_product_type() {
        let mut entries = HashMap::new();
        entries.insert(
            ProductType::Cheese,
            ProductTypeInfo {
                display_name: "Cheese".to_string(),
                base_weight: 400.0,
                base_weight_unit: "g".to_string(),
            },
        );
        let catalog = ProductTypeCatalog::from_entries(entries).unwrap();

        let result = catalog.info(ProductType::Drinks);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidProductType { product_type: _ }
        ));
    }

    #[test]
    fn test_from_entries_rejects_non_positive_base_weight() {
        let mut entries = HashMap::new();
        entries.insert(
            ProductType::Cheese,
            ProductTypeInfo {
                display_name: "Cheese".to_string(),
                base_weight: 0.0,
                base_weight_unit: "g".to_string(),
            },
        );

        let result = ProductTypeCatalog::from_entries(entries);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_from_entries_rejects_empty_display_name() {
        let mut entries = HashMap::new();
        entries.insert(
            ProductType::Cheese,
            ProductTypeInfo {
                display_name: "   ".to_string(),
                base_weight: 400.0,
                base_weight_unit: "g".to_string(),
            },
        );

        let result = ProductTypeCatalog::from_entries(entries);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_product_types_listed_in_display_order() {
        let catalog = ProductTypeCatalog::builtin();

        assert_eq!(
            catalog.product_types(),
            vec![ProductType::GreekYogurt, ProductType::Cheese, ProductType::Drinks]
        );
    }
}
