//! Capacity catalog - Order units and weight multipliers per product type.
//!
//! Orders are placed in capacity units ("tubs", "bottles", "pouches"), each
//! worth a fixed multiple of the product's base unit weight. A multiplier of
//! 1 means one order unit holds exactly one base unit; a 5.5 pouch holds five
//! and a half. Units are kept in a stable order per product type, and the
//! first unit doubles as the default for callers that need one.

use crate::errors::{Error, Result};
use crate::model::ProductType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One order-capacity unit for a product type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapacityUnit {
    /// Stable key used to select the unit (e.g., "tubs")
    pub key: String,
    /// Human-readable label (e.g., "Tubs")
    pub label: String,
    /// Weight multiplier relative to one base unit; always positive
    pub multiplier: f64,
}

/// Mapping from product type to its ordered capacity units
#[derive(Clone, Debug)]
pub struct CapacityCatalog {
    units: HashMap<ProductType, Vec<CapacityUnit>>,
}

impl CapacityCatalog {
    /// Builds the built-in catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let mut units = HashMap::new();
        units.insert(
            ProductType::GreekYogurt,
            vec![CapacityUnit {
                key: "tubs".to_string(),
                label: "Tubs".to_string(),
                multiplier: 1.0,
            }],
        );
        units.insert(
            ProductType::Cheese,
            vec![CapacityUnit {
                key: "tubs".to_string(),
                label: "Tubs".to_string(),
                multiplier: 1.0,
            }],
        );
        units.insert(
            ProductType::Drinks,
            vec![
                CapacityUnit {
                    key: "bottles".to_string(),
                    label: "Bottles".to_string(),
                    multiplier: 1.0,
                },
                CapacityUnit {
                    key: "pouches".to_string(),
                    label: "Pouches".to_string(),
                    multiplier: 5.5,
                },
            ],
        );
        Self { units }
    }

    /// Builds a catalog from explicit entries, validating each one.
    ///
    /// # Errors
    /// Returns `Error::Config` if:
    /// - A product type has an empty unit list
    /// - A unit key or label is empty
    /// - A multiplier is zero, negative, or not finite
    /// - Two units of the same product type share a key
    pub fn from_entries(units: HashMap<ProductType, Vec<CapacityUnit>>) -> Result<Self> {
        for (product_type, unit_list) in &units {
            if unit_list.is_empty() {
                return Err(Error::Config {
                    message: format!("Product type {product_type} has no capacity units"),
                });
            }
            for unit in unit_list {
                if unit.key.trim().is_empty() {
                    return Err(Error::Config {
                        message: format!("Product type {product_type} has a capacity unit with an empty key"),
                    });
                }
                if unit.label.trim().is_empty() {
                    return Err(Error::Config {
                        message: format!(
                            "Capacity unit '{}' of {product_type} has an empty label",
                            unit.key
                        ),
                    });
                }
                if !unit.multiplier.is_finite() || unit.multiplier <= 0.0 {
                    return Err(Error::Config {
                        message: format!(
                            "Capacity unit '{}' of {product_type} has invalid multiplier {}",
                            unit.key, unit.multiplier
                        ),
                    });
                }
            }
            let mut seen_keys: Vec<&str> = unit_list.iter().map(|unit| unit.key.as_str()).collect();
            seen_keys.sort_unstable();
            seen_keys.dedup();
            if seen_keys.len() != unit_list.len() {
                return Err(Error::Config {
                    message: format!("Product type {product_type} has duplicate capacity unit keys"),
                });
            }
        }
        Ok(Self { units })
    }

    /// The ordered capacity units available for a product type.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductType` if the type has no catalog entry.
    pub fn units(&self, product_type: ProductType) -> Result<&[CapacityUnit]> {
        self.units
            .get(&product_type)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::InvalidProductType {
                product_type: product_type.to_string(),
            })
    }

    /// Looks up one capacity unit by key.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductType` if the type has no catalog entry,
    /// or `Error::InvalidCapacityUnit` if the key is not defined for it.
    pub fn unit(&self, product_type: ProductType, unit_key: &str) -> Result<&CapacityUnit> {
        self.units(product_type)?
            .iter()
            .find(|unit| unit.key == unit_key)
            .ok_or_else(|| Error::InvalidCapacityUnit {
                product_type: product_type.to_string(),
                unit_key: unit_key.to_string(),
            })
    }

    /// The default capacity unit for a product type (the first in its list).
    ///
    /// Callers that present a unit selector use this as the initial choice;
    /// the scaling engine itself never falls back to it.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductType` if the type has no catalog entry.
    pub fn default_unit(&self, product_type: ProductType) -> Result<&CapacityUnit> {
        self.units(product_type)?
            .first()
            .ok_or_else(|| Error::InvalidProductType {
                product_type: product_type.to_string(),
            })
    }

    /// Product types present in the catalog, in display order.
    #[must_use]
    pub fn product_types(&self) -> Vec<ProductType> {
        ProductType::ALL
            .into_iter()
            .filter(|product_type| self.units.contains_key(product_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn single_unit(key: &str, multiplier: f64) -> Vec<CapacityUnit> {
        vec![CapacityUnit {
            key: key.to_string(),
            label: key.to_string(),
            multiplier,
        }]
    }

    #[test]
    fn test_builtin_unit_lookup() -> Result<()> {
        let catalog = CapacityCatalog::builtin();

        let tubs = catalog.unit(ProductType::GreekYogurt, "tubs")?;
        assert_eq!(tubs.multiplier, 1.0);
        assert_eq!(tubs.label, "Tubs");

        let pouches = catalog.unit(ProductType::Drinks, "pouches")?;
        assert_eq!(pouches.multiplier, 5.5);

        Ok(())
    }

    #[test]
    fn test_unknown_unit_is_invalid_capacity_unit() {
        let catalog = CapacityCatalog::builtin();

        // Pouches exist for drinks only
        let result = catalog.unit(ProductType::GreekYogurt, "pouches");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidCapacityUnit {
                product_type: _,
                unit_key: _,
            }
        ));
    }

    #[test]
    fn test_default_unit_is_first_in_list() -> Result<()> {
        let catalog = CapacityCatalog::builtin();

        assert_eq!(catalog.default_unit(ProductType::Drinks)?.key, "bottles");
        assert_eq!(catalog.default_unit(ProductType::Cheese)?.key, "tubs");

        Ok(())
    }

    #[test]
    fn test_units_keep_their_order() -> Result<()> {
        let catalog = CapacityCatalog::builtin();

        let keys: Vec<&str> = catalog
            .units(ProductType::Drinks)?
            .iter()
            .map(|unit| unit.key.as_str())
            .collect();
        assert_eq!(keys, vec!["bottles", "pouches"]);

        Ok(())
    }

    #[test]
    fn test_from_entries_rejects_empty_unit_list() {
        let mut units = HashMap::new();
        units.insert(ProductType::Cheese, Vec::new());

        let result = CapacityCatalog::from_entries(units);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_from_entries_rejects_non_positive_multiplier() {
        let mut units = HashMap::new();
        units.insert(ProductType::Cheese, single_unit("tubs", -1.0));

        let result = CapacityCatalog::from_entries(units);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_keys() {
        let mut unit_list = single_unit("tubs", 1.0);
        unit_list.extend(single_unit("tubs", 2.0));
        let mut units = HashMap::new();
        units.insert(ProductType::Cheese, unit_list);

        let result = CapacityCatalog::from_entries(units);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_missing_product_type_is_invalid_product_type() {
        let mut units = HashMap::new();
        units.insert(ProductType::Cheese, single_unit("tubs", 1.0));
        let catalog = CapacityCatalog::from_entries(units).unwrap();

        let result = catalog.units(ProductType::Drinks);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidProductType { product_type: _ }
        ));
    }
}
