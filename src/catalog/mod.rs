//! Static catalogs parameterizing the scaling engine.
//!
//! Both catalogs are loaded once at startup and treated as read-only for the
//! lifetime of the process. The scaling engine receives them together as a
//! [`Catalogs`] bundle so that every lookup goes through the same validated
//! tables.

/// Order units and weight multipliers per product type
pub mod capacity;
/// Base unit definitions per production category
pub mod product_types;

pub use capacity::{CapacityCatalog, CapacityUnit};
pub use product_types::{ProductTypeCatalog, ProductTypeInfo};

use crate::errors::{Error, Result};

/// Both catalogs, cross-validated and handed to the core as one unit
#[derive(Clone, Debug)]
pub struct Catalogs {
    /// Base unit weight and label per product type
    pub product_types: ProductTypeCatalog,
    /// Ordered capacity units per product type
    pub capacities: CapacityCatalog,
}

impl Catalogs {
    /// Builds the built-in catalogs shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            product_types: ProductTypeCatalog::builtin(),
            capacities: CapacityCatalog::builtin(),
        }
    }

    /// Bundles two catalogs, checking that they cover the same product types.
    ///
    /// # Errors
    /// Returns `Error::Config` if a product type appears in one catalog but
    /// not the other: every type with a base unit needs at least one capacity
    /// unit, and capacity units for an unknown type are almost certainly a
    /// typo in an override file.
    pub fn new(product_types: ProductTypeCatalog, capacities: CapacityCatalog) -> Result<Self> {
        for product_type in product_types.product_types() {
            if capacities.units(product_type).is_err() {
                return Err(Error::Config {
                    message: format!("Product type {product_type} has no capacity units"),
                });
            }
        }
        for product_type in capacities.product_types() {
            if product_types.info(product_type).is_err() {
                return Err(Error::Config {
                    message: format!(
                        "Capacity units are defined for {product_type} but it has no product type entry"
                    ),
                });
            }
        }
        Ok(Self {
            product_types,
            capacities,
        })
    }
}
