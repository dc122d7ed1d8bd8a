//! Catalog configuration loading from TOML override files.
//!
//! The built-in product type and capacity tables cover the standard
//! production lines. A deployment that changes base weights or adds order
//! units can point `SYNPROD_CATALOG` (or `--catalog`) at a TOML file whose
//! tables replace the built-in ones. The file is loaded once at startup and
//! validated against the same invariants the built-in tables satisfy.

use crate::catalog::{
    CapacityCatalog, CapacityUnit, Catalogs, ProductTypeCatalog, ProductTypeInfo,
};
use crate::errors::{Error, Result};
use crate::model::ProductType;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Configuration structure representing an entire catalog override file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Base unit definitions, one per product type
    #[serde(default)]
    pub product_types: Vec<ProductTypeEntry>,
    /// Capacity units; file order fixes the display order per product type
    #[serde(default)]
    pub capacities: Vec<CapacityEntry>,
}

/// Configuration for one product type's base unit
#[derive(Debug, Deserialize, Clone)]
pub struct ProductTypeEntry {
    /// Product type this entry defines
    pub product_type: ProductType,
    /// Human-readable name (e.g., "Greek Yogurt")
    pub display_name: String,
    /// Weight of one base unit
    pub base_weight: f64,
    /// Unit label for the base weight (e.g., "g")
    pub base_weight_unit: String,
}

/// Configuration for one capacity unit
#[derive(Debug, Deserialize, Clone)]
pub struct CapacityEntry {
    /// Product type this unit belongs to
    pub product_type: ProductType,
    /// Stable key used to select the unit (e.g., "tubs")
    pub key: String,
    /// Human-readable label (e.g., "Tubs")
    pub label: String,
    /// Weight multiplier relative to one base unit
    pub multiplier: f64,
}

/// Loads a catalog configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the catalog override file
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read, and `Error::Config` if
/// the TOML syntax is invalid or required fields are missing.
pub fn load_catalog_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref())?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog file: {e}"),
    })
}

/// Builds validated catalogs from a parsed configuration.
///
/// # Errors
/// Returns `Error::Config` if:
/// - The configuration defines no product types
/// - A product type has more than one base unit entry
/// - Any catalog invariant fails (positive weights and multipliers,
///   non-empty labels, unique unit keys, both catalogs covering the same
///   product types)
pub fn build_catalogs(config: CatalogConfig) -> Result<Catalogs> {
    if config.product_types.is_empty() {
        return Err(Error::Config {
            message: "Catalog file defines no product types".to_string(),
        });
    }

    let mut info_entries = HashMap::new();
    for entry in config.product_types {
        let product_type = entry.product_type;
        let previous = info_entries.insert(
            product_type,
            ProductTypeInfo {
                display_name: entry.display_name,
                base_weight: entry.base_weight,
                base_weight_unit: entry.base_weight_unit,
            },
        );
        if previous.is_some() {
            return Err(Error::Config {
                message: format!("Duplicate product type entry: {product_type}"),
            });
        }
    }

    // Group capacity units per product type, keeping file order
    let mut unit_entries: HashMap<ProductType, Vec<CapacityUnit>> = HashMap::new();
    for entry in config.capacities {
        unit_entries
            .entry(entry.product_type)
            .or_default()
            .push(CapacityUnit {
                key: entry.key,
                label: entry.label,
                multiplier: entry.multiplier,
            });
    }

    let product_types = ProductTypeCatalog::from_entries(info_entries)?;
    let capacities = CapacityCatalog::from_entries(unit_entries)?;
    Catalogs::new(product_types, capacities)
}

/// Resolves the catalogs for this process: the override file when a path is
/// given, the built-in tables otherwise.
///
/// # Errors
/// Returns an error if the override file cannot be loaded or fails
/// validation.
pub fn resolve_catalogs(path: Option<&Path>) -> Result<Catalogs> {
    match path {
        Some(path) => {
            let catalogs = build_catalogs(load_catalog_config(path)?)?;
            info!("Loaded catalog overrides from {}", path.display());
            Ok(catalogs)
        }
        None => {
            info!("Using built-in catalogs");
            Ok(Catalogs::builtin())
        }
    }
}
