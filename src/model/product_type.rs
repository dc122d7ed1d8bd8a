//! Product type tag - Identifies the production category a recipe belongs to.
//!
//! Product types are fixed at build time and key every catalog lookup: each
//! type carries its own base unit weight and its own set of order-capacity
//! units. The wire spelling (`GREEK_YOGURT`) is used in catalog files, recipe
//! files, and error messages.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Production category for a recipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Strained yogurt produced in tubs
    GreekYogurt,
    /// Cheese produced in tubs
    Cheese,
    /// Drinkable products bottled or pouched
    Drinks,
}

impl ProductType {
    /// All product types, in catalog display order.
    pub const ALL: [ProductType; 3] = [
        ProductType::GreekYogurt,
        ProductType::Cheese,
        ProductType::Drinks,
    ];

    /// Stable identifier used in catalog and recipe files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ProductType::GreekYogurt => "GREEK_YOGURT",
            ProductType::Cheese => "CHEESE",
            ProductType::Drinks => "DRINKS",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductType {
    type Err = Error;

    /// Parses a product type from its stable identifier.
    ///
    /// Matching is case-insensitive and accepts hyphens in place of
    /// underscores so that command-line input like `greek-yogurt` works.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductType` if the input matches no known type.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "GREEK_YOGURT" => Ok(ProductType::GreekYogurt),
            "CHEESE" => Ok(ProductType::Cheese),
            "DRINKS" => Ok(ProductType::Drinks),
            _ => Err(Error::InvalidProductType {
                product_type: s.to_string(),
            }),
        }
    }
}
