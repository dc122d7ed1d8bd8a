//! Recipe scaling business logic.
//!
//! This module translates an order size into absolute recipe quantities and
//! back. Scaling is deterministic, side-effect-free arithmetic: the same
//! inputs always produce the same output, nothing is cached, and no input is
//! mutated. Both the interactive calculator surface and the document
//! exporter call through here so their figures can never drift apart.

use crate::{
    catalog::Catalogs,
    errors::{Error, Result},
    model::{Composition, Ingredient, Product, ProductType},
};

/// One composition entry together with its scaled weight.
#[derive(Debug, Clone)]
pub struct ScaledComposition {
    /// The composition entry as stored in the recipe
    pub composition: Composition,
    /// Absolute weight of this component for the full order
    pub scaled_weight: f64,
}

/// One ingredient entry together with its scaled quantity.
#[derive(Debug, Clone)]
pub struct ScaledIngredient {
    /// The ingredient entry as stored in the recipe
    pub ingredient: Ingredient,
    /// Quantity of this ingredient for the full order, in the entry's unit
    pub scaled_quantity: f64,
}

/// Result of scaling a recipe to an order size.
///
/// Entries keep the order of the input lists; display ordering is a concern
/// of the presentation layer.
#[derive(Debug, Clone)]
pub struct ScaleResult {
    /// Total weight of the order, in the product's base weight unit
    pub total_weight: f64,
    /// Scaled weight per composition entry
    pub per_composition: Vec<ScaledComposition>,
    /// Scaled quantity per ingredient entry
    pub per_ingredient: Vec<ScaledIngredient>,
}

/// Scales a recipe to an order size.
///
/// The total weight is `base_weight * order_quantity * multiplier`, where the
/// base weight comes from the product type catalog and the multiplier from
/// the selected capacity unit. Each composition receives its percentage of
/// the total; each ingredient is multiplied by the ratio of total weight to
/// base weight, since ingredient quantities are dosed per base unit.
///
/// Percentages are trusted as stored: a mid-edit recipe whose compositions
/// do not yet sum to 100% still scales each component independently, and no
/// normalization is applied.
///
/// # Errors
/// Returns an error if:
/// - The product type has no catalog entry (`InvalidProductType`)
/// - The capacity unit key is not defined for it (`InvalidCapacityUnit`)
/// - The order quantity is negative or not finite (`InvalidQuantity`)
pub fn scale(
    catalogs: &Catalogs,
    product_type: ProductType,
    compositions: &[Composition],
    ingredients: &[Ingredient],
    order_quantity: f64,
    capacity_unit_key: &str,
) -> Result<ScaleResult> {
    // Validate inputs
    if order_quantity < 0.0 {
        return Err(Error::InvalidQuantity {
            quantity: order_quantity,
        });
    }

    if !order_quantity.is_finite() {
        return Err(Error::InvalidQuantity {
            quantity: order_quantity,
        });
    }

    let base_weight = catalogs.product_types.base_weight(product_type)?;
    let unit = catalogs.capacities.unit(product_type, capacity_unit_key)?;

    let total_weight = base_weight * order_quantity * unit.multiplier;
    // base_weight > 0 is a catalog invariant, so the ratio is always defined
    let ratio = total_weight / base_weight;

    let per_composition = compositions
        .iter()
        .map(|composition| ScaledComposition {
            composition: composition.clone(),
            scaled_weight: total_weight * composition.percentage / 100.0,
        })
        .collect();

    let per_ingredient = ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            ingredient: ingredient.clone(),
            scaled_quantity: ingredient.quantity * ratio,
        })
        .collect();

    Ok(ScaleResult {
        total_weight,
        per_composition,
        per_ingredient,
    })
}

/// Scales a full product record to an order size.
///
/// Convenience wrapper over [`scale`] for callers holding a [`Product`].
///
/// # Errors
/// Same conditions as [`scale`].
pub fn scale_product(
    catalogs: &Catalogs,
    product: &Product,
    order_quantity: f64,
    capacity_unit_key: &str,
) -> Result<ScaleResult> {
    scale(
        catalogs,
        product.product_type,
        &product.compositions,
        &product.additional_ingredients,
        order_quantity,
        capacity_unit_key,
    )
}

/// Back-computes the order quantity that produces a target total weight.
///
/// This is the inverse of the total weight step of [`scale`]:
/// `order_quantity = target_total_weight / (base_weight * multiplier)`.
/// A negative target is clamped to 0 before dividing, matching the
/// interactive calculator's clamp-on-input behavior for a partially typed
/// value.
///
/// # Errors
/// Returns an error if:
/// - The product type has no catalog entry (`InvalidProductType`)
/// - The capacity unit key is not defined for it (`InvalidCapacityUnit`)
/// - The target weight is not finite (`InvalidQuantity`)
pub fn total_weight_to_quantity(
    catalogs: &Catalogs,
    product_type: ProductType,
    capacity_unit_key: &str,
    target_total_weight: f64,
) -> Result<f64> {
    // Validate inputs
    if !target_total_weight.is_finite() {
        return Err(Error::InvalidQuantity {
            quantity: target_total_weight,
        });
    }

    let base_weight = catalogs.product_types.base_weight(product_type)?;
    let unit = catalogs.capacities.unit(product_type, capacity_unit_key)?;

    let clamped = target_total_weight.max(0.0);
    Ok(clamped / (base_weight * unit.multiplier))
}
