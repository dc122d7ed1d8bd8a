//! Recipe document export business logic.
//!
//! This module renders a scaled recipe into a static document structure: a
//! title block, an order summary, a composition table with a computed total
//! row, and an additional-ingredients table. Every number in the document
//! comes from [`crate::core::scaler::scale`] with the caller's exact inputs,
//! so the exported figures always match what the interactive calculator
//! shows. Graphical rendering (PDF and friends) is an external concern that
//! consumes [`RecipeDocument`]; [`render_text`] provides the built-in plain
//! text rendering.

use crate::{
    catalog::Catalogs,
    core::scaler::{self, ScaledComposition, ScaledIngredient},
    errors::Result,
    model::Product,
};
use chrono::{DateTime, Utc};

/// Order summary block at the top of the document.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Ordered quantity, as passed to the scaler
    pub order_quantity: f64,
    /// Label of the selected capacity unit (e.g., "Tubs")
    pub capacity_unit_label: String,
    /// Total scaled weight of the order, unrounded
    pub total_weight: f64,
    /// Weight of one base unit of the product
    pub base_weight: f64,
    /// Unit label shared by base weight and all scaled weights
    pub base_weight_unit: String,
    /// Author shown when the recipe records one
    pub created_by: Option<String>,
}

/// One row of the composition table.
#[derive(Debug, Clone)]
pub struct CompositionRow {
    /// Component name
    pub component_name: String,
    /// Percentage as stored in the recipe
    pub percentage: f64,
    /// Scaled weight for the full order, unrounded
    pub scaled_weight: f64,
    /// Optional note for the row
    pub notes: Option<String>,
}

/// Computed total row of the composition table.
///
/// Display-only cross-check: the percentage sum is shown as-is even when the
/// recipe does not add up to 100%.
#[derive(Debug, Clone)]
pub struct CompositionTotal {
    /// Sum of the stored row percentages
    pub percentage_sum: f64,
    /// Total scaled weight, re-displayed from the scale result
    pub total_weight: f64,
}

/// One row of the additional-ingredients table.
#[derive(Debug, Clone)]
pub struct IngredientRow {
    /// Ingredient name
    pub ingredient_name: String,
    /// Quantity per one base unit, as authored
    pub base_quantity: f64,
    /// Measurement unit of the ingredient
    pub unit: String,
    /// Scaled quantity for the full order, unrounded
    pub scaled_quantity: f64,
    /// Optional note for the row
    pub notes: Option<String>,
}

/// A scaled recipe rendered into a static document structure.
#[derive(Debug, Clone)]
pub struct RecipeDocument {
    /// Document title (e.g., "Traditional Greek Yogurt – Production Recipe")
    pub title: String,
    /// Product category line under the title
    pub subtitle: String,
    /// Optional recipe description
    pub description: Option<String>,
    /// Order summary block
    pub summary: OrderSummary,
    /// Composition table rows, in display order
    pub composition_rows: Vec<CompositionRow>,
    /// Computed total row of the composition table
    pub composition_total: CompositionTotal,
    /// Additional-ingredients table rows, in display order
    pub ingredient_rows: Vec<IngredientRow>,
    /// Footer line with the generation date
    pub footer: String,
}

/// Builds the export document for a recipe order.
///
/// Re-invokes the scaler with the given inputs so the document reproduces
/// the interactive calculator's numbers exactly; this function performs no
/// arithmetic of its own beyond summing the displayed percentages for the
/// total row. Rows are ordered by each entry's `sort_order`.
///
/// The capacity unit is resolved strictly: an unknown key is an error, never
/// silently replaced with a default.
///
/// # Errors
/// Same conditions as [`scaler::scale`].
pub fn build_recipe_document(
    catalogs: &Catalogs,
    product: &Product,
    order_quantity: f64,
    capacity_unit_key: &str,
    generated_at: DateTime<Utc>,
) -> Result<RecipeDocument> {
    let info = catalogs.product_types.info(product.product_type)?;
    let unit = catalogs.capacities.unit(product.product_type, capacity_unit_key)?;
    let result = scaler::scale_product(catalogs, product, order_quantity, capacity_unit_key)?;

    let mut scaled_compositions: Vec<&ScaledComposition> = result.per_composition.iter().collect();
    scaled_compositions.sort_by_key(|entry| entry.composition.sort_order);

    let mut scaled_ingredients: Vec<&ScaledIngredient> = result.per_ingredient.iter().collect();
    scaled_ingredients.sort_by_key(|entry| entry.ingredient.sort_order);

    let composition_rows = scaled_compositions
        .into_iter()
        .map(|entry| CompositionRow {
            component_name: entry.composition.component_name.clone(),
            percentage: entry.composition.percentage,
            scaled_weight: entry.scaled_weight,
            notes: entry.composition.notes.clone(),
        })
        .collect();

    let ingredient_rows = scaled_ingredients
        .into_iter()
        .map(|entry| IngredientRow {
            ingredient_name: entry.ingredient.ingredient_name.clone(),
            base_quantity: entry.ingredient.quantity,
            unit: entry.ingredient.unit.clone(),
            scaled_quantity: entry.scaled_quantity,
            notes: entry.ingredient.notes.clone(),
        })
        .collect();

    let percentage_sum: f64 = product
        .compositions
        .iter()
        .map(|composition| composition.percentage)
        .sum();

    Ok(RecipeDocument {
        title: format!("{} – Production Recipe", product.name),
        subtitle: format!(
            "{} • Base {}",
            info.display_name,
            info.base_weight_display()
        ),
        description: product.description.clone(),
        summary: OrderSummary {
            order_quantity,
            capacity_unit_label: unit.label.clone(),
            total_weight: result.total_weight,
            base_weight: info.base_weight,
            base_weight_unit: info.base_weight_unit.clone(),
            created_by: product.created_by.clone(),
        },
        composition_rows,
        composition_total: CompositionTotal {
            percentage_sum,
            total_weight: result.total_weight,
        },
        ingredient_rows,
        footer: format!("Generated by SynProd • {}", generated_at.format("%Y-%m-%d")),
    })
}

/// Renders a recipe document as plain text.
///
/// Weights are shown to one decimal place, row percentages to two, the total
/// percentage to one, and scaled ingredient quantities to two, matching the
/// conventions of the interactive calculator display.
#[must_use]
pub fn render_text(document: &RecipeDocument) -> String {
    use std::fmt::Write;

    let unit = &document.summary.base_weight_unit;

    let mut text = format!("{}\n{}\n", document.title, document.subtitle);

    // write! is infallible when writing to String, so unwrap is safe
    if let Some(description) = &document.description {
        writeln!(text, "{description}").unwrap();
    }

    writeln!(text, "\nOrder Summary").unwrap();
    writeln!(
        text,
        "  Quantity: {} {}",
        document.summary.order_quantity, document.summary.capacity_unit_label
    )
    .unwrap();
    writeln!(
        text,
        "  Total Weight: {:.1}{unit}",
        document.summary.total_weight
    )
    .unwrap();
    if let Some(created_by) = &document.summary.created_by {
        writeln!(text, "  Created By: {created_by}").unwrap();
    }

    writeln!(text, "\nComposition").unwrap();
    for row in &document.composition_rows {
        write!(
            text,
            "  {} | {:.2}% | {:.1}{unit}",
            row.component_name, row.percentage, row.scaled_weight
        )
        .unwrap();
        match &row.notes {
            Some(notes) => writeln!(text, " | {notes}").unwrap(),
            None => writeln!(text).unwrap(),
        }
    }
    writeln!(
        text,
        "  Total | {:.1}% | {:.1}{unit}",
        document.composition_total.percentage_sum, document.composition_total.total_weight
    )
    .unwrap();

    if !document.ingredient_rows.is_empty() {
        writeln!(text, "\nAdditional Ingredients").unwrap();
        for row in &document.ingredient_rows {
            write!(
                text,
                "  {} | {} {} / {}{unit} | {:.2} {}",
                row.ingredient_name,
                row.base_quantity,
                row.unit,
                document.summary.base_weight,
                row.scaled_quantity,
                row.unit
            )
            .unwrap();
            match &row.notes {
                Some(notes) => writeln!(text, " | {notes}").unwrap(),
                None => writeln!(text).unwrap(),
            }
        }
    }

    writeln!(text, "\n{}", document.footer).unwrap();

    text
}
