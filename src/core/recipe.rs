//! Recipe authoring business logic.
//!
//! This module carries the save-path rules of the authoring subsystem:
//! field validation, the 100% composition total check, and the input
//! normalizations applied before a recipe is stored. Scaling never calls
//! any of this; a mid-edit recipe that fails validation still scales. The
//! split keeps the calculator tolerant while the save path stays strict.

use crate::{
    errors::{Error, Result},
    model::{Composition, Ingredient, Product},
};
use std::collections::HashSet;

/// Maximum drift allowed between a composition total and 100 percent.
pub const COMPOSITION_TOTAL_TOLERANCE: f64 = 0.01;

/// Maximum length of recipe, component, and ingredient names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a notes field.
pub const MAX_NOTES_LENGTH: usize = 255;

/// Maximum length of an ingredient's measurement unit.
pub const MAX_UNIT_LENGTH: usize = 20;

/// Sums the stored composition percentages.
#[must_use]
pub fn total_composition_percentage(compositions: &[Composition]) -> f64 {
    compositions
        .iter()
        .map(|composition| composition.percentage)
        .sum()
}

/// Validates a composition list against the authoring rules.
///
/// # Errors
/// Returns `Error::Validation` if:
/// - The list is empty
/// - A component name is empty or longer than 100 characters
/// - A percentage is not finite or outside 0-100
/// - A notes field is longer than 255 characters
/// - Two components share a name (case-insensitive)
/// - The percentages do not total 100% within the allowed tolerance
pub fn validate_compositions(compositions: &[Composition]) -> Result<()> {
    if compositions.is_empty() {
        return Err(Error::Validation {
            message: "Recipe must have at least one composition".to_string(),
        });
    }

    let mut seen_names = HashSet::new();
    for composition in compositions {
        let name = composition.component_name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                message: "Component name cannot be empty".to_string(),
            });
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Error::Validation {
                message: format!("Component name must be {MAX_NAME_LENGTH} characters or fewer"),
            });
        }
        if !composition.percentage.is_finite()
            || composition.percentage < 0.0
            || composition.percentage > 100.0
        {
            return Err(Error::Validation {
                message: format!(
                    "Percentage for '{name}' must be between 0 and 100, got {}",
                    composition.percentage
                ),
            });
        }
        if let Some(notes) = &composition.notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(Error::Validation {
                    message: format!("Notes for '{name}' must be {MAX_NOTES_LENGTH} characters or fewer"),
                });
            }
        }
        if !seen_names.insert(name.to_lowercase()) {
            return Err(Error::Validation {
                message: format!("Duplicate component name: {name}"),
            });
        }
    }

    let total = total_composition_percentage(compositions);
    if (total - 100.0).abs() > COMPOSITION_TOTAL_TOLERANCE {
        return Err(Error::Validation {
            message: format!("Composition percentages must total 100% (currently {total:.2}%)"),
        });
    }

    Ok(())
}

/// Validates an ingredient list against the authoring rules.
///
/// The list itself may be empty; additional ingredients are optional.
///
/// # Errors
/// Returns `Error::Validation` if:
/// - An ingredient name is empty or longer than 100 characters
/// - A quantity is not finite or not positive
/// - A unit is empty or longer than 20 characters
/// - A notes field is longer than 255 characters
/// - Two ingredients share a name (case-insensitive)
pub fn validate_ingredients(ingredients: &[Ingredient]) -> Result<()> {
    let mut seen_names = HashSet::new();
    for ingredient in ingredients {
        let name = ingredient.ingredient_name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                message: "Ingredient name cannot be empty".to_string(),
            });
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Error::Validation {
                message: format!("Ingredient name must be {MAX_NAME_LENGTH} characters or fewer"),
            });
        }
        if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
            return Err(Error::Validation {
                message: format!(
                    "Quantity for '{name}' must be positive, got {}",
                    ingredient.quantity
                ),
            });
        }
        let unit = ingredient.unit.trim();
        if unit.is_empty() {
            return Err(Error::Validation {
                message: format!("Unit for '{name}' cannot be empty"),
            });
        }
        if unit.chars().count() > MAX_UNIT_LENGTH {
            return Err(Error::Validation {
                message: format!("Unit for '{name}' must be {MAX_UNIT_LENGTH} characters or fewer"),
            });
        }
        if let Some(notes) = &ingredient.notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(Error::Validation {
                    message: format!("Notes for '{name}' must be {MAX_NOTES_LENGTH} characters or fewer"),
                });
            }
        }
        if !seen_names.insert(name.to_lowercase()) {
            return Err(Error::Validation {
                message: format!("Duplicate ingredient name: {name}"),
            });
        }
    }

    Ok(())
}

/// Validates a full product record against the authoring rules.
///
/// # Errors
/// Returns `Error::Validation` if the recipe name is empty or longer than
/// 100 characters, or if the composition or ingredient lists fail their
/// checks.
pub fn validate_product(product: &Product) -> Result<()> {
    // Validate inputs
    if product.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Recipe name cannot be empty".to_string(),
        });
    }
    if product.name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(Error::Validation {
            message: format!("Recipe name must be {MAX_NAME_LENGTH} characters or fewer"),
        });
    }

    validate_compositions(&product.compositions)?;
    validate_ingredients(&product.additional_ingredients)?;

    Ok(())
}

/// Rounds a value half-up to two decimal places.
#[must_use]
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamps a typed order quantity into the range the scaler accepts.
///
/// Non-finite input (an unparseable or overflowing field) becomes 0,
/// negatives become 0, and the result is rounded to two decimals. This is
/// the caller-side clamp the strict scaler contract assumes.
#[must_use]
pub fn clamp_order_quantity(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    round_to_two_decimals(value.max(0.0))
}

/// Applies the save-path normalizations to a product in place.
///
/// Names and units are trimmed, percentages are rounded half-up to two
/// decimals, and sort orders are reassigned from list position, exactly as
/// the authoring subsystem does before storing a recipe.
pub fn normalize_product(product: &mut Product) {
    product.name = product.name.trim().to_string();

    for (index, composition) in product.compositions.iter_mut().enumerate() {
        composition.component_name = composition.component_name.trim().to_string();
        composition.percentage = round_to_two_decimals(composition.percentage);
        composition.sort_order = i32::try_from(index).unwrap_or(i32::MAX);
    }

    for (index, ingredient) in product.additional_ingredients.iter_mut().enumerate() {
        ingredient.ingredient_name = ingredient.ingredient_name.trim().to_string();
        ingredient.unit = ingredient.unit.trim().to_string();
        ingredient.sort_order = i32::try_from(index).unwrap_or(i32::MAX);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::model::ProductType;
    use crate::test_utils::*;

    #[test]
    fn test_validate_product_accepts_complete_recipe() -> Result<()> {
        let recipe = create_custom_recipe(
            "Traditional Feta",
            ProductType::Cheese,
            vec![
                create_test_composition("Sheep Milk", 60.0),
                create_test_composition("Goat Milk", 25.0),
                create_test_composition("Salt", 12.0),
                create_test_composition("Rennet", 3.0),
            ],
            vec![
                create_test_ingredient("Calcium Chloride", 0.1, "g"),
                create_test_ingredient("Lipase", 0.05, "g"),
            ],
        );

        validate_product(&recipe)
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut recipe = create_test_recipe();
        recipe.name = "   ".to_string();

        let result = validate_product(&recipe);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_overlong_name() {
        let mut recipe = create_test_recipe();
        recipe.name = "x".repeat(MAX_NAME_LENGTH + 1);

        let result = validate_product(&recipe);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_empty_composition_list() {
        let result = validate_compositions(&[]);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_sum_away_from_100() {
        let compositions = vec![
            create_test_composition("Milk", 85.0),
            create_test_composition("Cream", 10.0),
        ];

        let result = validate_compositions(&compositions);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_accepts_sum_within_tolerance() -> Result<()> {
        let compositions = vec![
            create_test_composition("Milk", 66.665),
            create_test_composition("Cream", 33.33),
        ];

        // 99.995 is within the 0.01 tolerance
        validate_compositions(&compositions)
    }

    #[test]
    fn test_validate_rejects_out_of_range_percentage() {
        let compositions = vec![
            create_test_composition("Milk", 101.0),
            create_test_composition("Cream", -1.0),
        ];

        let result = validate_compositions(&compositions);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_duplicate_component_names() {
        let compositions = vec![
            create_test_composition("Milk", 50.0),
            create_test_composition("MILK", 50.0),
        ];

        let result = validate_compositions(&compositions);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_non_positive_quantity() {
        let ingredients = vec![create_test_ingredient("Salt", 0.0, "g")];

        let result = validate_ingredients(&ingredients);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_empty_unit() {
        let ingredients = vec![create_test_ingredient("Salt", 2.0, "  ")];

        let result = validate_ingredients(&ingredients);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_overlong_unit() {
        let unit = "x".repeat(MAX_UNIT_LENGTH + 1);
        let ingredients = vec![create_test_ingredient("Salt", 2.0, &unit)];

        let result = validate_ingredients(&ingredients);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_rejects_overlong_notes() {
        let mut composition = create_test_composition("Milk", 100.0);
        composition.notes = Some("x".repeat(MAX_NOTES_LENGTH + 1));

        let result = validate_compositions(&[composition]);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));
    }

    #[test]
    fn test_validate_allows_empty_ingredient_list() -> Result<()> {
        validate_ingredients(&[])
    }

    #[test]
    fn test_total_composition_percentage_sums_entries() {
        let compositions = vec![
            create_test_composition("Milk", 85.0),
            create_test_composition("Cultures", 12.0),
            create_test_composition("Cream", 3.0),
        ];

        assert_eq!(total_composition_percentage(&compositions), 100.0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to_two_decimals(85.3333), 85.33);
        assert_eq!(round_to_two_decimals(12.345), 12.35);
        assert_eq!(round_to_two_decimals(3.0), 3.0);
    }

    #[test]
    fn test_clamp_order_quantity() {
        assert_eq!(clamp_order_quantity(2.456), 2.46);
        assert_eq!(clamp_order_quantity(-5.0), 0.0);
        assert_eq!(clamp_order_quantity(f64::NAN), 0.0);
        assert_eq!(clamp_order_quantity(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_normalize_product_assigns_sort_orders_and_trims() {
        let mut recipe = create_custom_recipe(
            "  Padded Name  ",
            ProductType::GreekYogurt,
            vec![
                create_test_composition(" Milk ", 85.333),
                create_test_composition("Cream", 14.667),
            ],
            vec![create_test_ingredient("Salt", 0.2, " g ")],
        );

        normalize_product(&mut recipe);

        assert_eq!(recipe.name, "Padded Name");
        assert_eq!(recipe.compositions[0].component_name, "Milk");
        assert_eq!(recipe.compositions[0].percentage, 85.33);
        assert_eq!(recipe.compositions[0].sort_order, 0);
        assert_eq!(recipe.compositions[1].sort_order, 1);
        assert_eq!(recipe.additional_ingredients[0].unit, "g");
        assert_eq!(recipe.additional_ingredients[0].sort_order, 0);
    }
}
