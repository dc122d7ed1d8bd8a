//! `SynProd` command line front end.
//!
//! Loads the catalogs, reads recipes from TOML files, and drives the scaling
//! engine: interactive-style scaling output, full production document export,
//! inverse quantity computation, and catalog listings.

use chrono::Utc;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::{Path, PathBuf};
use synprod::{
    catalog::Catalogs,
    config,
    core::{export, recipe, scaler},
    errors::{Error, Result},
    model::{Product, ProductType},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "synprod",
    version,
    about = "Recipe scaling and order capacity calculator"
)]
struct Cli {
    /// TOML file overriding the built-in catalogs (or set SYNPROD_CATALOG)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scale a recipe to an order size
    Scale {
        /// Path to the recipe TOML file
        recipe: PathBuf,
        /// Number of capacity units ordered
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,
        /// Capacity unit key (defaults to the product type's first unit)
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// Render a recipe order as a production document
    Export {
        /// Path to the recipe TOML file
        recipe: PathBuf,
        /// Number of capacity units ordered
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,
        /// Capacity unit key (defaults to the product type's first unit)
        #[arg(short, long)]
        unit: Option<String>,
        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Back-compute the order quantity for a target total weight
    Quantity {
        /// Product type (e.g., DRINKS)
        product_type: String,
        /// Target total weight in the product's base weight unit
        #[arg(allow_negative_numbers = true)]
        target_weight: f64,
        /// Capacity unit key (defaults to the product type's first unit)
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// List the product types and their base units
    Types,
    /// List the capacity units of a product type
    Units {
        /// Product type (e.g., DRINKS)
        product_type: String,
    },
}

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synprod=info")),
        )
        // Keep stdout clean for the scale/export payloads
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Parse command line arguments
    let cli = Cli::parse();

    // 4. Resolve catalogs (override file from --catalog or SYNPROD_CATALOG)
    let catalog_path = cli
        .catalog
        .or_else(|| std::env::var("SYNPROD_CATALOG").ok().map(PathBuf::from));
    let catalogs = config::catalog::resolve_catalogs(catalog_path.as_deref())?;

    // 5. Dispatch the requested command
    match cli.command {
        Command::Scale {
            recipe,
            quantity,
            unit,
        } => run_scale(&catalogs, &recipe, quantity, unit.as_deref()),
        Command::Export {
            recipe,
            quantity,
            unit,
            output,
        } => run_export(&catalogs, &recipe, quantity, unit.as_deref(), output.as_deref()),
        Command::Quantity {
            product_type,
            target_weight,
            unit,
        } => run_quantity(&catalogs, &product_type, target_weight, unit.as_deref()),
        Command::Types => run_types(&catalogs),
        Command::Units { product_type } => run_units(&catalogs, &product_type),
    }
}

/// Reads a recipe TOML file and applies the save-path normalizations.
///
/// A recipe that fails authoring validation is reported with a warning and
/// still returned: the calculator works on whatever is stored, and the
/// validation gate belongs to the save path.
fn load_recipe(path: &Path) -> Result<Product> {
    let contents = std::fs::read_to_string(path)?;
    let mut product: Product = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse recipe file: {e}"),
    })?;
    recipe::normalize_product(&mut product);

    if let Err(e) = recipe::validate_product(&product) {
        warn!("Recipe '{}' fails authoring validation: {e}", product.name);
    }

    info!("Loaded recipe '{}' from {}", product.name, path.display());
    Ok(product)
}

/// Picks the capacity unit key to use: the explicit choice, or the product
/// type's default unit when none was given.
fn resolve_unit_key(
    catalogs: &Catalogs,
    product_type: ProductType,
    unit: Option<&str>,
) -> Result<String> {
    match unit {
        Some(key) => Ok(key.to_string()),
        None => Ok(catalogs.capacities.default_unit(product_type)?.key.clone()),
    }
}

fn run_scale(
    catalogs: &Catalogs,
    recipe_path: &Path,
    quantity: f64,
    unit: Option<&str>,
) -> Result<()> {
    let product = load_recipe(recipe_path)?;
    let quantity = recipe::clamp_order_quantity(quantity);
    let unit_key = resolve_unit_key(catalogs, product.product_type, unit)?;
    let unit = catalogs.capacities.unit(product.product_type, &unit_key)?;
    let info = catalogs.product_types.info(product.product_type)?;
    let result = scaler::scale_product(catalogs, &product, quantity, &unit_key)?;

    println!("{} ({})", product.name, info.display_name);
    println!("Order: {} {}", quantity, unit.label);
    println!(
        "Total weight: {:.1}{}",
        result.total_weight, info.base_weight_unit
    );

    if !result.per_composition.is_empty() {
        println!("\nComposition:");
        for entry in &result.per_composition {
            println!(
                "  {} | {:.2}% | {:.1}{}",
                entry.composition.component_name,
                entry.composition.percentage,
                entry.scaled_weight,
                info.base_weight_unit
            );
        }
        let total_percentage = recipe::total_composition_percentage(&product.compositions);
        println!(
            "  Total | {:.1}% | {:.1}{}",
            total_percentage, result.total_weight, info.base_weight_unit
        );
    }

    if !result.per_ingredient.is_empty() {
        println!("\nAdditional ingredients:");
        for entry in &result.per_ingredient {
            println!(
                "  {} | {:.2} {}",
                entry.ingredient.ingredient_name, entry.scaled_quantity, entry.ingredient.unit
            );
        }
    }

    Ok(())
}

fn run_export(
    catalogs: &Catalogs,
    recipe_path: &Path,
    quantity: f64,
    unit: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let product = load_recipe(recipe_path)?;
    let quantity = recipe::clamp_order_quantity(quantity);
    let unit_key = resolve_unit_key(catalogs, product.product_type, unit)?;

    let document = export::build_recipe_document(catalogs, &product, quantity, &unit_key, Utc::now())?;
    let text = export::render_text(&document);

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!("Wrote production document to {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn run_quantity(
    catalogs: &Catalogs,
    product_type: &str,
    target_weight: f64,
    unit: Option<&str>,
) -> Result<()> {
    let product_type: ProductType = product_type.parse()?;
    let unit_key = resolve_unit_key(catalogs, product_type, unit)?;
    let unit = catalogs.capacities.unit(product_type, &unit_key)?;
    let info = catalogs.product_types.info(product_type)?;

    let quantity = scaler::total_weight_to_quantity(catalogs, product_type, &unit_key, target_weight)?;

    println!(
        "{:.1}{} of {} = {:.2} {}",
        target_weight.max(0.0),
        info.base_weight_unit,
        info.display_name,
        quantity,
        unit.label
    );

    Ok(())
}

fn run_types(catalogs: &Catalogs) -> Result<()> {
    println!("Product types:");
    for product_type in catalogs.product_types.product_types() {
        let info = catalogs.product_types.info(product_type)?;
        let units = catalogs.capacities.units(product_type)?;
        let unit_keys: Vec<&str> = units.iter().map(|unit| unit.key.as_str()).collect();
        println!(
            "  {} | {} | base {} | units: {}",
            product_type,
            info.display_name,
            info.base_weight_display(),
            unit_keys.join(", ")
        );
    }

    Ok(())
}

fn run_units(catalogs: &Catalogs, product_type: &str) -> Result<()> {
    let product_type: ProductType = product_type.parse()?;
    let info = catalogs.product_types.info(product_type)?;

    println!(
        "Capacity units for {} (base {}):",
        info.display_name,
        info.base_weight_display()
    );
    for unit in catalogs.capacities.units(product_type)? {
        println!("  {} | {} | x{} base units", unit.key, unit.label, unit.multiplier);
    }

    Ok(())
}
