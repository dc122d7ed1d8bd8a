//! Recipe data model - Product aggregates and their component records.
//! These types mirror what the external authoring subsystem stores.
//! The scaling engine reads them and never mutates them.

pub mod composition;
pub mod ingredient;
pub mod product;
pub mod product_type;

// Re-export the model types used throughout the crate
pub use composition::Composition;
pub use ingredient::Ingredient;
pub use product::Product;
pub use product_type::ProductType;
