/// Catalog configuration loading from TOML override files
pub mod catalog;
