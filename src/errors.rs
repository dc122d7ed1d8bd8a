use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown product type: {product_type}")]
    InvalidProductType { product_type: String },

    #[error("Unknown capacity unit '{unit_key}' for product type {product_type}")]
    InvalidCapacityUnit {
        product_type: String,
        unit_key: String,
    },

    #[error("Invalid order quantity: {quantity}")]
    InvalidQuantity { quantity: f64 },

    #[error("Recipe validation failed: {message}")]
    Validation { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
