/// Recipe document export and plain text rendering
pub mod export;

/// Recipe authoring validation and input normalization
pub mod recipe;

/// Order scaling arithmetic and its inverse
pub mod scaler;
