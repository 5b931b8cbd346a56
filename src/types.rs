use crate::errors::AppError;

/// Result type returned by route handlers
pub type Result<T> = std::result::Result<T, AppError>;
