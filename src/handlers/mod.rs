//! HTTP handlers

pub mod dashboard;
pub mod health;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}
