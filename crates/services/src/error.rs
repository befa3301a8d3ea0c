//! Shared error types for the services crate.

use thiserror::Error;

use journey_core::model::CourseError;

/// Errors emitted while loading the built-in course.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("invalid course content: {0}")]
    Invalid(#[from] CourseError),
}

/// Errors emitted by the course export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
