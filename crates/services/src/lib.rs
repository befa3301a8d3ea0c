#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod export;
pub mod journey;

pub use app_services::AppServices;
pub use error::{AppServicesError, CatalogError, ExportError};
pub use export::export_course_json;
pub use journey::{JourneyService, JourneySession, StartOptions};
