use std::sync::Arc;

use crate::error::AppServicesError;
use crate::journey::{JourneyService, StartOptions};

/// Assembles app-facing services and the resolved launch options.
#[derive(Debug, Clone)]
pub struct AppServices {
    journey: Arc<JourneyService>,
    start_options: StartOptions,
}

impl AppServices {
    /// Build services over the built-in course.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the course catalog fails validation.
    pub fn from_catalog(start_options: StartOptions) -> Result<Self, AppServicesError> {
        let journey = Arc::new(JourneyService::from_catalog()?);
        Ok(Self {
            journey,
            start_options,
        })
    }

    #[must_use]
    pub fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }

    #[must_use]
    pub fn start_options(&self) -> StartOptions {
        self.start_options
    }
}
