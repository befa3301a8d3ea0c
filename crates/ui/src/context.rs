use std::sync::Arc;

use services::{JourneyService, StartOptions};

pub trait UiApp: Send + Sync {
    fn start_options(&self) -> StartOptions;

    fn journey_service(&self) -> Arc<JourneyService>;
}

#[derive(Clone)]
pub struct AppContext {
    start_options: StartOptions,
    journey: Arc<JourneyService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            start_options: app.start_options(),
            journey: app.journey_service(),
        }
    }

    /// Where the root view starts when it first mounts.
    #[must_use]
    pub fn start_options(&self) -> StartOptions {
        self.start_options
    }

    #[must_use]
    pub fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
