use std::sync::Arc;

use journey_core::model::Course;

use crate::catalog;
use crate::error::CatalogError;

use super::session::JourneySession;

/// Where a new journey starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    pub open_story: bool,
    /// Initial lesson step; clamped into range.
    pub lesson_step: usize,
}

/// Owns the validated course and hands out fresh sessions over it.
#[derive(Debug, Clone)]
pub struct JourneyService {
    course: Arc<Course>,
}

impl JourneyService {
    #[must_use]
    pub fn new(course: Arc<Course>) -> Self {
        Self { course }
    }

    /// Load the built-in course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in content fails validation.
    pub fn from_catalog() -> Result<Self, CatalogError> {
        let course = catalog::load_course()?;
        Ok(Self::new(Arc::new(course)))
    }

    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    /// Start a new journey with fresh view state.
    #[must_use]
    pub fn start(&self, options: StartOptions) -> JourneySession {
        tracing::debug!(
            open_story = options.open_story,
            lesson_step = options.lesson_step,
            "starting journey"
        );
        JourneySession::new(self.course(), options)
    }
}
