mod service;
mod session;

// Public API of the journey subsystem.
pub use service::{JourneyService, StartOptions};
pub use session::JourneySession;
