use journey_core::model::Course;

use crate::error::ExportError;

/// Serialize the course content as JSON.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn export_course_json(course: &Course, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(course)?
    } else {
        serde_json::to_string(course)?
    };
    Ok(json)
}
