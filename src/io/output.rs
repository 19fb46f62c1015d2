//! Writing the output document.

use std::fs;
use std::path::Path;

use crate::error::SchedulerError;
use crate::sim::types::Output;

/// Renders the output document as JSON.
///
/// # Errors
///
/// Returns [`SchedulerError::SerializeOutput`] if serialization fails.
pub fn to_json(output: &Output, pretty: bool) -> Result<String, SchedulerError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    rendered.map_err(SchedulerError::SerializeOutput)
}

/// Writes the output document to `path`.
///
/// The document is fully rendered before the file is touched, so a
/// serialization failure never leaves a partial file behind.
///
/// # Errors
///
/// Returns [`SchedulerError::WriteOutput`] if the file cannot be written.
pub fn write_output(path: &Path, output: &Output, pretty: bool) -> Result<(), SchedulerError> {
    let json = to_json(output, pretty)?;
    fs::write(path, json).map_err(|source| SchedulerError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
