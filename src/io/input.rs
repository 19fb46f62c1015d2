//! Reading the input document.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SchedulerError;
use crate::sim::types::ScheduleInput;

/// Reads and parses the input document at `path`.
///
/// # Errors
///
/// Returns [`SchedulerError::ReadInput`] if the file cannot be read and
/// [`SchedulerError::ParseInput`] if it is not a valid schedule document.
pub fn read_input(path: &Path) -> Result<ScheduleInput, SchedulerError> {
    let raw = fs::read_to_string(path).map_err(|source| SchedulerError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let input: ScheduleInput =
        serde_json::from_str(&raw).map_err(|source| SchedulerError::ParseInput {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        periods = input.rates.len(),
        devices = input.devices.len(),
        max_power_w = input.max_power,
        "input loaded"
    );
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_read_error() {
        let err = read_input(Path::new("does/not/exist.json"));
        assert!(matches!(err, Err(SchedulerError::ReadInput { .. })));
    }

    #[test]
    fn bundled_scenario_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/household.json");
        let input = read_input(&path).expect("bundled scenario should parse");
        assert_eq!(input.max_power, 2100.0);
        assert_eq!(input.rates.len(), 5);
        assert_eq!(input.devices.len(), 5);
    }
}
