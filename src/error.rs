//! Error kinds surfaced by the scheduler's file boundaries.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Terminal failures of one scheduling run.
///
/// The scheduling core itself never fails; every variant comes from reading
/// the input, loading configuration, or writing results.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("cannot read input \"{}\": {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("input \"{}\" is not a valid schedule document: {source}", .path.display())]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot write output \"{}\": {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("cannot serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),

    #[error("cannot write schedule CSV \"{}\": {source}", .path.display())]
    ExportCsv { path: PathBuf, source: csv::Error },

    #[error("invalid configuration:\n{}", format_config_errors(.0))]
    Config(Vec<ConfigError>),
}

impl From<ConfigError> for SchedulerError {
    fn from(error: ConfigError) -> Self {
        Self::Config(vec![error])
    }
}

fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = SchedulerError::ReadInput {
            path: PathBuf::from("input.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("input.json"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn config_errors_are_listed_one_per_line() {
        let err = SchedulerError::Config(vec![
            ConfigError {
                field: "dayparts.day_start".into(),
                message: "must be < dayparts.day_end".into(),
            },
            ConfigError {
                field: "dayparts.night_start".into(),
                message: "must be <= 24, got 30".into(),
            },
        ]);
        let message = err.to_string();
        assert_eq!(message.lines().count(), 3);
        assert!(message.contains("dayparts.night_start"));
    }
}
