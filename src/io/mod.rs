//! File boundaries: input document, output document, CSV export.

/// Per-hour CSV export of a finished schedule.
pub mod export;
pub mod input;
pub mod output;
