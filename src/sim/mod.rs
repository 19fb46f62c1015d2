/// Commits chosen windows into the ledger and output.
pub mod accumulator;
pub mod engine;
/// Per-hour record of committed power draw.
pub mod ledger;
pub mod report;
pub mod scheduler;
pub mod types;
pub mod window;
