//! Cheapest-window scheduling of household devices under an hourly tariff
//! and a shared power ceiling.

pub mod cli;
pub mod config;
pub mod devices;
pub mod error;
/// Input, output and CSV export file handling.
pub mod io;
/// Scheduling engine, power ledger, window search and reporting.
pub mod sim;
pub mod tariff;
