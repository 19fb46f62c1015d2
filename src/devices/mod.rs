//! Household devices and their scheduling policies.

pub mod types;

pub use types::Device;
pub use types::SchedulePolicy;
