//! Scheduling engine that places devices one by one in input order.

use tracing::{info, warn};

use crate::config::DaypartConfig;
use crate::devices::Device;
use crate::tariff::{HourlyRate, expand};

use super::accumulator::ScheduleAccumulator;
use super::ledger::PowerLedger;
use super::scheduler::DeviceScheduler;
use super::types::{Output, ScheduleInput};

/// Everything produced by one run of the engine.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub output: Output,
    /// Final ledger state, for reporting and export.
    pub ledger: PowerLedger,
    /// Ids of devices that had no feasible window, in input order.
    pub dropped: Vec<String>,
}

/// Greedy scheduling engine.
///
/// The tariff is expanded once on construction. [`Engine::run`] places every
/// device in input order against a fresh ledger: earlier devices claim power
/// capacity first and are never revisited.
#[derive(Debug, Clone)]
pub struct Engine {
    dayparts: DaypartConfig,
    max_power_w: f64,
    rates: Vec<HourlyRate>,
    devices: Vec<Device>,
}

impl Engine {
    /// Creates an engine from a parsed input document.
    pub fn new(input: ScheduleInput, dayparts: DaypartConfig) -> Self {
        Self {
            dayparts,
            max_power_w: input.max_power,
            rates: expand(&input.rates),
            devices: input.devices,
        }
    }

    /// Returns the expanded hourly rate curve.
    pub fn rates(&self) -> &[HourlyRate] {
        &self.rates
    }

    /// Returns the devices in scheduling order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Returns the shared power ceiling in watts.
    pub fn max_power_w(&self) -> f64 {
        self.max_power_w
    }

    /// Schedules all devices and returns the resulting output.
    ///
    /// Each call starts from an empty ledger, so repeated runs are identical.
    pub fn run(&self) -> ScheduleRun {
        let scheduler = DeviceScheduler::new(&self.rates, self.dayparts);
        let mut acc = ScheduleAccumulator::new(self.max_power_w);
        let mut dropped = Vec::new();

        for device in &self.devices {
            acc.register(&device.id, device.power_w);

            match scheduler.schedule(device, acc.ledger()) {
                Some(result) => {
                    info!(
                        device = device.label(),
                        policy = %device.policy,
                        hours = ?result.hours,
                        cost = result.consumed_energy,
                        "scheduled"
                    );
                    acc.commit(result);
                }
                None => {
                    warn!(
                        device = device.label(),
                        policy = %device.policy,
                        duration = device.duration,
                        power_w = device.power_w,
                        "no feasible window, device dropped"
                    );
                    dropped.push(device.id.clone());
                }
            }
        }

        let (ledger, output) = acc.into_parts();
        ScheduleRun {
            output,
            ledger,
            dropped,
        }
    }
}
