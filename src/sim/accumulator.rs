use super::ledger::PowerLedger;
use super::types::{DeviceResult, Output};

/// Commits chosen windows into the shared ledger and the output document.
///
/// Owns the only mutable [`PowerLedger`] of a run, so every evaluation sees
/// exactly the devices committed before it.
#[derive(Debug, Clone)]
pub struct ScheduleAccumulator {
    ledger: PowerLedger,
    output: Output,
}

impl ScheduleAccumulator {
    /// Creates an empty accumulator with a shared power ceiling.
    pub fn new(max_power_w: f64) -> Self {
        Self {
            ledger: PowerLedger::new(max_power_w),
            output: Output::default(),
        }
    }

    /// Read access to the ledger for window evaluation.
    pub fn ledger(&self) -> &PowerLedger {
        &self.ledger
    }

    /// Records the power draw of a device about to be scheduled.
    pub fn register(&mut self, id: &str, power_w: f64) {
        self.ledger.register(id, power_w);
    }

    /// Adds a device's window to the schedule, the ledger and the cost totals.
    pub fn commit(&mut self, result: DeviceResult) {
        for &hour in &result.hours {
            self.output
                .schedule
                .entry(hour)
                .or_default()
                .push(result.id.clone());
            self.ledger.activate(hour, &result.id);
        }

        let energy = &mut self.output.consumed_energy;
        energy.value += result.consumed_energy;
        energy.devices.insert(result.id, result.consumed_energy);
    }

    /// Returns the output built so far.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Consumes the accumulator, returning the ledger and the output.
    pub fn into_parts(self) -> (PowerLedger, Output) {
        (self.ledger, self.output)
    }
}
