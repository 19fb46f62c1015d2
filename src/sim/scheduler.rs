//! Cheapest-window search for a single device.

use tracing::debug;

use crate::config::DaypartConfig;
use crate::devices::{Device, SchedulePolicy};
use crate::tariff::{CYCLE_HOURS, HourlyRate};

use super::ledger::PowerLedger;
use super::types::DeviceResult;
use super::window::evaluate;

/// Finds the cheapest feasible run window for a device over a fixed rate curve.
///
/// The rate curve is read positionally: the window starting at offset `i`
/// is `rates[i..i + duration]`.
#[derive(Debug, Clone, Copy)]
pub struct DeviceScheduler<'a> {
    rates: &'a [HourlyRate],
    dayparts: DaypartConfig,
}

impl<'a> DeviceScheduler<'a> {
    pub fn new(rates: &'a [HourlyRate], dayparts: DaypartConfig) -> Self {
        Self { rates, dayparts }
    }

    /// Places `device` according to its policy against the current ledger.
    ///
    /// Night devices get two independent searches, `[night_start, 24)` then
    /// `[0, night_end)`; the later one only wins when strictly cheaper.
    pub fn schedule(&self, device: &Device, ledger: &PowerLedger) -> Option<DeviceResult> {
        let d = &self.dayparts;
        match device.policy {
            SchedulePolicy::Day => self.find_best_window(device, ledger, d.day_start, d.day_end),
            SchedulePolicy::Night => {
                let evening = self.find_best_window(device, ledger, d.night_start, CYCLE_HOURS);
                let morning = self.find_best_window(device, ledger, 0, d.night_end);
                cheaper(evening, morning)
            }
            SchedulePolicy::AlwaysOn => {
                let window = self.rates.get(..device.duration)?;
                evaluate(device, window, ledger)
            }
            SchedulePolicy::Bounded => self.find_best_window(device, ledger, 0, CYCLE_HOURS),
        }
    }

    /// Scans start offsets in `[start, end)` and keeps the first strict minimum.
    ///
    /// An offset `i` is tried only while `i + duration < end`, so the window
    /// ending exactly at `end` is never considered. Windows that would run past
    /// the rate curve are skipped.
    pub fn find_best_window(
        &self,
        device: &Device,
        ledger: &PowerLedger,
        start: usize,
        end: usize,
    ) -> Option<DeviceResult> {
        let mut best = None;

        for offset in start..end.saturating_sub(device.duration) {
            let Some(window) = self.rates.get(offset..offset + device.duration) else {
                continue;
            };
            let candidate = evaluate(device, window, ledger);
            if let Some(ref c) = candidate {
                debug!(device = %device.id, offset, cost = c.consumed_energy, "feasible window");
            }
            best = cheaper(best, candidate);
        }

        best
    }
}

/// Keeps `current` unless `candidate` is strictly cheaper or `current` is empty.
fn cheaper(current: Option<DeviceResult>, candidate: Option<DeviceResult>) -> Option<DeviceResult> {
    match (current, candidate) {
        (None, candidate) => candidate,
        (Some(current), Some(candidate)) if candidate.consumed_energy < current.consumed_energy => {
            Some(candidate)
        }
        (current, _) => current,
    }
}
