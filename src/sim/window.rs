//! Cost evaluation of one candidate run window.

use crate::devices::Device;
use crate::tariff::HourlyRate;

use super::ledger::PowerLedger;
use super::types::DeviceResult;

/// Costs running `device` over `window`.
///
/// Each entry contributes `power_kW * price`. Returns `None` as soon as the
/// device would push the combined draw above the ledger's ceiling at any
/// hour; no partial result is produced.
///
/// # Arguments
///
/// * `device` - Device to place
/// * `window` - Consecutive hourly rates, one per hour of the run
/// * `ledger` - Draw of devices committed so far
pub fn evaluate(device: &Device, window: &[HourlyRate], ledger: &PowerLedger) -> Option<DeviceResult> {
    let energy_kwh = device.energy_per_hour_kwh();
    let mut hours = Vec::with_capacity(window.len());
    let mut consumed_energy = 0.0;

    for rate in window {
        if !ledger.fits(rate.hour, device.power_w) {
            return None;
        }
        hours.push(rate.hour);
        consumed_energy += energy_kwh * rate.value;
    }

    Some(DeviceResult {
        id: device.id.clone(),
        hours,
        consumed_energy,
    })
}
