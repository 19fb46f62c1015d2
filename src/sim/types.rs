//! Input and output documents of one scheduling run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::devices::Device;
use crate::tariff::TariffPeriod;

/// Parsed input document.
///
/// # Examples
///
/// ```
/// use tariff_scheduler::sim::types::ScheduleInput;
///
/// let input: ScheduleInput = serde_json::from_str(
///     r#"{"maxPower": 2000, "rates": [{"from": 0, "to": 24, "value": 1.5}], "devices": []}"#,
/// ).unwrap();
/// assert_eq!(input.max_power, 2000.0);
/// assert_eq!(input.rates.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    /// Power ceiling shared by all devices, in watts.
    pub max_power: f64,
    pub rates: Vec<TariffPeriod>,
    /// Devices in priority order: earlier devices claim capacity first.
    pub devices: Vec<Device>,
}

/// The chosen window of one device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceResult {
    pub id: String,
    /// Hours the device runs, in window order.
    pub hours: Vec<usize>,
    /// Cost of running the device over `hours`.
    pub consumed_energy: f64,
}

/// Total and per-device energy cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsumedEnergy {
    pub value: f64,
    pub devices: BTreeMap<String, f64>,
}

/// Output document: which devices run at each hour and what they cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Hour of day to device ids, in commit order.
    pub schedule: BTreeMap<usize, Vec<String>>,
    pub consumed_energy: ConsumedEnergy,
}
