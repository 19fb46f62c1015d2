//! Household device model and the scheduling policy derived from its mode.

use std::fmt;

use serde::Deserialize;

use crate::tariff::CYCLE_HOURS;

/// How a device may be placed within the day.
///
/// Chosen once when the device is parsed, from its raw `mode` string and
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePolicy {
    /// Runs inside the day daypart only.
    Day,
    /// Runs inside one of the two night ranges (before or after midnight).
    Night,
    /// Runs for the full cycle; no search is needed.
    AlwaysOn,
    /// Runs anywhere in `[0, 24)`.
    Bounded,
}

impl SchedulePolicy {
    /// Resolves the policy for a raw mode string and duration.
    ///
    /// `"day"` and `"night"` win over duration; any other mode (or none)
    /// becomes [`SchedulePolicy::AlwaysOn`] for full-cycle devices and
    /// [`SchedulePolicy::Bounded`] otherwise.
    pub fn resolve(mode: Option<&str>, duration: usize) -> Self {
        match mode {
            Some("day") => Self::Day,
            Some("night") => Self::Night,
            _ if duration == CYCLE_HOURS => Self::AlwaysOn,
            _ => Self::Bounded,
        }
    }
}

impl fmt::Display for SchedulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::AlwaysOn => "always-on",
            Self::Bounded => "bounded",
        };
        f.write_str(name)
    }
}

/// Wire shape of a device entry in the input document.
#[derive(Debug, Deserialize)]
struct RawDevice {
    id: String,
    #[serde(default)]
    name: Option<String>,
    power: f64,
    duration: usize,
    #[serde(default)]
    mode: Option<String>,
}

/// A household device with a fixed daily run duration and power draw.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDevice")]
pub struct Device {
    pub id: String,
    /// Optional human-readable label, used in logs only.
    pub name: Option<String>,
    /// Power draw in watts.
    pub power_w: f64,
    /// Run duration in whole hours.
    pub duration: usize,
    pub policy: SchedulePolicy,
}

impl From<RawDevice> for Device {
    fn from(raw: RawDevice) -> Self {
        let policy = SchedulePolicy::resolve(raw.mode.as_deref(), raw.duration);
        Self {
            id: raw.id,
            name: raw.name,
            power_w: raw.power,
            duration: raw.duration,
            policy,
        }
    }
}

impl Device {
    /// Creates a device, resolving its policy from `mode`.
    pub fn new(id: impl Into<String>, power_w: f64, duration: usize, mode: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: None,
            power_w,
            duration,
            policy: SchedulePolicy::resolve(mode, duration),
        }
    }

    /// Returns the name when present, the id otherwise.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Energy drawn over one hour, in kWh.
    pub fn energy_per_hour_kwh(&self) -> f64 {
        self.power_w / 1000.0
    }
}
