//! Post-hoc summary of a scheduling run.

use std::fmt;

use crate::tariff::CYCLE_HOURS;

use super::engine::ScheduleRun;

/// Aggregate indicators derived from a complete scheduling run.
///
/// Computed from the final ledger and output so the report always agrees
/// with the written schedule.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    /// Total energy cost of all scheduled devices.
    pub total_cost: f64,
    /// Total energy drawn by scheduled devices (kWh).
    pub total_energy_kwh: f64,
    /// Number of devices with a window.
    pub scheduled_devices: usize,
    /// Ids of devices without a feasible window, in input order.
    pub dropped_devices: Vec<String>,
    /// Highest combined draw over the day (W).
    pub peak_load_w: f64,
    /// First hour at which `peak_load_w` occurs, if anything runs.
    pub peak_hour: Option<usize>,
    /// Shared power ceiling (W).
    pub max_power_w: f64,
    /// Hours with no device running.
    pub idle_hours: usize,
}

impl ScheduleReport {
    /// Computes the report from a finished run.
    pub fn from_run(run: &ScheduleRun) -> Self {
        let mut peak_load_w = 0.0_f64;
        let mut peak_hour = None;
        let mut total_energy_kwh = 0.0;
        let mut idle_hours = 0;

        for hour in 0..CYCLE_HOURS {
            let load = run.ledger.load_at(hour);
            total_energy_kwh += load / 1000.0;
            if run.ledger.active_at(hour).next().is_none() {
                idle_hours += 1;
                continue;
            }
            if peak_hour.is_none() || load > peak_load_w {
                peak_load_w = load;
                peak_hour = Some(hour);
            }
        }

        Self {
            total_cost: run.output.consumed_energy.value,
            total_energy_kwh,
            scheduled_devices: run.output.consumed_energy.devices.len(),
            dropped_devices: run.dropped.clone(),
            peak_load_w,
            peak_hour,
            max_power_w: run.ledger.max_power_w(),
            idle_hours,
        }
    }

    /// Average price paid per kWh, zero when nothing was scheduled.
    pub fn average_price(&self) -> f64 {
        if self.total_energy_kwh > 0.0 {
            self.total_cost / self.total_energy_kwh
        } else {
            0.0
        }
    }
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Schedule Report ---")?;
        writeln!(f, "Total cost:            {:.4}", self.total_cost)?;
        writeln!(f, "Total energy:          {:.3} kWh", self.total_energy_kwh)?;
        writeln!(f, "Average price:         {:.4} per kWh", self.average_price())?;
        writeln!(f, "Scheduled devices:     {}", self.scheduled_devices)?;
        writeln!(f, "Dropped devices:       {}", self.dropped_devices.len())?;
        match self.peak_hour {
            Some(hour) => writeln!(
                f,
                "Peak load:             {:.0} W of {:.0} W at hour {hour}",
                self.peak_load_w, self.max_power_w
            )?,
            None => writeln!(f, "Peak load:             0 W of {:.0} W", self.max_power_w)?,
        }
        write!(f, "Idle hours:            {}", self.idle_hours)
    }
}
