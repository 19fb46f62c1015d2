//! Tariff expansion: from priced hour ranges to a positional hourly price curve.

use serde::{Deserialize, Serialize};

/// Number of hours in one tariff cycle.
pub const CYCLE_HOURS: usize = 24;

/// A span of hours sharing one electricity price.
///
/// `from` is inclusive and `to` exclusive. When `from >= to` the period
/// wraps past midnight and covers `[from, 24)` followed by `[0, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffPeriod {
    pub from: usize,
    pub to: usize,
    /// Price per kWh.
    pub value: f64,
}

/// Price of one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyRate {
    pub hour: usize,
    pub value: f64,
}

/// Expands tariff periods into a flat sequence of hourly rates.
///
/// Periods are processed in input order. A wrapping period contributes its
/// evening part in place and its morning part (`[0, to)`) is prepended to
/// everything produced so far, so the morning hours of later periods end up
/// closest to index 0.
///
/// Overlaps and gaps are not reconciled: overlapping periods yield duplicate
/// hours, uncovered hours are simply absent. The output length is the sum of
/// all period spans.
///
/// # Examples
///
/// ```
/// use tariff_scheduler::tariff::{TariffPeriod, expand};
///
/// let rates = expand(&[TariffPeriod { from: 22, to: 2, value: 3.0 }]);
/// let hours: Vec<usize> = rates.iter().map(|r| r.hour).collect();
/// assert_eq!(hours, vec![0, 1, 22, 23]);
/// ```
pub fn expand(periods: &[TariffPeriod]) -> Vec<HourlyRate> {
    let mut rates: Vec<HourlyRate> = Vec::new();

    for period in periods {
        let value = period.value;
        if period.from < period.to {
            rates.extend((period.from..period.to).map(|hour| HourlyRate { hour, value }));
        } else {
            rates.extend((period.from..CYCLE_HOURS).map(|hour| HourlyRate { hour, value }));
            let mut morning: Vec<HourlyRate> = (0..period.to)
                .map(|hour| HourlyRate { hour, value })
                .collect();
            morning.append(&mut rates);
            rates = morning;
        }
    }

    rates
}
