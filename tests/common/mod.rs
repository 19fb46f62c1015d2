//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use rand::{Rng, rngs::StdRng};
use tariff_scheduler::config::DaypartConfig;
use tariff_scheduler::devices::Device;
use tariff_scheduler::sim::engine::Engine;
use tariff_scheduler::sim::types::ScheduleInput;
use tariff_scheduler::tariff::TariffPeriod;

pub const DISHWASHER: &str = "F972B82BA56A70CC579945773B6C3CBF";
pub const OVEN: &str = "C515D887EDBBE669B2FDAC62F571E9E9";
pub const FRIDGE: &str = "02DDD23A85DADDD71198305330CC386D";
pub const THERMOSTAT: &str = "1E6276CC231716FE8EE8BC908486D41E";
pub const AIR_CONDITIONER: &str = "7D9DC84AD110500D284B33C82FE6E85E";

/// Path of the bundled household scenario.
pub fn household_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios/household.json")
}

/// Two-rate household tariff: cheap nights, pricier days with a midday dip.
pub fn household_rates() -> Vec<TariffPeriod> {
    vec![
        TariffPeriod { from: 7, to: 10, value: 6.46 },
        TariffPeriod { from: 10, to: 17, value: 5.38 },
        TariffPeriod { from: 17, to: 21, value: 6.46 },
        TariffPeriod { from: 21, to: 23, value: 5.38 },
        TariffPeriod { from: 23, to: 7, value: 1.79 },
    ]
}

/// Engine over a single flat rate for the whole day.
pub fn flat_engine(max_power: f64, value: f64, devices: Vec<Device>) -> Engine {
    let input = ScheduleInput {
        max_power,
        rates: vec![TariffPeriod { from: 0, to: 24, value }],
        devices,
    };
    Engine::new(input, DaypartConfig::default())
}

/// Random tariff covering every hour exactly once, in hour order once expanded.
///
/// Cut points split the day; when the first cut is after midnight the last
/// period wraps and is listed last.
pub fn random_rates(rng: &mut StdRng) -> Vec<TariffPeriod> {
    let mut cuts: Vec<usize> = (1..24).filter(|_| rng.random_bool(0.2)).collect();
    if cuts.is_empty() {
        cuts.push(rng.random_range(1..24));
    }

    let mut periods = Vec::new();
    for pair in cuts.windows(2) {
        periods.push(TariffPeriod {
            from: pair[0],
            to: pair[1],
            value: random_price(rng),
        });
    }

    let first = cuts[0];
    let last = cuts[cuts.len() - 1];
    if rng.random_bool(0.5) {
        // split at midnight instead of wrapping
        periods.insert(0, TariffPeriod { from: 0, to: first, value: random_price(rng) });
        periods.push(TariffPeriod { from: last, to: 24, value: random_price(rng) });
    } else {
        periods.push(TariffPeriod { from: last, to: first, value: random_price(rng) });
    }
    periods
}

fn random_price(rng: &mut StdRng) -> f64 {
    f64::from(rng.random_range(50_u32..800)) / 100.0
}

/// Random device list with unique ids and a mix of all modes.
pub fn random_devices(rng: &mut StdRng, count: usize) -> Vec<Device> {
    (0..count)
        .map(|k| {
            let mode = match rng.random_range(0..4) {
                0 => Some("day"),
                1 => Some("night"),
                2 => Some("always"),
                _ => None,
            };
            let duration = if rng.random_bool(0.15) { 24 } else { rng.random_range(1..12) };
            let power = f64::from(rng.random_range(1_u32..50)) * 50.0;
            Device::new(format!("dev-{k}"), power, duration, mode)
        })
        .collect()
}

/// Random input document.
pub fn random_input(rng: &mut StdRng) -> ScheduleInput {
    let count = rng.random_range(1..10);
    ScheduleInput {
        max_power: f64::from(rng.random_range(10_u32..40)) * 100.0,
        rates: random_rates(rng),
        devices: random_devices(rng, count),
    }
}
