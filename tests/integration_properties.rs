//! Invariants checked over seeded random households.

mod common;

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use tariff_scheduler::config::DaypartConfig;
use tariff_scheduler::devices::SchedulePolicy;
use tariff_scheduler::sim::engine::Engine;

const SEEDS: std::ops::Range<u64> = 0..200;

fn random_engine(seed: u64) -> Engine {
    let mut rng = StdRng::seed_from_u64(seed);
    Engine::new(common::random_input(&mut rng), DaypartConfig::default())
}

#[test]
fn generated_tariffs_expand_in_hour_order() {
    for seed in SEEDS {
        let engine = random_engine(seed);
        let hours: Vec<usize> = engine.rates().iter().map(|r| r.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<_>>(), "seed {seed}");
    }
}

#[test]
fn power_ceiling_is_never_exceeded() {
    for seed in SEEDS {
        let engine = random_engine(seed);
        let power: HashMap<&str, f64> = engine
            .devices()
            .iter()
            .map(|d| (d.id.as_str(), d.power_w))
            .collect();
        let run = engine.run();

        for (hour, ids) in &run.output.schedule {
            let load: f64 = ids.iter().map(|id| power[id.as_str()]).sum();
            assert!(
                load <= engine.max_power_w(),
                "seed {seed}: hour {hour} draws {load} W over {} W",
                engine.max_power_w()
            );
        }
    }
}

#[test]
fn windows_respect_policy_and_duration() {
    for seed in SEEDS {
        let engine = random_engine(seed);
        let run = engine.run();

        for device in engine.devices() {
            let hours: Vec<usize> = run
                .output
                .schedule
                .iter()
                .filter(|(_, ids)| ids.contains(&device.id))
                .map(|(hour, _)| *hour)
                .collect();

            if !run.output.consumed_energy.devices.contains_key(&device.id) {
                assert!(hours.is_empty(), "seed {seed}: dropped {} still scheduled", device.id);
                continue;
            }

            assert_eq!(hours.len(), device.duration, "seed {seed}: {}", device.id);
            assert!(
                hours.windows(2).all(|w| w[1] == w[0] + 1),
                "seed {seed}: {} window not contiguous: {hours:?}",
                device.id
            );

            let first = hours[0];
            let last = hours[hours.len() - 1];
            match device.policy {
                SchedulePolicy::Day => assert!(first >= 7 && last < 20, "seed {seed}: {hours:?}"),
                SchedulePolicy::Night => assert!(
                    (first >= 21 && last < 23) || last < 6,
                    "seed {seed}: {hours:?}"
                ),
                SchedulePolicy::AlwaysOn => assert_eq!(hours, (0..24).collect::<Vec<_>>()),
                SchedulePolicy::Bounded => assert!(last < 23, "seed {seed}: {hours:?}"),
            }
        }
    }
}

#[test]
fn totals_add_up_and_match_rates() {
    for seed in SEEDS {
        let engine = random_engine(seed);
        let run = engine.run();
        let energy = &run.output.consumed_energy;

        let sum: f64 = energy.devices.values().sum();
        assert!((energy.value - sum).abs() < 1e-6, "seed {seed}");

        for device in engine.devices() {
            let Some(&cost) = energy.devices.get(&device.id) else {
                continue;
            };
            let expected: f64 = run
                .output
                .schedule
                .iter()
                .filter(|(_, ids)| ids.contains(&device.id))
                .map(|(hour, _)| device.power_w / 1000.0 * engine.rates()[*hour].value)
                .sum();
            assert!((cost - expected).abs() < 1e-6, "seed {seed}: {}", device.id);
        }
    }
}

#[test]
fn scheduling_is_idempotent() {
    for seed in SEEDS {
        let engine = random_engine(seed);
        assert_eq!(engine.run().output, engine.run().output, "seed {seed}");
    }
}
