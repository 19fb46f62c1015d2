use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Per-hour record of committed devices and their combined draw.
///
/// Grows monotonically over a run: devices and hours are only ever added.
/// Power is looked up by device id, so a device must be registered before it
/// is activated for any hour.
#[derive(Debug, Clone)]
pub struct PowerLedger {
    max_power_w: f64,
    active: BTreeMap<usize, BTreeSet<String>>,
    power_w: HashMap<String, f64>,
}

impl PowerLedger {
    /// Creates an empty ledger with a shared power ceiling.
    pub fn new(max_power_w: f64) -> Self {
        Self {
            max_power_w,
            active: BTreeMap::new(),
            power_w: HashMap::new(),
        }
    }

    /// Records the power draw of a device.
    pub fn register(&mut self, id: &str, power_w: f64) {
        self.power_w.insert(id.to_string(), power_w);
    }

    /// Marks a registered device as running during `hour`.
    pub fn activate(&mut self, hour: usize, id: &str) {
        self.active.entry(hour).or_default().insert(id.to_string());
    }

    /// Returns the total draw at `hour` if a device drawing `candidate_w`
    /// were added to the devices already running then.
    pub fn total_power_at(&self, hour: usize, candidate_w: f64) -> f64 {
        candidate_w + self.load_at(hour)
    }

    /// Returns `true` when `candidate_w` fits under the ceiling at `hour`.
    pub fn fits(&self, hour: usize, candidate_w: f64) -> bool {
        self.total_power_at(hour, candidate_w) <= self.max_power_w
    }

    /// Returns the committed draw at `hour` in watts.
    pub fn load_at(&self, hour: usize) -> f64 {
        self.active.get(&hour).map_or(0.0, |ids| {
            ids.iter()
                .map(|id| self.power_w.get(id).copied().unwrap_or_default())
                .sum()
        })
    }

    /// Returns the remaining capacity at `hour` in watts.
    pub fn headroom_at(&self, hour: usize) -> f64 {
        self.max_power_w - self.load_at(hour)
    }

    /// Returns the ids running at `hour`, sorted.
    pub fn active_at(&self, hour: usize) -> impl Iterator<Item = &str> {
        self.active
            .get(&hour)
            .into_iter()
            .flat_map(|ids| ids.iter().map(String::as_str))
    }

    /// Returns the shared power ceiling in watts.
    pub fn max_power_w(&self) -> f64 {
        self.max_power_w
    }
}
