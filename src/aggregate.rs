use ahash::AHashMap;

use crate::{Temperature, WeatherRecord};

/// Distinct-station count above which a warning is reported.
pub const DEFAULT_STATION_WARNING_THRESHOLD: usize = 10_000;

/// Per-station running statistics, built one observation at a time.
#[derive(Debug, Default)]
pub struct Aggregator {
    map: AHashMap<Box<str>, WeatherRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, station: &str, temperature: Temperature) {
        match self.map.get_mut(station) {
            Some(elem) => elem.update(temperature),
            None => {
                self.map.insert(station.into(), WeatherRecord::new(temperature));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn exceeds(&self, threshold: usize) -> bool {
        self.map.len() > threshold
    }

    pub fn finish(self) -> StationTable {
        StationTable { map: self.map }
    }
}

/// Read-only view of the final aggregates.
#[derive(Debug, Default)]
pub struct StationTable {
    map: AHashMap<Box<str>, WeatherRecord>,
}

impl StationTable {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, station: &str) -> Option<&WeatherRecord> {
        self.map.get(station)
    }

    /// Stations in ascending byte order.
    pub fn sorted(&self) -> Vec<(&str, &WeatherRecord)> {
        let mut entries = self
            .map
            .iter()
            .map(|(station, record)| (&**station, record))
            .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(station, _)| *station);
        entries
    }
}

/// The warning reported once the station count passes `threshold`.
pub fn station_warning(threshold: usize, count: usize) -> String {
    format!(
        "Warning: More than {} unique station names found ({count})",
        group_thousands(threshold)
    )
}

fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
