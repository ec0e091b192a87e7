use std::fmt::{self, Display};

pub mod aggregate;
pub mod config;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod source;

pub use aggregate::{Aggregator, StationTable};
pub use config::{Cli, Config};
pub use pipeline::{process, run, Summary};
pub use record::{parse_record, Rejection};
pub use report::format_report;
pub use source::{LineSource, RawLine};

/// A validated reading in degrees, within [-99.9, 99.9].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Running statistics of a single station.
///
/// Ties keep the stored extreme, so a `-0.0` seen first stays `-0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRecord {
    min: f64,
    max: f64,
    sum: f64,
    count: u64,
}

impl WeatherRecord {
    pub fn new(item: Temperature) -> Self {
        Self {
            min: item.0,
            max: item.0,
            sum: item.0,
            count: 1,
        }
    }

    pub fn update(&mut self, item: Temperature) {
        self.count += 1;
        if item.0 < self.min {
            self.min = item.0;
        }
        if item.0 > self.max {
            self.max = item.0;
        }
        self.sum += item.0;
    }

    pub fn min(&self) -> Temperature {
        Temperature(self.min)
    }

    pub fn max(&self) -> Temperature {
        Temperature(self.max)
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

impl Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/{:.1}/{:.1}", self.min, self.mean(), self.max)
    }
}
