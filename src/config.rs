use std::path::PathBuf;

use clap::Parser;

use crate::aggregate::DEFAULT_STATION_WARNING_THRESHOLD;

/// Computes min/mean/max temperature per weather station.
#[derive(Debug, Parser)]
#[command(name = "calculate_average", version)]
pub struct Cli {
    /// `station;temperature` records, one per line
    pub measurements_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    /// Distinct stations above this count trigger a warning.
    pub station_warning_threshold: usize,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            station_warning_threshold: DEFAULT_STATION_WARNING_THRESHOLD,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self::new(cli.measurements_file)
    }
}
