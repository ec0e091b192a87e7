use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    aggregate::station_warning, format_report, parse_record, Aggregator, Config, LineSource,
    StationTable,
};

/// Outcome of one pass over the input.
#[derive(Debug)]
pub struct Summary {
    pub table: StationTable,
    pub lines: usize,
    pub rejected: usize,
}

/// Streams `source` through validation into the aggregate table.
///
/// Every rejected line and the station-count warning go to `diagnostics`.
/// A read failure aborts the pass.
pub fn process<R: BufRead, W: Write>(
    mut source: LineSource<R>,
    diagnostics: &mut W,
    config: &Config,
) -> Result<Summary> {
    let mut aggregator = Aggregator::new();
    let mut rejected = 0;

    while let Some(line) = source.next() {
        let line =
            line.with_context(|| format!("failed to read line {}", source.lines_read() + 1))?;
        match parse_record(&line.text) {
            Ok((station, temperature)) => aggregator.observe(station, temperature),
            Err(rejection) => {
                rejected += 1;
                debug!(line = line.number, reason = rejection.reason(), "rejected record");
                writeln!(diagnostics, "{}", rejection.diagnostic(line.number))?;
            }
        }
    }

    if aggregator.is_empty() {
        info!("no valid records in input");
    } else if aggregator.exceeds(config.station_warning_threshold) {
        writeln!(
            diagnostics,
            "{}",
            station_warning(config.station_warning_threshold, aggregator.len())
        )?;
    }
    debug!(stations = aggregator.len(), "aggregation finished");

    Ok(Summary {
        table: aggregator.finish(),
        lines: source.lines_read(),
        rejected,
    })
}

/// Reads the configured file and returns the rendered report.
pub fn run(config: &Config) -> Result<String> {
    let path = config.path.display();
    info!(%path, "processing measurements");

    let source = LineSource::open(&config.path)
        .with_context(|| format!("Error reading file {path}"))?;
    let mut stderr = io::stderr().lock();
    let summary = process(source, &mut stderr, config)
        .with_context(|| format!("Error reading file {path}"))?;

    info!(
        lines = summary.lines,
        rejected = summary.rejected,
        stations = summary.table.len(),
        "processing finished"
    );
    Ok(format_report(&summary.table))
}
