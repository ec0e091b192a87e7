use crate::StationTable;

const SEPARATOR: &str = ", ";

/// Renders `{name=min/mean/max, ...} ` in ascending station order.
pub fn format_report(table: &StationTable) -> String {
    let entries = table
        .sorted()
        .into_iter()
        .map(|(station, record)| format!("{station}={record}"))
        .collect::<Vec<_>>();
    format!("{{{}}} ", entries.join(SEPARATOR))
}
