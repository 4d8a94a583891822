use crate::error::Result;
use crate::process::RawTable;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::debug;

/// Read a local delimited file into a [`RawTable`].
///
/// Every cell is kept as a string, so FIPS and NAICS codes keep their
/// leading zeros; the count columns are cast later by the record builder.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), path = %path.display(), "read table");
    Ok(RawTable { headers, rows })
}
