//! Turns raw string tables into typed per-county records.
//!
//! Both sources hand their data over as a [`RawTable`] — headers plus rows
//! of strings. The API body is a JSON matrix whose first row is the header
//! row; the file source produces the same shape from CSV. Record building
//! casts the count columns, applies employment imputation, and consumes
//! the suppression-flag column so it never reaches a [`Record`].

use crate::dataset::Record;
use crate::error::{Error, Result};
use crate::schema;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct RawTable {
    /// Column names, from the header row of the source.
    pub headers: Vec<String>,
    /// Each data row, one String per field. Nulls arrive as empty strings.
    pub rows: Vec<Vec<String>>,
}

/// Parse the API's array-of-arrays JSON body into a [`RawTable`].
///
/// First inner array is the header row, the rest are values. All values
/// are strings (or null); nothing is cast here.
pub fn parse_json_matrix(body: &str) -> Result<RawTable> {
    let matrix: Vec<Vec<Option<String>>> = serde_json::from_str(body)?;

    let mut iter = matrix.into_iter();
    let headers = iter
        .next()
        .ok_or_else(|| Error::Malformed("response matrix has no header row".into()))?
        .into_iter()
        .map(|cell| cell.unwrap_or_default())
        .collect::<Vec<_>>();

    if headers.iter().any(String::is_empty) {
        return Err(Error::Malformed("response header row has a null column".into()));
    }

    let rows = iter
        .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
        .collect::<Vec<Vec<String>>>();

    debug!(columns = headers.len(), rows = rows.len(), "parsed response matrix");
    Ok(RawTable { headers, rows })
}

/// Build typed records from a raw table.
///
/// `naics_column` names the industry-code column for the dataset's survey
/// vintage. With `impute` set, any row whose flag cell is non-empty takes
/// its employment from the midpoint table; the flag column itself is
/// consumed and never emitted.
pub fn build_records(raw: &RawTable, naics_column: &str, impute: bool) -> Result<Vec<Record>> {
    let col_state = required_column(raw, schema::STATE_COLUMN)?;
    let col_county = required_column(raw, schema::COUNTY_COLUMN)?;
    let col_naics = required_column(raw, naics_column)?;
    let col_emp = required_column(raw, schema::EMP_COLUMN)?;
    let col_estab = required_column(raw, schema::ESTAB_COLUMN)?;

    // Display labels and the flag are optional: custom variable lists and
    // pre-cleaned files may omit them.
    let col_naics_title = column_index(raw, &schema::naics_title_column(naics_column));
    let col_geo_title = column_index(raw, schema::GEO_TITLE_COLUMN);
    let col_flag = column_index(raw, schema::EMP_FLAG_COLUMN);

    let mut records = Vec::with_capacity(raw.rows.len());
    for row in &raw.rows {
        let mut employment = parse_count(cell(row, col_emp), schema::EMP_COLUMN)?;
        let establishments = parse_count(cell(row, col_estab), schema::ESTAB_COLUMN)?;

        if impute {
            if let Some(flag) = col_flag.map(|i| cell(row, i).trim()).filter(|f| !f.is_empty()) {
                match schema::EMP_IMPUTATION.get(flag) {
                    Some(midpoint) => employment = *midpoint,
                    None => warn!(flag, "unrecognized suppression flag; keeping reported value"),
                }
            }
        }

        records.push(Record {
            state: cell(row, col_state).to_string(),
            county: cell(row, col_county).to_string(),
            naics_code: cell(row, col_naics).to_string(),
            naics_title: col_naics_title.map(|i| cell(row, i).to_string()).unwrap_or_default(),
            geo_title: col_geo_title.map(|i| cell(row, i).to_string()).unwrap_or_default(),
            employment,
            establishments,
        });
    }

    Ok(records)
}

fn column_index(raw: &RawTable, name: &str) -> Option<usize> {
    raw.headers.iter().position(|h| h == name)
}

fn required_column(raw: &RawTable, name: &str) -> Result<usize> {
    column_index(raw, name)
        .ok_or_else(|| Error::Malformed(format!("required column `{name}` not found")))
}

/// A short row simply has no value for trailing columns.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Blank counts are zero; anything else must parse as a non-negative integer.
fn parse_count(value: &str, column: &str) -> Result<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u64>().map_err(|_| {
        Error::Malformed(format!("column `{column}` holds non-numeric count `{trimmed}`"))
    })
}
