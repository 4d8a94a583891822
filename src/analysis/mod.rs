//! Location quotients: county industry concentration relative to the state.
//!
//! For one county row, the quotient is the county's share of employment in
//! that industry divided by the state's share. Both shares use the `"00"`
//! all-industries row as their base, so the input dataset must carry its
//! total rows and the state totals must include the sentinel code.

use crate::dataset::{Dataset, IndustryTotal};
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::warn;

/// All-industries sentinel code used as the quotient base.
const ALL_INDUSTRIES: &str = "00";

#[derive(Debug, Clone, PartialEq)]
pub struct LocationQuotient {
    pub county: String,
    pub naics_code: String,
    pub employment: u64,
    pub quotient: f64,
}

/// Compute a location quotient for every row of `counties` against
/// `state_totals` (normally the output of [`Dataset::totals`] on the full
/// state table).
///
/// Rows that cannot be scored — a county with no `"00"` row, a code absent
/// from the state totals, or a zero base — are skipped with a warning.
/// Missing the state-level `"00"` row entirely is an error, since then no
/// row could be scored.
pub fn location_quotients(
    counties: &Dataset,
    state_totals: &[IndustryTotal],
) -> Result<Vec<LocationQuotient>> {
    let state_emp: HashMap<&str, u64> = state_totals
        .iter()
        .map(|t| (t.naics_code.as_str(), t.employment))
        .collect();
    let state_base = *state_emp
        .get(ALL_INDUSTRIES)
        .ok_or_else(|| Error::Malformed("state totals lack the all-industries `00` row".into()))?;
    if state_base == 0 {
        return Err(Error::Malformed("state all-industries employment is zero".into()));
    }

    let county_base: HashMap<&str, u64> = counties
        .records()
        .iter()
        .filter(|r| r.naics_code == ALL_INDUSTRIES)
        .map(|r| (r.county.as_str(), r.employment))
        .collect();

    let mut quotients = Vec::with_capacity(counties.len());
    for record in counties.records() {
        let base = match county_base.get(record.county.as_str()) {
            Some(base) if *base > 0 => *base,
            _ => {
                warn!(county = %record.county, "no usable all-industries base; skipping");
                continue;
            }
        };
        let industry_state = match state_emp.get(record.naics_code.as_str()) {
            Some(emp) if *emp > 0 => *emp,
            _ => {
                warn!(code = %record.naics_code, "industry missing from state totals; skipping");
                continue;
            }
        };

        let numerator = record.employment as f64 / base as f64;
        let denominator = industry_state as f64 / state_base as f64;
        quotients.push(LocationQuotient {
            county: record.county.clone(),
            naics_code: record.naics_code.clone(),
            employment: record.employment,
            quotient: numerator / denominator,
        });
    }

    Ok(quotients)
}
