//! County selection and the NAICS digit-length views.
//!
//! The selector is resolved to a tagged union at the call boundary, so the
//! filter methods themselves cannot fail. The digit views are string-length
//! based: the `"00"` all-industries sentinel rides along with the three-
//! and four-digit views, and range tokens like `"31-33"` only appear in
//! the two-digit view.

use super::{Dataset, Record};
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Which counties a view keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountySelector {
    /// No county filter.
    All,
    One(String),
    Many(BTreeSet<String>),
}

impl CountySelector {
    /// Parse a CLI-style selector: one code, or a comma-separated list.
    pub fn parse(input: &str) -> Result<CountySelector> {
        let codes = input
            .split(',')
            .map(str::trim)
            .map(str::to_string)
            .collect::<Vec<_>>();
        if codes.iter().any(String::is_empty) {
            return Err(Error::Selector(format!("empty county code in `{input}`")));
        }
        match codes.as_slice() {
            [single] => Ok(CountySelector::One(single.clone())),
            _ => Ok(CountySelector::Many(codes.into_iter().collect())),
        }
    }

    /// Build a set selector; an empty collection selects nothing and is
    /// rejected rather than silently dropping every row.
    pub fn many<I, S>(codes: I) -> Result<CountySelector>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = codes.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(Error::Selector("county set is empty".into()));
        }
        Ok(CountySelector::Many(set))
    }

    fn matches(&self, county: &str) -> bool {
        match self {
            CountySelector::All => true,
            CountySelector::One(code) => county == code,
            CountySelector::Many(codes) => codes.contains(county),
        }
    }
}

impl Dataset {
    fn retain(&self, keep: impl Fn(&Record) -> bool) -> Dataset {
        Dataset::from_records(
            self.naics_column.clone(),
            self.records.iter().filter(|r| keep(r)).cloned().collect(),
        )
    }

    /// Rows whose county matches the selector.
    pub fn filter_by_county(&self, selector: &CountySelector) -> Dataset {
        self.retain(|r| selector.matches(&r.county))
    }

    /// Sector-level view: 2-character codes plus multi-sector range tokens
    /// (`"31-33"`). The `"00"` sentinel belongs to the finer views.
    pub fn select_two_digit(&self, selector: &CountySelector) -> Dataset {
        self.retain(|r| {
            let code = r.naics_code.as_str();
            (code.contains('-') || (code.len() == 2 && code != "00")) && selector.matches(&r.county)
        })
    }

    /// Subsector-level view: 3-character codes plus the `"00"` total row.
    pub fn select_three_digit(&self, selector: &CountySelector) -> Dataset {
        self.retain(|r| {
            let code = r.naics_code.as_str();
            (code.len() == 3 || code == "00") && selector.matches(&r.county)
        })
    }

    /// Industry-group-level view: 4-character codes plus the `"00"` total row.
    pub fn select_four_digit(&self, selector: &CountySelector) -> Dataset {
        self.retain(|r| {
            let code = r.naics_code.as_str();
            (code.len() == 4 || code == "00") && selector.matches(&r.county)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Dataset {
        let codes = ["00", "11", "113", "1133", "31-33"];
        let mut records = Vec::new();
        for county in ["013", "015"] {
            for code in codes {
                records.push(Record {
                    state: "01".into(),
                    county: county.into(),
                    naics_code: code.into(),
                    naics_title: String::new(),
                    geo_title: String::new(),
                    employment: 1,
                    establishments: 1,
                });
            }
        }
        Dataset::from_records("NAICS2012", records)
    }

    fn codes_of(ds: &Dataset) -> BTreeSet<String> {
        ds.records().iter().map(|r| r.naics_code.clone()).collect()
    }

    #[test]
    fn two_digit_keeps_sectors_and_ranges() {
        let view = fixture().select_two_digit(&CountySelector::All);
        let expected: BTreeSet<String> = ["11", "31-33"].iter().map(|s| s.to_string()).collect();
        assert_eq!(codes_of(&view), expected);
    }

    #[test]
    fn three_digit_keeps_subsectors_and_sentinel() {
        let view = fixture().select_three_digit(&CountySelector::All);
        let expected: BTreeSet<String> = ["00", "113"].iter().map(|s| s.to_string()).collect();
        assert_eq!(codes_of(&view), expected);
    }

    #[test]
    fn four_digit_keeps_groups_and_sentinel() {
        let view = fixture().select_four_digit(&CountySelector::All);
        let expected: BTreeSet<String> = ["00", "1133"].iter().map(|s| s.to_string()).collect();
        assert_eq!(codes_of(&view), expected);
    }

    #[test]
    fn county_filter_single() {
        let ds = fixture();
        let filtered = ds.filter_by_county(&CountySelector::One("013".into()));
        assert!(filtered.records().iter().all(|r| r.county == "013"));
        assert_eq!(filtered.len(), 5);
    }

    #[test]
    fn county_filter_set() {
        let ds = fixture();
        let sel = CountySelector::many(["013", "015"]).unwrap();
        assert_eq!(ds.filter_by_county(&sel).len(), ds.len());

        let sel = CountySelector::many(["015"]).unwrap();
        let filtered = ds.filter_by_county(&sel);
        assert!(filtered.records().iter().all(|r| r.county == "015"));
    }

    #[test]
    fn digit_views_compose_with_county_filter() {
        let view = fixture().select_two_digit(&CountySelector::One("013".into()));
        assert_eq!(view.len(), 2);
        assert!(view.records().iter().all(|r| r.county == "013"));
    }

    #[test]
    fn selector_parsing() {
        assert_eq!(
            CountySelector::parse("013").unwrap(),
            CountySelector::One("013".into())
        );
        match CountySelector::parse("013, 015").unwrap() {
            CountySelector::Many(set) => {
                assert!(set.contains("013") && set.contains("015"));
            }
            other => panic!("expected Many, got {other:?}"),
        }
        assert!(matches!(
            CountySelector::parse(""),
            Err(Error::Selector(_))
        ));
        assert!(matches!(
            CountySelector::parse("013,,015"),
            Err(Error::Selector(_))
        ));
        assert!(matches!(
            CountySelector::many(Vec::<String>::new()),
            Err(Error::Selector(_))
        ));
    }
}
