use crate::error::Result;
use url::Url;

/// Base of the Census data API; the survey year is a path segment.
pub const API_BASE: &str = "https://api.census.gov/data";

/// Build the county query for one state-year:
/// `{base}/{year}/cbp?get={vars}&for=county:*&in=state:{fips}&key={key}`.
pub fn query_url(year: u16, variables: &[String], state_fips: &str, key: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{API_BASE}/{year}/cbp"))?;
    url.query_pairs_mut()
        .append_pair("get", &variables.join(","))
        .append_pair("for", "county:*")
        .append_pair("in", &format!("state:{state_fips}"))
        .append_pair("key", key);
    Ok(url)
}

/// National query used for the NAICS code-list export:
/// `{base}/{year}/cbp?get={vars}&for=us:*&key={key}`.
pub fn national_url(year: u16, variables: &[String], key: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{API_BASE}/{year}/cbp"))?;
    url.query_pairs_mut()
        .append_pair("get", &variables.join(","))
        .append_pair("for", "us:*")
        .append_pair("key", key);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_query_embeds_all_parameters() -> Result<()> {
        let vars = vec!["EMP".to_string(), "ESTAB".to_string()];
        let url = query_url(2014, &vars, "01", "secret")?;
        assert_eq!(url.path(), "/data/2014/cbp");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("get".into(), "EMP,ESTAB".into())));
        assert!(pairs.contains(&("for".into(), "county:*".into())));
        assert!(pairs.contains(&("in".into(), "state:01".into())));
        assert!(pairs.contains(&("key".into(), "secret".into())));
        Ok(())
    }

    #[test]
    fn national_query_has_no_state_clause() -> Result<()> {
        let vars = vec!["NAICS2012".to_string()];
        let url = national_url(2014, &vars, "secret")?;
        assert!(url.query_pairs().any(|(k, v)| k == "for" && v == "us:*"));
        assert!(!url.query_pairs().any(|(k, _)| k == "in"));
        Ok(())
    }
}
