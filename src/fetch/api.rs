use crate::error::{Error, Result};
use crate::process::{self, RawTable};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// Issue the one GET for a dataset and parse the JSON matrix body.
///
/// A non-success status aborts immediately with the status attached; there
/// is no retry. The URL carries the API key, so it is never logged here.
pub fn fetch_table(client: &Client, url: &Url) -> Result<RawTable> {
    let response = client.get(url.clone()).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::RemoteFetch { status });
    }

    let body = response.text()?;
    debug!(bytes = body.len(), "received API response");
    process::parse_json_matrix(&body)
}
