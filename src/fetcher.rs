use crate::config::Settings;
use crate::error::Error;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};
use reqwest::Url;
use std::time::Duration;

/// Fetch a page using settings from config/environment.
pub fn fetch_page(url: &str) -> Result<String, Error> {
    let settings = Settings::load()?;
    fetch_page_with(url, &settings)
}

/// Fetch a page over HTTP, enforcing the http/https scheme the engine
/// expects. Non-success statuses are surfaced as `Error::HttpStatus`.
pub fn fetch_page_with(url: &str, settings: &Settings) -> Result<String, Error> {
    let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, settings.user_agent.parse()?);
    headers.insert(ACCEPT, "text/html".parse()?);

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;

    let response = client.get(parsed).headers(headers).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    debug!("Fetched {} ({})", url, status);
    Ok(response.text()?)
}
