//! RIPEstat HTTP client.

use super::envelope::parse_envelope;
use crate::checker::PrefixProvider;
use crate::config::{self, Config};
use crate::error::CheckError;
use colored::Colorize;

/// Fetches a country's announced IPv4 prefixes from the RIPEstat
/// country-resource-list data call.
#[derive(Debug, Clone)]
pub struct RipeStatProvider {
    client: reqwest::Client,
    base_url: String,
    country: String,
}

impl RipeStatProvider {
    pub fn new(base_url: impl Into<String>, country: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, country)
    }

    /// Use a preconfigured client, e.g. one with a timeout or proxy settings.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        RipeStatProvider {
            client,
            base_url: base_url.into(),
            country: country.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.ripe_stat_url, &config.country)
    }

    /// Build the GET request without sending it.
    pub fn build_request(&self) -> Result<reqwest::Request, reqwest::Error> {
        self.client
            .get(&self.base_url)
            .query(&[
                ("resource", self.country.as_str()),
                ("v4_format", config::V4_FORMAT),
            ])
            .build()
    }
}

fn transport_error(e: reqwest::Error) -> CheckError {
    log::warn!("{failed} API call: {e}", failed = "failed".on_red());
    CheckError::ProviderError {
        detail: e.to_string(),
    }
}

impl PrefixProvider for RipeStatProvider {
    async fn fetch_prefixes(&self) -> Result<Vec<String>, CheckError> {
        let request = self.build_request().map_err(transport_error)?;
        log::debug!("GET {url}", url = request.url().as_str().on_blue());

        let response = self
            .client
            .execute(request)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport_error)?;
        log::debug!("Success status: {}", response.status());

        let body = response.text().await.map_err(transport_error)?;
        log::debug!("Success body.len(): {}", body.len());

        parse_envelope(&body)
    }
}
