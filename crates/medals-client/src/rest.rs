use std::time::Duration;

use medals_types::{Country, CountryId, NewCountry};
use reqwest::{Client, ClientBuilder, Response, StatusCode, Url};
use tracing::{debug, instrument};

use crate::{ApiError, CountryApi, Result};

/// Collection URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://mod-9-medals-api.azurewebsites.net/api/country";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the `country` collection; members live at `{base_url}/{id}`
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// reqwest-backed implementation of [`CountryApi`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL does not parse, or
    /// `ApiError::Network` if the underlying reqwest client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url));
        }

        let http = ClientBuilder::new()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn member_url(&self, id: CountryId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound {
            url: url.to_string(),
        });
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

impl CountryApi for RestClient {
    #[instrument(level = "debug", skip(self), fields(url = %self.base_url))]
    async fn list(&self) -> Result<Vec<Country>> {
        let response = self.http.get(&self.base_url).send().await?;
        let countries: Vec<Country> = check_status(response, &self.base_url)?.json().await?;
        debug!(count = countries.len(), "fetched countries");
        Ok(countries)
    }

    #[instrument(level = "debug", skip(self, country), fields(name = %country.name))]
    async fn create(&self, country: &NewCountry) -> Result<Country> {
        let response = self.http.post(&self.base_url).json(country).send().await?;
        let created: Country = check_status(response, &self.base_url)?.json().await?;
        debug!(id = %created.id, "country created");
        Ok(created)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete(&self, id: CountryId) -> Result<()> {
        let url = self.member_url(id);
        let response = self.http.delete(&url).send().await?;
        check_status(response, &url)?;
        Ok(())
    }
}
