//! Mock builder for the remote `country` REST resource.
//!
//! Wraps mockito with helpers for the three calls the client makes.
//! Requests nothing was registered for get mockito's 501 response.

use medals_types::{Country, CountryId};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

/// Path the mock serves the collection under.
pub const COUNTRY_PATH: &str = "/api/country";

pub struct MockApi {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockApi {
    /// Start a mock server.
    ///
    /// Must be called outside of a tokio runtime; drive client futures with
    /// [`crate::block_on`] afterwards.
    pub fn new() -> Self {
        Self {
            server: Server::new(),
            mocks: Vec::new(),
        }
    }

    /// Base URL of the `country` collection, suitable for `--api-url`.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.url(), COUNTRY_PATH)
    }

    /// `GET /api/country` answers with `countries`.
    pub fn with_countries(&mut self, countries: &[Country]) -> &mut Self {
        let body = serde_json::to_string(countries).expect("countries serialize");
        let mock = self
            .server
            .mock("GET", COUNTRY_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create();

        self.mocks.push(mock);
        self
    }

    /// `GET /api/country` fails with `status`.
    pub fn with_list_failure(&mut self, status: usize) -> &mut Self {
        let mock = self
            .server
            .mock("GET", COUNTRY_PATH)
            .with_status(status)
            .create();

        self.mocks.push(mock);
        self
    }

    /// `POST /api/country` for `created.name` with zeroed medals answers with `created`.
    ///
    /// The body matcher is strict, so a request carrying seed medal values
    /// falls through to mockito's 501.
    pub fn with_created(&mut self, created: &Country) -> &mut Self {
        let body = serde_json::to_string(created).expect("country serializes");
        let mock = self
            .server
            .mock("POST", COUNTRY_PATH)
            .match_body(Matcher::Json(json!({
                "name": created.name,
                "gold": 0,
                "silver": 0,
                "bronze": 0,
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create();

        self.mocks.push(mock);
        self
    }

    /// `POST /api/country` fails with `status`.
    pub fn with_create_failure(&mut self, status: usize) -> &mut Self {
        let mock = self
            .server
            .mock("POST", COUNTRY_PATH)
            .with_status(status)
            .create();

        self.mocks.push(mock);
        self
    }

    /// `DELETE /api/country/{id}` answers with `status` and an empty body.
    pub fn with_delete(&mut self, id: CountryId, status: usize) -> &mut Self {
        let mock = self
            .server
            .mock("DELETE", format!("{}/{}", COUNTRY_PATH, id).as_str())
            .with_status(status)
            .create();

        self.mocks.push(mock);
        self
    }

    /// Assert every registered mock was hit exactly once.
    pub fn assert_all(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}
