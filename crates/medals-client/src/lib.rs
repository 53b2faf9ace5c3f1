//! Client for the remote `country` REST resource.
//!
//! ```no_run
//! use medals_client::{ClientConfig, CountryApi, RestClient};
//!
//! # async fn run() -> medals_client::Result<()> {
//! let client = RestClient::new(ClientConfig::default())?;
//! for country in client.list().await? {
//!     println!("{} {}", country.id, country.name);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod rest;

pub use api::CountryApi;
pub use error::{ApiError, Result};
pub use rest::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RestClient};
