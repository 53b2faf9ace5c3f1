//! Testing infrastructure for medals integration tests.
//!
//! - `MockApi`: mockito-backed stand-in for the remote `country` resource
//! - `fixtures`: sample country records
//! - `TestWorld`: isolated data directory plus a mock API for CLI runs

pub mod fixtures;
pub mod mock_api;
pub mod world;

pub use mock_api::{COUNTRY_PATH, MockApi};
pub use world::{CliResult, TestWorld};

use std::future::Future;

/// Run a future to completion on a fresh single-threaded runtime.
///
/// mockito's synchronous API cannot be used from inside a runtime, so HTTP
/// tests stay synchronous and only enter the runtime for the client call.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build test runtime")
        .block_on(future)
}
