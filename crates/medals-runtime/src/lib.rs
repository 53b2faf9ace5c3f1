pub mod config;
pub mod controller;
pub mod error;
pub mod notify;

pub use config::{ApiConfig, Config, UiConfig, resolve_data_dir};
pub use controller::{DeleteOutcome, MedalController, PendingDelete, create_request};
pub use error::{Error, Result};
pub use notify::{Alert, Notifier};
