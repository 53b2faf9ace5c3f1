pub mod domain;
pub mod error;
mod collate;

pub use collate::{compare_names, sort_by_name};
pub use domain::*;
pub use error::{Error, Result};
