// NOTE: medals Architecture Rationale
//
// Why split network operations into begin/settle halves?
// - The board must stay responsive while a create or delete is in flight
// - The TUI keeps requests in a FuturesUnordered and settles each one on the
//   same thread when it completes, so the controller never needs a lock
// - Batch commands (list/add/delete) just await the composed operation
//
// Why are medal adjustments local only?
// - The API exposes create/list/delete; there is no update endpoint
// - Adjustments are lost on reload; the status bar says so after each reload

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
