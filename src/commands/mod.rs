//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use models::{ListKind, RunArgs};
pub use run::{execute_run, stamp_stream, validate_args};
pub use utils::{display_list, list_lines};
