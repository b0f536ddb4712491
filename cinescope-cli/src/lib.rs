// cinescope-cli/src/lib.rs
//
// Library portion of the Cinescope CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{AnalyzeArgs, Cli, Commands, RenderArgs};
pub use commands::analyze::run_analyze;
pub use commands::render::run_render;
pub use error::{CliErrorContext, CliResult};
