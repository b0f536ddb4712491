//! log4rs setup for console and file logging.

pub mod setup;

pub use setup::{build_logging_config, setup_logging};
