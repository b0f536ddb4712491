use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

/// Pattern used for log files.
pub const FILE_LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Pattern used on the console; status lines are already formatted.
pub const CONSOLE_LOG_PATTERN: &str = "{m}{n}";

/// Builds the log4rs configuration: messages always go to stderr, and
/// additionally to `log_file` when one is given.
pub fn build_logging_config(log_level: LevelFilter, log_file: Option<&Path>) -> Result<Config> {
    // Stdout is reserved for the screenplay / report
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_LOG_PATTERN)))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    if let Some(log_file) = log_file {
        // Create log directory if it doesn't exist
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_LOG_PATTERN)))
            .build(log_file)?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file_appender)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(log_level))?)
}

/// Initializes the global logger. Can only succeed once per process.
pub fn setup_logging(log_level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let config = build_logging_config(log_level, log_file)?;
    log4rs::init_config(config)?;
    Ok(())
}
