use crate::CliError;
use log::{debug, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use log4rs::{Config, Handle};
use std::path::PathBuf;

/// Sends records at `level` and above to stderr unless `quiet`, and every
/// record to `log_fp` when one is given.
pub fn init_logging(
    log_fp: Option<&PathBuf>,
    quiet: bool,
    level: LevelFilter,
) -> Result<Handle, CliError> {
    let console_encoder = Box::new(PatternEncoder::new("{h(>)} {m}{n}"));
    let stderr = ConsoleAppender::builder()
        .encoder(console_encoder)
        .target(Target::Stderr)
        .build();

    let mut config = Config::builder();
    let mut root = Root::builder();
    if let Some(fp) = log_fp {
        let file_encoder = Box::new(PatternEncoder::new(
            "[{f}::{L}][{d(%Y-%m-%d %H:%M:%S)}][{l}] {m}{n}",
        ));
        let logfile = FileAppender::builder().encoder(file_encoder).build(fp)?;
        config = config.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }
    if !quiet {
        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        );
        root = root.appender("stderr");
    }

    let config = config
        .build(root.build(LevelFilter::Trace))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let handle = log4rs::init_config(config).map_err(|e| CliError::Logging(e.to_string()))?;
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");
    debug!("command line: {command_line}");
    Ok(handle)
}
