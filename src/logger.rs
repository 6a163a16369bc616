//! Process-wide logging setup on top of `log4rs`.
//!
//! The library itself only emits through the `log` facade. Command dispatch is
//! logged under the `nexus_model::command` target, which gets its own file.

use log::LevelFilter;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};

use crate::errors::DbError;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;

/// Parses `error|warn|info|debug|trace`; anything else maps to `info`.
#[must_use]
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

fn rolling_appender(base: &Path, name: &str, keep: u32) -> Result<RollingFileAppender, DbError> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", base.join(format!("{name}.{{}}.log")).display()), keep)
        .map_err(|e| DbError::Config(format!("log roller for {name}: {e}")))?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    Ok(RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(base.join(format!("{name}.log")), Box::new(policy))?)
}

/// Builds the log4rs configuration writing `app.log` and `command.log` under `dir`.
///
/// # Errors
/// Returns an error if the directory cannot be created or an appender cannot be built.
pub fn build_config(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<Config, DbError> {
    let base = dir.map_or_else(
        || std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        PathBuf::from,
    );
    std::fs::create_dir_all(&base)?;
    let keep = u32::try_from(retention.unwrap_or(7)).unwrap_or(u32::MAX);
    let lvl = parse_level(level);
    let app = rolling_appender(&base, "app", keep)?;
    let command = rolling_appender(&base, "command", keep)?;
    Config::builder()
        .appender(Appender::builder().build("app", Box::new(app)))
        .appender(Appender::builder().build("command", Box::new(command)))
        .logger(
            Logger::builder()
                .appender("command")
                .additive(false)
                .build("nexus_model::command", lvl),
        )
        .build(Root::builder().appender("app").build(lvl))
        .map_err(|e| DbError::Config(format!("log config: {e}")))
}

/// Configure logging globally for the process.
/// - dir: base directory for logs; if None, current directory.
/// - level: error|warn|info|debug|trace
/// - retention: number of rolled files to keep (default 7)
///
/// A second call keeps the logger installed by the first one.
///
/// # Errors
/// Returns an error if the configuration cannot be built.
pub fn configure_logging(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<(), DbError> {
    let config = build_config(dir, level, retention)?;
    if let Err(e) = log4rs::init_config(config) {
        log::debug!("logger already installed: {e}");
    }
    Ok(())
}

/// Configure logging from environment variables if present:
/// - NEXUS_MODEL_LOG_DIR
/// - NEXUS_MODEL_LOG_LEVEL
/// - NEXUS_MODEL_LOG_RETENTION
///
/// # Errors
/// Returns an error if the configuration cannot be built.
pub fn configure_from_env() -> Result<(), DbError> {
    let dir = std::env::var("NEXUS_MODEL_LOG_DIR").ok().map(PathBuf::from);
    let level = std::env::var("NEXUS_MODEL_LOG_LEVEL").ok();
    let retention =
        std::env::var("NEXUS_MODEL_LOG_RETENTION").ok().and_then(|s| s.parse::<usize>().ok());
    configure_logging(dir.as_deref(), level.as_deref(), retention)
}
