use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;

use ::log::{LevelFilter, Log, Metadata, Record};

use crate::ReprResult;

/// Environment variable read by [`init_from_env`].
///
/// Takes a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
/// When unset or unrecognised the level is `warn`.
pub const LOG_ENV: &str = "TENSOR_REPR_LOG";

/// Minimal stderr logger for binaries and tests that have no logger of their own.
pub struct ReprLogger {
    level: LevelFilter,
}

impl Log for ReprLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) => format!("{}:{}", file, line),
            (Some(file), None) => file.to_string(),
            (None, _) => String::from("unknown location"),
        };

        // A failed write to stderr has nowhere better to go.
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{level}][{target}][{location}] {message}",
            level = record.level(),
            target = record.target(),
            location = location,
            message = record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs [`ReprLogger`] as the global logger at `level`.
///
/// Fails if any logger has already been installed in this process.
pub fn init(level: LevelFilter) -> ReprResult<()> {
    static LOGGER: OnceLock<ReprLogger> = OnceLock::new();

    let logger = LOGGER.get_or_init(|| ReprLogger { level });
    ::log::set_logger(logger)?;
    ::log::set_max_level(logger.level);
    Ok(())
}

/// Like [`init`], with the level taken from `TENSOR_REPR_LOG`.
pub fn init_from_env() -> ReprResult<()> {
    init(env_level())
}

/// Current level requested through `TENSOR_REPR_LOG`.
fn env_level() -> LevelFilter {
    level_from_env(std::env::var(LOG_ENV).ok().as_deref())
}

/// Parses a level name, falling back to `warn` when unset or unknown.
fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, DType, ReprError};

    #[test]
    fn test_level_from_env() {
        assert_eq!(level_from_env(None), LevelFilter::Warn);
        assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_env(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_from_env(Some("chatty")), LevelFilter::Warn);
    }

    #[test]
    fn test_env_level_reads_variable() {
        std::env::set_var(LOG_ENV, "debug");
        assert_eq!(env_level(), LevelFilter::Debug);

        std::env::set_var(LOG_ENV, "nonsense");
        assert_eq!(env_level(), LevelFilter::Warn);

        std::env::remove_var(LOG_ENV);
        assert_eq!(env_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = ReprLogger {
            level: LevelFilter::Info,
        };
        let info = Metadata::builder().level(::log::Level::Info).build();
        let trace = Metadata::builder().level(::log::Level::Trace).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&trace));
    }

    #[test]
    fn test_init_installs_once() -> ReprResult<()> {
        // Other tests may race to install; either this call or a later one fails.
        let first = init(LevelFilter::Trace);
        let second = init(LevelFilter::Trace);
        assert!(first.is_err() || second.is_err());

        // The install failure is a proper error with its cause attached.
        let err = second.err().or(first.err()).expect("one install must fail");
        assert!(matches!(err, ReprError::LoggerError(_)));
        let err: &dyn std::error::Error = &err;
        assert!(err.source().is_some());

        // Rendering with a live logger still produces output.
        let data: Vec<f64> = (0..30).map(|v| v as f64).collect();
        let out = render(&data, &[30], DType::Int32, false)?;
        assert!(out.contains("..."));
        Ok(())
    }
}
