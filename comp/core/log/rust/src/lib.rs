// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Minimal `log` backend shared by the roster binaries.
//!
//! `info`, `debug` and `trace` records go to stdout; `warn` and `error` go to
//! stderr. Every line is prefixed with an RFC 3339 UTC timestamp, the level and
//! the record target.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Self {
            level: level.to_level_filter(),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(OffsetDateTime::now_utc(), record);
        // A closed pipe must never take the process down.
        let _ = if record.level() <= Level::Warn {
            writeln!(std::io::stderr().lock(), "{line}")
        } else {
            writeln!(std::io::stdout().lock(), "{line}")
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

/// Install the logger as the global `log` backend at `level`.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(level)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

/// Parse a level name the way operators write it in config files.
/// Unknown names fall back to `info`.
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "warn" | "warning" => Level::Warn,
        "error" | "critical" => Level::Error,
        _ => Level::Info,
    }
}

fn format_line(now: OffsetDateTime, record: &Record) -> String {
    let ts = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    format!(
        "{ts} {:<5} {}: {}",
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use time::macros::datetime;

    #[test]
    fn test_format_line_layout() {
        let now = datetime!(2026-03-01 12:30:45 UTC);
        let line = format_line(
            now,
            &Record::builder()
                .args(format_args!("listening on {}", "0.0.0.0:3001"))
                .level(Level::Info)
                .target("roster_directoryd")
                .build(),
        );
        assert_eq!(
            line,
            "2026-03-01T12:30:45Z INFO  roster_directoryd: listening on 0.0.0.0:3001"
        );
    }

    #[test]
    fn test_format_line_pads_level() {
        let re = Regex::new(r"^\S+Z (WARN |ERROR|DEBUG|TRACE|INFO ) t: m$").unwrap();
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            let line = format_line(
                OffsetDateTime::UNIX_EPOCH,
                &Record::builder()
                    .args(format_args!("m"))
                    .level(level)
                    .target("t")
                    .build(),
            );
            assert!(re.is_match(&line), "unexpected line: {line}");
        }
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = Logger::new(Level::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::Debug);
        assert_eq!(parse_level(" warning "), Level::Warn);
        assert_eq!(parse_level("critical"), Level::Error);
        assert_eq!(parse_level("trace"), Level::Trace);
        assert_eq!(parse_level("nonsense"), Level::Info);
        assert_eq!(parse_level(""), Level::Info);
    }
}
