// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::{fmt::Display, io::Write, sync::atomic::Ordering};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, STATIC_MAX_LEVEL, set_boxed_logger, set_max_level};
use ustr::Ustr;

pub use super::config::LoggerConfig;
use super::LOGGING_INITIALIZED;

/// A synchronous logger writing one line per record to stdout.
///
/// A logger is initialized with a [`LoggerConfig`] setting the stdout level and any
/// per-module overrides. Records are formatted and written on the calling thread.
#[derive(Debug)]
pub struct Logger {
    /// Configuration for logging levels and behavior.
    pub config: LoggerConfig,
    /// Module overrides sorted by descending path length.
    module_filters: Vec<(Ustr, LevelFilter)>,
}

/// Represents a log event which includes a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// The timestamp for the event.
    pub timestamp: DateTime<Utc>,
    /// The log level for the event.
    pub level: Level,
    /// The module path the log event originated from.
    pub target: Ustr,
    /// The log message content.
    pub message: String,
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.target, self.message)
    }
}

impl LogLine {
    /// Returns the plain log line.
    #[must_use]
    pub fn get_string(&self) -> String {
        format!("{} {self}", self.timestamp_iso8601())
    }

    /// Returns the log line with ANSI color codes for the level.
    #[must_use]
    pub fn get_colored(&self) -> String {
        format!(
            "\x1b[1m{}\x1b[0m {}{self}\x1b[0m",
            self.timestamp_iso8601(),
            level_ansi(self.level),
        )
    }

    fn timestamp_iso8601(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}

const fn level_ansi(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[1;31m",
        Level::Warn => "\x1b[1;33m",
        Level::Info => "\x1b[0m",
        Level::Debug => "\x1b[36m",
        Level::Trace => "\x1b[2m",
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        !should_filter_log(
            metadata.target(),
            metadata.level(),
            &self.module_filters,
            self.config.stdout_level,
        )
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: Ustr::from(record.target()),
            message: format!("{}", record.args()),
        };
        let text = if self.config.is_colored {
            line.get_colored()
        } else {
            line.get_string()
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{text}") {
            eprintln!("Error writing log line: {e}");
        }
    }

    fn flush(&self) {
        if let Err(e) = std::io::stdout().flush() {
            eprintln!("Error flushing stdout: {e}");
        }
    }
}

impl Logger {
    /// Creates a new [`Logger`] instance without registering it.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let module_filters = config.sorted_module_filters();
        Self {
            config,
            module_filters,
        }
    }

    /// Initializes the logger with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if another `log` implementation is already registered.
    pub fn init_with_config(config: LoggerConfig) -> anyhow::Result<()> {
        if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
            anyhow::bail!("Logging already initialized");
        }

        let logger = Self::new(config);
        let max_level = logger.max_level();

        if logger.config.print_config {
            println!("STATIC_MAX_LEVEL={STATIC_MAX_LEVEL}");
            println!("Logger initialized with {:?}", logger.config);
        }

        set_boxed_logger(Box::new(logger))?;
        set_max_level(max_level);

        LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Returns the most verbose level any target may log at.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        self.module_filters
            .iter()
            .map(|(_, level)| *level)
            .fold(self.config.stdout_level, Ord::max)
    }
}

/// Determines if a log line should be filtered out.
///
/// Returns `true` if the line should be skipped. The longest module override matching
/// `target` as a prefix applies, otherwise `default_level` does.
///
/// The `module_filters_sorted` slice must be pre-sorted by descending path length so the
/// first `starts_with` match is the longest prefix.
#[must_use]
pub fn should_filter_log(
    target: &str,
    line_level: Level,
    module_filters_sorted: &[(Ustr, LevelFilter)],
    default_level: LevelFilter,
) -> bool {
    let filter_level = module_filters_sorted
        .iter()
        .find(|(path, _)| target.starts_with(path.as_str()))
        .map_or(default_level, |(_, level)| *level);

    line_level > filter_level
}
