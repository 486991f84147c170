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

//! The logging framework for measura.
//!
//! All crates log through the [`log`] facade. This module provides the backend: a synchronous
//! stdout [`Logger`](logger::Logger) configured from a [`LoggerConfig`] spec string.
//!
//! Logging is initialized at most once per process. Libraries that only need "some" logger
//! call [`ensure_logging_initialized`], which reads the `MEASURA_LOG` environment variable and
//! falls back to the default configuration.

pub mod config;
pub mod logger;

use std::{
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::LevelFilter;

// Re-exports
pub use self::config::{LoggerConfig, MEASURA_LOG};
use self::logger::Logger;

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LAZY_INIT: OnceLock<bool> = OnceLock::new();

/// Returns whether the logger is installed.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Ensures logging is initialized on first use.
///
/// If `MEASURA_LOG` is set and valid, initializes the logger with that config. Otherwise,
/// initializes with INFO level to stdout.
///
/// Returns `true` if logging is available (either already initialized or successfully
/// lazy-initialized), `false` otherwise, e.g. when another `log` backend was installed first.
pub fn ensure_logging_initialized() -> bool {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return true;
    }

    LAZY_INIT.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_default();

        init_logging(config).is_ok()
    });

    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Initialize logging.
///
/// Should only be called once during an application's run, ideally at the beginning of the
/// run.
///
/// # Errors
///
/// Returns an error if the logging subsystem fails to initialize.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    Logger::init_with_config(config)
}

/// Parses a string into a [`LevelFilter`].
///
/// Matching is case-insensitive and `WARNING` is accepted as an alias for `WARN`.
///
/// # Errors
///
/// Returns an error if the provided string is not a valid `LevelFilter`.
pub fn parse_level_filter_str(s: &str) -> anyhow::Result<LevelFilter> {
    let mut log_level_str = s.to_uppercase();
    if log_level_str == "WARNING" {
        log_level_str = "WARN".to_string();
    }
    LevelFilter::from_str(&log_level_str)
        .map_err(|_| anyhow::anyhow!("Invalid log level string: '{s}'"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("DEBUG", LevelFilter::Debug)]
    #[case("debug", LevelFilter::Debug)]
    #[case("DeBuG", LevelFilter::Debug)]
    #[case("INFO", LevelFilter::Info)]
    #[case("WARNING", LevelFilter::Warn)]
    #[case("warning", LevelFilter::Warn)]
    #[case("warn", LevelFilter::Warn)]
    #[case("ERROR", LevelFilter::Error)]
    #[case("off", LevelFilter::Off)]
    #[case("trace", LevelFilter::Trace)]
    fn test_parse_level_filter_str_case_insensitive(
        #[case] input: &str,
        #[case] expected: LevelFilter,
    ) {
        let result = parse_level_filter_str(input).unwrap();
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("INVALID")]
    #[case("DEBG")]
    #[case("WARNINGG")]
    #[case("")]
    fn test_parse_level_filter_str_invalid_returns_error(#[case] invalid_input: &str) {
        let result = parse_level_filter_str(invalid_input);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log level")
        );
    }

    #[rstest]
    fn test_ensure_logging_initialized_is_idempotent() {
        let first_call = ensure_logging_initialized();
        let second_call = ensure_logging_initialized();

        assert_eq!(first_call, second_call);
        assert_eq!(first_call, logging_is_initialized());
    }
}
