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

//! Logging configuration types and parsing.
//!
//! # Spec String Format
//!
//! The `MEASURA_LOG` environment variable uses a semicolon-separated format:
//!
//! ```text
//! stdout=Info;measura_model::registry=Debug;is_colored=false
//! ```
//!
//! ## Supported Keys
//!
//! | Key            | Type      | Description                                  |
//! |----------------|-----------|----------------------------------------------|
//! | `stdout`       | Log level | Maximum level for stdout output.             |
//! | `is_colored`   | Boolean   | Enable ANSI colors (default: true).          |
//! | `print_config` | Boolean   | Print config to stdout at startup.           |
//! | `<module>`     | Log level | Module-specific log level (prefix match).    |
//!
//! ## Log Levels
//!
//! All log levels are case-insensitive: `Off`, `Error`, `Warn` (or `Warning`), `Info`, `Debug`,
//! `Trace`.
//!
//! ## Boolean Values
//!
//! - Bare flag: `is_colored` → true
//! - Explicit: `is_colored=true`, `is_colored=false`, `is_colored=0`, `is_colored=no`

use std::env;

use ahash::AHashMap;
use log::LevelFilter;
use measura_core::correctness::check_valid_string_ascii;
use ustr::Ustr;

use super::parse_level_filter_str;

/// The environment variable holding the logging spec string.
pub const MEASURA_LOG: &str = "MEASURA_LOG";

/// Configuration for the measura logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level for stdout output.
    pub stdout_level: LevelFilter,
    /// Per-module path log level overrides (prefix match).
    pub module_level: AHashMap<Ustr, LevelFilter>,
    /// Use ANSI color codes in output.
    pub is_colored: bool,
    /// Print configuration to stdout at startup.
    pub print_config: bool,
}

impl Default for LoggerConfig {
    /// Creates a new default [`LoggerConfig`] instance.
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            module_level: AHashMap::new(),
            is_colored: true,
            print_config: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a new [`LoggerConfig`] instance.
    #[must_use]
    pub fn new(
        stdout_level: LevelFilter,
        module_level: AHashMap<Ustr, LevelFilter>,
        is_colored: bool,
        print_config: bool,
    ) -> Self {
        Self {
            stdout_level,
            module_level,
            is_colored,
            print_config,
        }
    }

    /// Parses a configuration from a spec string.
    ///
    /// # Format
    ///
    /// Semicolon-separated key-value pairs or bare flags:
    /// ```text
    /// stdout=Info;measura_model=Debug;is_colored
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains invalid syntax, log levels or
    /// non-ASCII module paths.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let Some((k, v)) = kv.split_once('=') else {
                match kv.to_lowercase().as_str() {
                    "is_colored" => config.is_colored = true,
                    "print_config" => config.print_config = true,
                    _ => anyhow::bail!("Invalid spec pair: {kv}"),
                }
                continue;
            };

            let (k, v) = (k.trim(), v.trim());

            match k.to_lowercase().as_str() {
                "is_colored" => config.is_colored = parse_bool_value(v),
                "print_config" => config.print_config = parse_bool_value(v),
                "stdout" => config.stdout_level = parse_level_filter_str(v)?,
                _ => {
                    check_valid_string_ascii(k, "module")?;
                    config.module_level.insert(Ustr::from(k), parse_level_filter_str(v)?);
                }
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `MEASURA_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        let spec = env::var(MEASURA_LOG)?;
        Self::from_spec(&spec)
    }

    /// Returns the module overrides sorted by descending path length.
    ///
    /// The first prefix match in the result is therefore the longest one.
    #[must_use]
    pub fn sorted_module_filters(&self) -> Vec<(Ustr, LevelFilter)> {
        let mut filters: Vec<(Ustr, LevelFilter)> = self
            .module_level
            .iter()
            .map(|(path, level)| (*path, *level))
            .collect();
        filters.sort_by(|(a, _), (b, _)| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
        filters
    }
}

/// Returns `true` unless the value is explicitly "false", "0", or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}
