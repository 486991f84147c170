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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! A condition is a predicate which must be true just prior to the execution of some section
//! of code for correct behavior.
//!
//! Each check returns an [`anyhow::Result`]; callers which cannot recover use
//! `.expect(FAILED)` so every panic carries the same prefix.

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` is not empty and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is empty or all whitespace.
/// - `s` contains a non-ASCII character.
#[inline(always)]
pub fn check_valid_string_ascii<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }

    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace");
    }

    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'");
    }

    Ok(())
}

/// Checks the length of `s` does not exceed `max_len` bytes.
///
/// # Errors
///
/// Returns an error if `s` is longer than `max_len`.
#[inline(always)]
pub fn check_string_max_len<T: AsRef<str>>(s: T, max_len: usize, param: &str) -> anyhow::Result<()> {
    let len = s.as_ref().len();
    if len > max_len {
        anyhow::bail!("invalid string for '{param}', length {len} exceeds maximum {max_len}");
    }
    Ok(())
}
