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

//! Error type for unit resolution, parsing and arithmetic.

use thiserror::Error;

/// Errors raised by the unit conversion and arithmetic engine.
///
/// Every fallible operation either returns a fully valid value or one of these errors;
/// no partially constructed values are ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// The unit name is not recognized by any registered family.
    #[error("Unit type not supported [{0}]")]
    UnsupportedUnit(String),
    /// The family tag is unknown, or an operation mixed values of different families.
    #[error("Incompatible type: [{0}]")]
    IncompatibleType(String),
    /// The amount is not a well-formed decimal number.
    #[error("The amount is not a number: [{0}]")]
    InvalidAmount(String),
    /// The text form does not split into exactly two tokens.
    #[error("Not a valid measurable string: [{0}]")]
    MalformedInput(String),
    /// The result magnitude does not fit the decimal range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
    /// The converted magnitude needs more digits than a decimal can hold.
    #[error("Conversion loses precision: {0}")]
    PrecisionLoss(String),
}
