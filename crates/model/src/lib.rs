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

//! Typed units of measure for the measura crates.
//!
//! The `measura-model` crate models physical quantities as immutable values carrying a decimal
//! magnitude and a unit drawn from a closed family:
//!
//! | Family            | Units                 | Alias                              |
//! |-------------------|-----------------------|------------------------------------|
//! | `Piece`           | `PC`, `DOZ`           | [`Piece`](types::Piece)            |
//! | `Weight`          | `MG`, `G`, `KG`, `T`  | [`Weight`](types::Weight)          |
//! | `MetricDimension` | `MM`, `CM`, `DM`, `M` | [`MetricDimension`](types::MetricDimension) |
//!
//! Values convert, compare and combine across units of the same family. Untyped input (text,
//! stored rows) is turned into typed values through the [`registry`].
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod enums;
pub mod error;
pub mod registry;
pub mod row;
pub mod text;
pub mod types;
pub mod units;

// Re-exports
pub use crate::{
    enums::{MetricDimensionUnit, PieceUnit, UnitFamily, WeightUnit},
    error::UnitsError,
    row::MeasurableRow,
    text::MeasurableString,
    types::{Measurable, MeasurableAny, Measure, MetricDimension, Piece, Weight},
    units::{MeasureUnit, UnitAny},
};
