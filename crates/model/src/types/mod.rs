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

//! Value types for measurable quantities.
//!
//! This module provides the immutable [`Measure`] value, its per-family aliases [`Piece`],
//! [`Weight`] and [`MetricDimension`], and the family-erased [`MeasurableAny`].
//!
//! # Immutability
//!
//! All value types are **immutable**. Conversion and arithmetic return new instances rather
//! than modifying existing ones, so values may be shared freely between threads.
//!
//! # Arithmetic operations
//!
//! Value types implement `Add`, `Sub` and `Neg` for same-family operations. When the operands
//! are expressed in different units the result unit is chosen per family:
//!
//! | Operation                   | Result unit | Notes                                      |
//! |-----------------------------|-------------|--------------------------------------------|
//! | `Weight + Weight`           | finer unit  | `1 T + 1 KG` is `1001 KG`.                 |
//! | `MetricDimension ± ...`     | finer unit  | `1 M + 5 DM` is `15 DM`.                   |
//! | `Piece + Piece`             | `PC`        | Mixed units always collapse to pieces.     |
//! | `MeasurableAny + ...`       | per family  | Fails if the families differ.              |
//!
//! The operator traits panic on overflow; use the `checked_*` methods to handle it.
//!
//! # Equality
//!
//! Equality, ordering and hashing compare the real quantity, so `4 DOZ == 48 PC`. Comparison
//! lifts both operands to the finer unit and never truncates.

pub mod any;
pub mod measure;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

use crate::enums::{MetricDimensionUnit, PieceUnit, WeightUnit};

/// The separator between the amount and the unit symbol in the text form.
pub const SEPARATOR: &str = " ";

/// A count of pieces or dozens.
pub type Piece = Measure<PieceUnit>;

/// A weight from milligrams to metric tons.
pub type Weight = Measure<WeightUnit>;

/// A metric length from millimeters to meters.
pub type MetricDimension = Measure<MetricDimensionUnit>;

// Re-exports
pub use any::MeasurableAny;
pub use measure::{Measurable, Measure};
