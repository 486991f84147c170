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

//! Enumerations for the unit families and their units.
//!
//! Each unit enum is ordered by ordinal: the discriminant is the unit's position on its
//! family's conversion ladder, with the finest unit at ordinal zero.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, FromRepr};

/// The closed set of measurable unit families.
///
/// The family tag is the qualifier used in the `<unit>@<family>` form. Tags written by
/// earlier producers as fully qualified class names are accepted on parse.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum UnitFamily {
    /// Piece counts (pieces and dozens).
    #[strum(to_string = "Piece", serialize = "org.openwms.core.units.api.Piece")]
    Piece = 1,
    /// Weights (milligram to metric ton).
    #[strum(to_string = "Weight", serialize = "org.openwms.core.units.api.Weight")]
    Weight = 2,
    /// Metric lengths (millimeter to meter).
    #[strum(
        to_string = "MetricDimension",
        serialize = "org.openwms.core.units.api.MetricDimension"
    )]
    MetricDimension = 3,
}

/// Units of the piece family.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum PieceUnit {
    /// A single piece.
    PC = 0,
    /// A dozen pieces.
    DOZ = 1,
}

/// Units of the weight family.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum WeightUnit {
    /// Milligram.
    MG = 0,
    /// Gram.
    G = 1,
    /// Kilogram.
    KG = 2,
    /// Metric ton.
    T = 3,
}

/// Units of the metric length family.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum MetricDimensionUnit {
    /// Millimeter.
    MM = 0,
    /// Centimeter.
    CM = 1,
    /// Decimeter.
    DM = 2,
    /// Meter.
    M = 3,
}
