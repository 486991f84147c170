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

//! Fixtures for measurable values in tests.

use rstest::fixture;

use super::{MetricDimension, Piece, Weight};
use crate::enums::{MetricDimensionUnit, PieceUnit, WeightUnit};

#[fixture]
pub fn piece_30() -> Piece {
    Piece::of(30, PieceUnit::PC)
}

#[fixture]
pub fn piece_50() -> Piece {
    Piece::of(50, PieceUnit::PC)
}

#[fixture]
pub fn dozen_5() -> Piece {
    Piece::of(5, PieceUnit::DOZ)
}

#[fixture]
pub fn gram_1() -> Weight {
    Weight::of(1, WeightUnit::G)
}

#[fixture]
pub fn kg_1() -> Weight {
    Weight::of(1, WeightUnit::KG)
}

#[fixture]
pub fn meter_1() -> MetricDimension {
    MetricDimension::of(1, MetricDimensionUnit::M)
}
