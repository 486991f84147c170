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

//! The piece family: single pieces and dozens.
//!
//! Converting pieces to dozens truncates toward zero, so `50 PC` becomes `4 DOZ` and the
//! remaining two pieces are discarded. Converting dozens to pieces is always exact.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MeasureUnit, UnitAny};
use crate::enums::{PieceUnit, UnitFamily};

impl PieceUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PC => "PC",
            Self::DOZ => "DOZ",
        }
    }

    /// Returns the position of the unit on the piece ladder.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl MeasureUnit for PieceUnit {
    const FAMILY: UnitFamily = UnitFamily::Piece;
    const ALL: &'static [Self] = &[Self::PC, Self::DOZ];
    const BASE: Self = Self::PC;
    const STEP_RATIO: Decimal = dec!(12);
    const TRUNCATES: bool = true;

    fn ordinal(self) -> u8 {
        Self::ordinal(self)
    }

    fn symbol(self) -> &'static str {
        Self::symbol(self)
    }

    fn into_any(self) -> UnitAny {
        UnitAny::Piece(self)
    }

    fn from_any(unit: UnitAny) -> Option<Self> {
        match unit {
            UnitAny::Piece(unit) => Some(unit),
            _ => None,
        }
    }

    /// Mixed-unit results always collapse to single pieces.
    fn combined_unit(a: Self, b: Self) -> Self {
        if a == b { a } else { Self::PC }
    }
}
