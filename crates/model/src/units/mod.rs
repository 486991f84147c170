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

//! Unit families and the conversion ladder shared by every family.
//!
//! A unit family is a closed, ordered set of units. Consecutive units on the ladder differ by a
//! fixed per-step ratio, so converting between any two units of a family is a matter of walking
//! the ordinal difference:
//!
//! - Towards a **finer** unit (lower ordinal) the magnitude is multiplied by the ratio per step,
//!   which is always exact.
//! - Towards a **coarser** unit (higher ordinal) the magnitude is divided by the ratio per step.
//!   Power-of-ten families divide exactly; the piece family truncates toward zero.
//!
//! | Family            | Units               | Step ratio | Base unit |
//! |-------------------|---------------------|------------|-----------|
//! | `Piece`           | `PC`, `DOZ`         | 12         | `PC`      |
//! | `Weight`          | `MG`, `G`, `KG`, `T`| 1000       | `G`       |
//! | `MetricDimension` | `MM`, `CM`, `DM`, `M`| 10        | `M`       |
//!
//! All arithmetic is carried out on [`Decimal`] values, never on binary floating point.

pub mod metric;
pub mod piece;
pub mod weight;

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::EnumCount;

use crate::{
    enums::{MetricDimensionUnit, PieceUnit, UnitFamily, WeightUnit},
    error::UnitsError,
};

/// The separator between a unit symbol and its family tag in the qualified form.
pub const QUALIFIER_SEPARATOR: char = '@';

/// A unit belonging to exactly one closed unit family.
///
/// Implementors are fieldless enums whose ordinal encodes the unit's position on the family
/// ladder (finest unit at ordinal zero).
pub trait MeasureUnit:
    Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// The family this unit belongs to.
    const FAMILY: UnitFamily;
    /// All units of the family in ladder order.
    const ALL: &'static [Self];
    /// The unit used when a value is constructed without an explicit unit.
    const BASE: Self;
    /// The ratio between two consecutive units on the ladder.
    const STEP_RATIO: Decimal;
    /// Whether converting to a coarser unit truncates the quotient toward zero.
    const TRUNCATES: bool;

    /// Returns the position of the unit on its family ladder.
    fn ordinal(self) -> u8;

    /// Returns the unit symbol, e.g. `"KG"`.
    fn symbol(self) -> &'static str;

    /// Returns the unit wrapped in the family-erased [`UnitAny`].
    fn into_any(self) -> UnitAny;

    /// Returns the unit if `unit` belongs to this family.
    fn from_any(unit: UnitAny) -> Option<Self>;

    /// Returns the unit to use for the result of adding or subtracting values expressed in
    /// `a` and `b`.
    ///
    /// The default is the finer of the two units.
    #[must_use]
    fn combined_unit(a: Self, b: Self) -> Self {
        finer(a, b)
    }

    /// Returns the finest unit of the family.
    #[must_use]
    fn finest() -> Self {
        Self::ALL[0]
    }

    /// Returns the base unit of the family.
    #[must_use]
    fn base_unit() -> Self {
        Self::BASE
    }

    /// Returns all units of the family in ladder order.
    #[must_use]
    fn all() -> &'static [Self] {
        Self::ALL
    }

    #[must_use]
    fn step_ratio() -> Decimal {
        Self::STEP_RATIO
    }

    /// Returns the unit with the given symbol, if it belongs to this family.
    #[must_use]
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.symbol() == symbol)
    }

    /// Returns the multiplier converting one of this unit into the family's base unit.
    #[must_use]
    fn scale_factor(self) -> Decimal {
        let ordinal = self.ordinal();
        let base = Self::BASE.ordinal();
        if ordinal >= base {
            ladder_factor::<Self>(ordinal - base)
        } else {
            Decimal::ONE / ladder_factor::<Self>(base - ordinal)
        }
    }
}

/// Returns the finer (lower ordinal) of two units.
#[must_use]
pub fn finer<U: MeasureUnit>(a: U, b: U) -> U {
    if a.ordinal() <= b.ordinal() { a } else { b }
}

/// Returns the multiplier spanning `steps` consecutive units of the family.
#[must_use]
pub fn ladder_factor<U: MeasureUnit>(steps: u8) -> Decimal {
    (0..steps).fold(Decimal::ONE, |acc, _| acc * U::STEP_RATIO)
}

/// Re-expresses `magnitude` from unit `from` in unit `to` of the same family.
///
/// When `truncate` is set, division towards a coarser unit truncates toward zero. Callers pass
/// [`MeasureUnit::TRUNCATES`] for user-visible conversions.
///
/// Without `truncate` the result is exact: a quotient needing more digits than a decimal holds
/// is rejected rather than rounded.
///
/// # Errors
///
/// Returns an error if:
/// - The rescaled magnitude overflows the decimal range.
/// - The quotient cannot be represented exactly and `truncate` is not set.
pub fn rescale<U: MeasureUnit>(
    magnitude: Decimal,
    from: U,
    to: U,
    truncate: bool,
) -> Result<Decimal, UnitsError> {
    let (from_ordinal, to_ordinal) = (from.ordinal(), to.ordinal());

    if from_ordinal == to_ordinal {
        return Ok(magnitude);
    }

    if from_ordinal > to_ordinal {
        let factor = ladder_factor::<U>(from_ordinal - to_ordinal);
        return magnitude
            .checked_mul(factor)
            .ok_or_else(|| overflow_error(magnitude, from, to));
    }

    let factor = ladder_factor::<U>(to_ordinal - from_ordinal);
    let quotient = magnitude
        .checked_div(factor)
        .ok_or_else(|| overflow_error(magnitude, from, to))?;

    if !truncate {
        if quotient.checked_mul(factor) != Some(magnitude) {
            return Err(precision_error(magnitude, from, to));
        }
        return Ok(quotient);
    }

    // The quotient is rounded to the decimal precision, which may carry it across an integer
    let mut truncated = quotient.trunc();
    let exceeds = |value: Decimal| {
        value
            .checked_mul(factor)
            .is_none_or(|scaled| scaled.abs() > magnitude.abs())
    };
    if !truncated.is_zero() && exceeds(truncated) {
        truncated -= truncated.signum();
    }
    if truncated.checked_mul(factor) != Some(magnitude) {
        log::trace!("Discarded remainder converting {magnitude} {from} to {to}");
    }
    Ok(truncated)
}

/// Returns the error for a symbol which is not a unit of `family`.
///
/// A symbol owned by another family is an [`UnitsError::IncompatibleType`], an unknown symbol
/// is an [`UnitsError::UnsupportedUnit`].
pub(crate) fn foreign_unit_error(family: UnitFamily, symbol: &str) -> UnitsError {
    match crate::registry::resolve(symbol) {
        Ok(unit) => UnitsError::IncompatibleType(format!(
            "{} is a {} unit, expected {family}",
            unit.symbol(),
            unit.family()
        )),
        Err(e) => e,
    }
}

#[cold]
fn precision_error<U: MeasureUnit>(magnitude: Decimal, from: U, to: U) -> UnitsError {
    UnitsError::PrecisionLoss(format!("converting {magnitude} {from} to {to}"))
}

#[cold]
fn overflow_error<U: MeasureUnit>(magnitude: Decimal, from: U, to: U) -> UnitsError {
    UnitsError::Overflow(format!("converting {magnitude} {from} to {to}"))
}

/// A unit of any family.
///
/// This is the closed tagged union used wherever the family is only known at runtime, such as
/// when resolving a unit name read from text or storage.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnitAny {
    Piece(PieceUnit),
    Weight(WeightUnit),
    MetricDimension(MetricDimensionUnit),
}

impl UnitAny {
    /// Returns the family of the unit.
    #[must_use]
    pub const fn family(&self) -> UnitFamily {
        match self {
            Self::Piece(_) => UnitFamily::Piece,
            Self::Weight(_) => UnitFamily::Weight,
            Self::MetricDimension(_) => UnitFamily::MetricDimension,
        }
    }

    /// Returns the unit symbol, e.g. `"KG"`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match *self {
            Self::Piece(unit) => unit.symbol(),
            Self::Weight(unit) => unit.symbol(),
            Self::MetricDimension(unit) => unit.symbol(),
        }
    }

    /// Returns the position of the unit on its family ladder.
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        match *self {
            Self::Piece(unit) => unit.ordinal(),
            Self::Weight(unit) => unit.ordinal(),
            Self::MetricDimension(unit) => unit.ordinal(),
        }
    }

    /// Returns the multiplier converting one of this unit into its family's base unit.
    #[must_use]
    pub fn scale_factor(&self) -> Decimal {
        match self {
            Self::Piece(unit) => unit.scale_factor(),
            Self::Weight(unit) => unit.scale_factor(),
            Self::MetricDimension(unit) => unit.scale_factor(),
        }
    }

    /// Returns the qualified form `<symbol>@<family>`, e.g. `"KG@Weight"`.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}{QUALIFIER_SEPARATOR}{}", self.symbol(), self.family())
    }
}

impl Display for UnitAny {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for UnitAny {
    type Err = UnitsError;

    /// Parses either a bare symbol (`"KG"`) or a qualified tag (`"KG@Weight"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(QUALIFIER_SEPARATOR) {
            crate::registry::parse_unit_tag(s)
        } else {
            crate::registry::resolve(s)
        }
    }
}

impl From<PieceUnit> for UnitAny {
    fn from(value: PieceUnit) -> Self {
        Self::Piece(value)
    }
}

impl From<WeightUnit> for UnitAny {
    fn from(value: WeightUnit) -> Self {
        Self::Weight(value)
    }
}

impl From<MetricDimensionUnit> for UnitAny {
    fn from(value: MetricDimensionUnit) -> Self {
        Self::MetricDimension(value)
    }
}

impl Serialize for UnitAny {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.qualified())
    }
}

impl<'de> Deserialize<'de> for UnitAny {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

// -----------------------------------------------------------------------------
// Symbol uniqueness
// -----------------------------------------------------------------------------

const SYMBOL_COUNT: usize = PieceUnit::COUNT + WeightUnit::COUNT + MetricDimensionUnit::COUNT;

/// Every unit symbol of every family, in registry scan order.
pub const ALL_SYMBOLS: [&str; SYMBOL_COUNT] = [
    PieceUnit::PC.symbol(),
    PieceUnit::DOZ.symbol(),
    WeightUnit::MG.symbol(),
    WeightUnit::G.symbol(),
    WeightUnit::KG.symbol(),
    WeightUnit::T.symbol(),
    MetricDimensionUnit::MM.symbol(),
    MetricDimensionUnit::CM.symbol(),
    MetricDimensionUnit::DM.symbol(),
    MetricDimensionUnit::M.symbol(),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn symbols_are_unique(symbols: &[&str]) -> bool {
    let mut i = 0;
    while i < symbols.len() {
        let mut j = i + 1;
        while j < symbols.len() {
            if str_eq(symbols[i], symbols[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

// Lookup by bare symbol is only unambiguous while no two families share a symbol.
const _: () = assert!(
    symbols_are_unique(&ALL_SYMBOLS),
    "unit symbols must be unique across all families"
);

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn test_symbol_uniqueness_check() {
        assert!(symbols_are_unique(&["PC", "DOZ", "KG"]));
        assert!(!symbols_are_unique(&["PC", "KG", "PC"]));
        assert!(symbols_are_unique(&ALL_SYMBOLS));
    }

    #[rstest]
    fn test_symbols_match_display() {
        let units = [
            UnitAny::Piece(PieceUnit::PC),
            UnitAny::Piece(PieceUnit::DOZ),
            UnitAny::Weight(WeightUnit::MG),
            UnitAny::Weight(WeightUnit::G),
            UnitAny::Weight(WeightUnit::KG),
            UnitAny::Weight(WeightUnit::T),
            UnitAny::MetricDimension(MetricDimensionUnit::MM),
            UnitAny::MetricDimension(MetricDimensionUnit::CM),
            UnitAny::MetricDimension(MetricDimensionUnit::DM),
            UnitAny::MetricDimension(MetricDimensionUnit::M),
        ];
        for (unit, symbol) in units.iter().zip(ALL_SYMBOLS) {
            assert_eq!(unit.symbol(), symbol);
            assert_eq!(unit.to_string(), symbol);
        }
    }

    #[rstest]
    #[case(UnitAny::Weight(WeightUnit::KG), "KG@Weight")]
    #[case(UnitAny::Piece(PieceUnit::DOZ), "DOZ@Piece")]
    #[case(UnitAny::MetricDimension(MetricDimensionUnit::CM), "CM@MetricDimension")]
    fn test_qualified(#[case] unit: UnitAny, #[case] expected: &str) {
        assert_eq!(unit.qualified(), expected);
    }

    #[rstest]
    #[case("KG", UnitAny::Weight(WeightUnit::KG))]
    #[case("KG@Weight", UnitAny::Weight(WeightUnit::KG))]
    #[case("DOZ", UnitAny::Piece(PieceUnit::DOZ))]
    #[case("M@org.openwms.core.units.api.MetricDimension", UnitAny::MetricDimension(MetricDimensionUnit::M))]
    fn test_unit_any_from_str(#[case] input: &str, #[case] expected: UnitAny) {
        assert_eq!(input.parse::<UnitAny>().unwrap(), expected);
    }

    #[rstest]
    fn test_unit_any_serde() {
        let unit = UnitAny::Weight(WeightUnit::T);
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"T@Weight\"");
        let deserialized: UnitAny = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, unit);
    }

    #[rstest]
    #[case(0, dec!(1))]
    #[case(1, dec!(1000))]
    #[case(3, dec!(1000000000))]
    fn test_ladder_factor(#[case] steps: u8, #[case] expected: Decimal) {
        assert_eq!(ladder_factor::<WeightUnit>(steps), expected);
    }

    #[rstest]
    fn test_finer() {
        assert_eq!(finer(WeightUnit::KG, WeightUnit::G), WeightUnit::G);
        assert_eq!(finer(WeightUnit::G, WeightUnit::KG), WeightUnit::G);
        assert_eq!(finer(PieceUnit::DOZ, PieceUnit::DOZ), PieceUnit::DOZ);
    }

    #[rstest]
    fn test_rescale_same_unit_is_identity() {
        let magnitude = dec!(1.50);
        let result = rescale(magnitude, WeightUnit::KG, WeightUnit::KG, true).unwrap();
        assert_eq!(result.to_string(), "1.50");
    }

    #[rstest]
    fn test_rescale_overflow() {
        let result = rescale(Decimal::MAX, WeightUnit::T, WeightUnit::MG, false);
        assert!(matches!(result, Err(UnitsError::Overflow(_))));
    }

    #[rstest]
    fn test_rescale_truncation_is_toward_zero() {
        assert_eq!(
            rescale(dec!(50), PieceUnit::PC, PieceUnit::DOZ, true).unwrap(),
            dec!(4)
        );
        assert_eq!(
            rescale(dec!(-50), PieceUnit::PC, PieceUnit::DOZ, true).unwrap(),
            dec!(-4)
        );
    }

    #[rstest]
    fn test_rescale_truncation_near_integer_boundary() {
        let magnitude = dec!(47.999999999999999999999999999);
        assert_eq!(
            rescale(magnitude, PieceUnit::PC, PieceUnit::DOZ, true).unwrap(),
            dec!(3)
        );
        assert_eq!(
            rescale(-magnitude, PieceUnit::PC, PieceUnit::DOZ, true).unwrap(),
            dec!(-3)
        );
    }

    #[rstest]
    #[case(dec!(1500), WeightUnit::G, WeightUnit::KG, dec!(1.5))]
    #[case(dec!(1), WeightUnit::MG, WeightUnit::T, dec!(0.000000001))]
    #[case(dec!(-2.5), WeightUnit::KG, WeightUnit::T, dec!(-0.0025))]
    fn test_rescale_exact_quotient(
        #[case] magnitude: Decimal,
        #[case] from: WeightUnit,
        #[case] to: WeightUnit,
        #[case] expected: Decimal,
    ) {
        assert_eq!(rescale(magnitude, from, to, false).unwrap(), expected);
    }

    #[rstest]
    fn test_rescale_rejects_rounded_quotient() {
        let result = rescale(
            dec!(1.0000000000000000000000000001),
            WeightUnit::KG,
            WeightUnit::T,
            false,
        );
        assert!(matches!(result, Err(UnitsError::PrecisionLoss(_))));

        let result = rescale(
            dec!(0.0000000000000000000001),
            WeightUnit::MG,
            WeightUnit::T,
            false,
        );
        assert!(matches!(result, Err(UnitsError::PrecisionLoss(_))));
    }
}
