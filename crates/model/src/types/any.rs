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

//! Enum wrapper providing a family-erased view over the concrete measurable values.
//!
//! `MeasurableAny` is used wherever the family is only known at runtime, such as values
//! resolved from text or stored rows. Operations between values of different families fail
//! with [`UnitsError::IncompatibleType`].

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Measurable, MetricDimension, Piece, Weight};
use crate::{
    error::UnitsError,
    registry,
    units::{MeasureUnit, UnitAny},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[enum_dispatch(Measurable)]
pub enum MeasurableAny {
    Piece(Piece),
    Weight(Weight),
    MetricDimension(MetricDimension),
}

impl MeasurableAny {
    /// Creates a new [`MeasurableAny`] of `magnitude` expressed in `unit`.
    #[must_use]
    pub fn of(magnitude: Decimal, unit: UnitAny) -> Self {
        match unit {
            UnitAny::Piece(unit) => Self::Piece(Piece::of(magnitude, unit)),
            UnitAny::Weight(unit) => Self::Weight(Weight::of(magnitude, unit)),
            UnitAny::MetricDimension(unit) => {
                Self::MetricDimension(MetricDimension::of(magnitude, unit))
            }
        }
    }

    /// Re-expresses the value in `unit`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `unit` belongs to another family.
    /// - The converted magnitude overflows the decimal range.
    pub fn checked_convert_to(&self, unit: UnitAny) -> Result<Self, UnitsError> {
        match self {
            Self::Piece(value) => value
                .checked_convert_to(unit_in_family(unit)?)
                .map(Self::Piece),
            Self::Weight(value) => value
                .checked_convert_to(unit_in_family(unit)?)
                .map(Self::Weight),
            Self::MetricDimension(value) => value
                .checked_convert_to(unit_in_family(unit)?)
                .map(Self::MetricDimension),
        }
    }

    /// Adds `other`, which must belong to the same family.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `other` belongs to another family.
    /// - The sum overflows the decimal range.
    pub fn checked_add(&self, other: &Self) -> Result<Self, UnitsError> {
        match (self, other) {
            (Self::Piece(lhs), Self::Piece(rhs)) => lhs.checked_add(rhs).map(Self::Piece),
            (Self::Weight(lhs), Self::Weight(rhs)) => lhs.checked_add(rhs).map(Self::Weight),
            (Self::MetricDimension(lhs), Self::MetricDimension(rhs)) => {
                lhs.checked_add(rhs).map(Self::MetricDimension)
            }
            _ => Err(self.incompatible(other)),
        }
    }

    /// Subtracts `other`, which must belong to the same family.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `other` belongs to another family.
    /// - The difference overflows the decimal range.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, UnitsError> {
        match (self, other) {
            (Self::Piece(lhs), Self::Piece(rhs)) => lhs.checked_sub(rhs).map(Self::Piece),
            (Self::Weight(lhs), Self::Weight(rhs)) => lhs.checked_sub(rhs).map(Self::Weight),
            (Self::MetricDimension(lhs), Self::MetricDimension(rhs)) => {
                lhs.checked_sub(rhs).map(Self::MetricDimension)
            }
            _ => Err(self.incompatible(other)),
        }
    }

    /// Adds `other`, treating an absent value as the identity.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`MeasurableAny::checked_add`].
    pub fn add_or_self(&self, other: Option<&Self>) -> Result<Self, UnitsError> {
        other.map_or(Ok(*self), |other| self.checked_add(other))
    }

    /// Subtracts `other`, treating an absent value as the identity.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`MeasurableAny::checked_sub`].
    pub fn sub_or_self(&self, other: Option<&Self>) -> Result<Self, UnitsError> {
        other.map_or(Ok(*self), |other| self.checked_sub(other))
    }

    /// Compares with `other`, where an absent value sorts below every present value.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` belongs to another family.
    pub fn compare_to(&self, other: Option<&Self>) -> Result<Ordering, UnitsError> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        match (self, other) {
            (Self::Piece(lhs), Self::Piece(rhs)) => Ok(lhs.cmp(rhs)),
            (Self::Weight(lhs), Self::Weight(rhs)) => Ok(lhs.cmp(rhs)),
            (Self::MetricDimension(lhs), Self::MetricDimension(rhs)) => Ok(lhs.cmp(rhs)),
            _ => Err(self.incompatible(other)),
        }
    }

    #[cold]
    fn incompatible(&self, other: &Self) -> UnitsError {
        UnitsError::IncompatibleType(format!(
            "cannot combine {} with {}",
            self.family(),
            other.family()
        ))
    }
}

fn unit_in_family<U: MeasureUnit>(unit: UnitAny) -> Result<U, UnitsError> {
    U::from_any(unit).ok_or_else(|| {
        UnitsError::IncompatibleType(format!(
            "{} is a {} unit, expected {}",
            unit.symbol(),
            unit.family(),
            U::FAMILY
        ))
    })
}

impl PartialOrd for MeasurableAny {
    /// Values of different families are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(Some(other)).ok()
    }
}

impl Display for MeasurableAny {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Piece(value) => write!(f, "{value}"),
            Self::Weight(value) => write!(f, "{value}"),
            Self::MetricDimension(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for MeasurableAny {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::parse_measurable(s)
    }
}

impl Serialize for MeasurableAny {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MeasurableAny {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        enums::{MetricDimensionUnit, PieceUnit, UnitFamily, WeightUnit},
        types::stubs::*,
    };

    #[rstest]
    fn test_from_concrete(kg_1: Weight, piece_30: Piece) {
        let weight = MeasurableAny::from(kg_1);
        let piece: MeasurableAny = piece_30.into();

        assert_eq!(weight.family(), UnitFamily::Weight);
        assert_eq!(piece.family(), UnitFamily::Piece);
        assert_eq!(weight.magnitude(), dec!(1));
        assert_eq!(piece.unit_any(), UnitAny::Piece(PieceUnit::PC));
        assert_eq!(weight.as_text(), "1 KG");
        assert_eq!(weight.unit_tag(), "KG@Weight");
    }

    #[rstest]
    fn test_of() {
        let value = MeasurableAny::of(dec!(2), UnitAny::MetricDimension(MetricDimensionUnit::CM));
        assert_eq!(
            value,
            MeasurableAny::MetricDimension(MetricDimension::of(2, MetricDimensionUnit::CM))
        );
    }

    #[rstest]
    fn test_add_same_family(piece_30: Piece) {
        let lhs = MeasurableAny::from(piece_30);
        let rhs = MeasurableAny::of(dec!(2), UnitAny::Piece(PieceUnit::DOZ));
        let sum = lhs.checked_add(&rhs).unwrap();

        assert_eq!(sum, MeasurableAny::from(Piece::of(54, PieceUnit::PC)));
        assert_eq!(sum.as_text(), "54 PC");
    }

    #[rstest]
    fn test_add_across_families_fails(kg_1: Weight, piece_30: Piece) {
        let weight = MeasurableAny::from(kg_1);
        let piece = MeasurableAny::from(piece_30);

        let result = weight.checked_add(&piece);
        assert!(matches!(result, Err(UnitsError::IncompatibleType(_))));
        let result = weight.checked_sub(&piece);
        assert!(matches!(result, Err(UnitsError::IncompatibleType(_))));
        let result = weight.compare_to(Some(&piece));
        assert!(matches!(result, Err(UnitsError::IncompatibleType(_))));
        assert_eq!(weight.partial_cmp(&piece), None);
        assert_ne!(weight, piece);
    }

    #[rstest]
    fn test_add_or_self(kg_1: Weight, gram_1: Weight) {
        let weight = MeasurableAny::from(kg_1);
        assert_eq!(weight.add_or_self(None).unwrap(), weight);

        let sum = weight.add_or_self(Some(&MeasurableAny::from(gram_1))).unwrap();
        assert_eq!(sum.as_text(), "1001 G");
    }

    #[rstest]
    fn test_sub_or_self(kg_1: Weight, gram_1: Weight, piece_30: Piece) {
        let weight = MeasurableAny::from(kg_1);
        assert_eq!(weight.sub_or_self(None).unwrap(), weight);

        let difference = weight.sub_or_self(Some(&MeasurableAny::from(gram_1))).unwrap();
        assert_eq!(difference.as_text(), "999 G");

        let result = weight.sub_or_self(Some(&MeasurableAny::from(piece_30)));
        assert!(matches!(result, Err(UnitsError::IncompatibleType(_))));
    }

    #[rstest]
    fn test_compare_to(kg_1: Weight, gram_1: Weight) {
        let kg = MeasurableAny::from(kg_1);
        let gram = MeasurableAny::from(gram_1);

        assert_eq!(kg.compare_to(Some(&gram)).unwrap(), Ordering::Greater);
        assert_eq!(kg.compare_to(None).unwrap(), Ordering::Greater);
        assert!(gram < kg);
    }

    #[rstest]
    fn test_convert_to(kg_1: Weight) {
        let weight = MeasurableAny::from(kg_1);
        let converted = weight
            .checked_convert_to(UnitAny::Weight(WeightUnit::G))
            .unwrap();
        assert_eq!(converted.as_text(), "1000 G");

        let result = weight.checked_convert_to(UnitAny::Piece(PieceUnit::PC));
        assert!(matches!(result, Err(UnitsError::IncompatibleType(_))));
    }

    #[rstest]
    fn test_serde(dozen_5: Piece) {
        let value = MeasurableAny::from(dozen_5);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"5 DOZ\"");
        let deserialized: MeasurableAny = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, value);
    }
}
