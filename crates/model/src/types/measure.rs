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

//! The generic measurable value and the object-safe [`Measurable`] trait.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use enum_dispatch::enum_dispatch;
use measura_core::{Serializable, correctness::FAILED};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{MeasurableAny, MetricDimension, Piece, SEPARATOR, Weight};
use crate::{
    enums::UnitFamily,
    error::UnitsError,
    text::MeasurableString,
    units::{MeasureUnit, UnitAny, finer, foreign_unit_error, rescale},
};

/// Behavior shared by measurable values of every family.
///
/// This is the family-erased view used by the text codec, the persisted row shape and
/// [`MeasurableAny`](super::MeasurableAny).
#[enum_dispatch]
pub trait Measurable {
    /// Returns the family the value belongs to.
    fn family(&self) -> UnitFamily;

    /// Returns the magnitude expressed in the value's own unit.
    fn magnitude(&self) -> Decimal;

    /// Returns the value's unit.
    fn unit_any(&self) -> UnitAny;

    /// Returns whether the magnitude is exactly zero in the value's own unit.
    fn is_zero(&self) -> bool;

    /// Returns whether the magnitude is below zero.
    fn is_negative(&self) -> bool;

    /// Returns the text form `"<magnitude> <symbol>"`.
    fn as_text(&self) -> String {
        format!("{}{SEPARATOR}{}", self.magnitude(), self.unit_any().symbol())
    }

    /// Returns the qualified unit tag `"<symbol>@<family>"`.
    fn unit_tag(&self) -> String {
        self.unit_any().qualified()
    }
}

/// An immutable magnitude expressed in a unit of the family `U`.
///
/// Values compare, hash and test equal by their real quantity, so `4 DOZ` equals `48 PC`.
/// Every operation returns a new value.
#[derive(Clone, Copy)]
pub struct Measure<U: MeasureUnit> {
    magnitude: Decimal,
    unit: U,
}

impl<U: MeasureUnit> Measure<U> {
    /// Creates a new [`Measure`] of `magnitude` expressed in `unit`.
    pub fn of<T: Into<Decimal>>(magnitude: T, unit: U) -> Self {
        Self {
            magnitude: magnitude.into(),
            unit,
        }
    }

    /// Creates a new [`Measure`] of `magnitude` expressed in the family's base unit.
    pub fn of_base<T: Into<Decimal>>(magnitude: T) -> Self {
        Self::of(magnitude, U::BASE)
    }

    /// Returns the zero value of the family, in its base unit.
    #[must_use]
    pub fn zero() -> Self {
        Self::of(Decimal::ZERO, U::BASE)
    }

    #[must_use]
    pub const fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    #[must_use]
    pub const fn unit(&self) -> U {
        self.unit
    }

    #[must_use]
    pub const fn family(&self) -> UnitFamily {
        U::FAMILY
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_sign_negative() && !self.magnitude.is_zero()
    }

    /// Returns the text form `"<magnitude> <symbol>"`.
    #[must_use]
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    /// Re-expresses the value in `unit`.
    ///
    /// Conversion to a coarser piece unit truncates toward zero, so `50 PC` becomes `4 DOZ`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The converted magnitude overflows the decimal range.
    /// - A weight or length conversion cannot be represented exactly.
    pub fn checked_convert_to(&self, unit: U) -> Result<Self, UnitsError> {
        let magnitude = rescale(self.magnitude, self.unit, unit, U::TRUNCATES)?;
        Ok(Self { magnitude, unit })
    }

    /// Re-expresses the value in `unit`.
    ///
    /// # Panics
    ///
    /// Panics if the converted magnitude overflows the decimal range.
    #[must_use]
    pub fn convert_to(&self, unit: U) -> Self {
        self.checked_convert_to(unit).expect(FAILED)
    }

    /// Compares with `other`, where an absent value sorts below every present value.
    #[must_use]
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Greater,
        }
    }

    /// Adds `other`, expressing the result in the family's combined unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the sum overflows the decimal range.
    pub fn checked_add(&self, other: &Self) -> Result<Self, UnitsError> {
        self.combine(other, Decimal::checked_add, "adding")
    }

    /// Subtracts `other`, expressing the result in the family's combined unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the difference overflows the decimal range.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, UnitsError> {
        self.combine(other, Decimal::checked_sub, "subtracting")
    }

    /// Adds `other`, treating an absent value as zero.
    ///
    /// # Panics
    ///
    /// Panics if the sum overflows the decimal range.
    #[must_use]
    pub fn add_or_self(&self, other: Option<&Self>) -> Self {
        match other {
            Some(other) => self.checked_add(other).expect(FAILED),
            None => *self,
        }
    }

    /// Subtracts `other`, treating an absent value as zero.
    ///
    /// # Panics
    ///
    /// Panics if the difference overflows the decimal range.
    #[must_use]
    pub fn sub_or_self(&self, other: Option<&Self>) -> Self {
        match other {
            Some(other) => self.checked_sub(other).expect(FAILED),
            None => *self,
        }
    }

    /// Sums `values`, returning [`Measure::zero`] for an empty input.
    ///
    /// # Errors
    ///
    /// Returns an error if any partial sum overflows the decimal range.
    pub fn checked_sum<I>(values: I) -> Result<Self, UnitsError>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Ok(Self::zero());
        };
        values.try_fold(first, |acc, value| acc.checked_add(&value))
    }

    fn combine(
        &self,
        other: &Self,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
        action: &str,
    ) -> Result<Self, UnitsError> {
        let unit = U::combined_unit(self.unit, other.unit);
        let lhs = rescale(self.magnitude, self.unit, unit, U::TRUNCATES)?;
        let rhs = rescale(other.magnitude, other.unit, unit, U::TRUNCATES)?;
        let magnitude = op(lhs, rhs)
            .ok_or_else(|| UnitsError::Overflow(format!("{action} {other} to {self}")))?;
        Ok(Self { magnitude, unit })
    }

    fn sign_ordering(magnitude: Decimal) -> Ordering {
        if magnitude.is_sign_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl<U: MeasureUnit> Measurable for Measure<U> {
    fn family(&self) -> UnitFamily {
        U::FAMILY
    }

    fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    fn unit_any(&self) -> UnitAny {
        self.unit.into_any()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Self::is_negative(self)
    }
}

impl<U: MeasureUnit> Default for Measure<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: MeasureUnit> PartialEq for Measure<U> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<U: MeasureUnit> Eq for Measure<U> {}

impl<U: MeasureUnit> PartialOrd for Measure<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: MeasureUnit> Ord for Measure<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.unit == other.unit {
            return self.magnitude.cmp(&other.magnitude);
        }

        // Lifting to the finer unit only multiplies, so nothing is truncated. The operand
        // already in that unit cannot overflow.
        let unit = finer(self.unit, other.unit);
        let lhs = rescale(self.magnitude, self.unit, unit, false);
        let rhs = rescale(other.magnitude, other.unit, unit, false);

        match (lhs, rhs) {
            (Ok(lhs), Ok(rhs)) => lhs.cmp(&rhs),
            (Err(_), _) => Self::sign_ordering(self.magnitude),
            (_, Err(_)) => Self::sign_ordering(other.magnitude).reverse(),
        }
    }
}

impl<U: MeasureUnit> Hash for Measure<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        U::FAMILY.hash(state);
        match rescale(self.magnitude, self.unit, U::finest(), false) {
            Ok(magnitude) => magnitude.normalize().hash(state),
            // Out of range in the finest unit, equal values share the sign
            Err(_) => self.magnitude.is_sign_negative().hash(state),
        }
    }
}

impl<U: MeasureUnit> Add for Measure<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).expect(FAILED)
    }
}

impl<U: MeasureUnit> Sub for Measure<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).expect(FAILED)
    }
}

impl<U: MeasureUnit> Neg for Measure<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            magnitude: -self.magnitude,
            unit: self.unit,
        }
    }
}

impl<U: MeasureUnit> Sum for Measure<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::checked_sum(iter).expect(FAILED)
    }
}

impl<U: MeasureUnit> Display for Measure<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.magnitude, self.unit.symbol())
    }
}

impl<U: MeasureUnit> Debug for Measure<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", U::FAMILY)
    }
}

impl<U: MeasureUnit> FromStr for Measure<U> {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = MeasurableString::from_str(s)?;
        let magnitude = text.magnitude();
        let unit =
            U::from_symbol(text.unit()).ok_or_else(|| foreign_unit_error(U::FAMILY, text.unit()))?;
        Ok(Self::of(magnitude, unit))
    }
}

impl<U: MeasureUnit> Serialize for Measure<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, U: MeasureUnit> Deserialize<'de> for Measure<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl<U: MeasureUnit> Serializable for Measure<U> {}
