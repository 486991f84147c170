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

//! The canonical `"<amount> <unit>"` text form of a measurable value.

use std::{fmt::Display, str::FromStr};

use measura_core::serialization::parse_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::UnitsError,
    types::{Measurable, SEPARATOR},
};

/// An amount and a unit symbol as they appear in text.
///
/// The amount keeps its literal digits, so `"1.50 KG"` renders back as `"1.50 KG"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeasurableString {
    amount: String,
    unit: String,
    magnitude: Decimal,
}

impl MeasurableString {
    /// Creates a new [`MeasurableString`] from an amount and a unit symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` or `unit` is empty or contains the separator.
    /// - `amount` is not a decimal number.
    pub fn new_checked<A, S>(amount: A, unit: S) -> Result<Self, UnitsError>
    where
        A: Into<String>,
        S: Into<String>,
    {
        let (amount, unit) = (amount.into(), unit.into());
        if amount.is_empty()
            || unit.is_empty()
            || amount.contains(SEPARATOR)
            || unit.contains(SEPARATOR)
        {
            return Err(UnitsError::MalformedInput(format!("{amount}{SEPARATOR}{unit}")));
        }
        let magnitude =
            parse_decimal(&amount).map_err(|_| UnitsError::InvalidAmount(amount.clone()))?;
        Ok(Self {
            amount,
            unit,
            magnitude,
        })
    }

    /// Creates a new [`MeasurableString`] holding the text form of `value`.
    #[must_use]
    pub fn from_measurable<M: Measurable + ?Sized>(value: &M) -> Self {
        Self {
            amount: value.magnitude().to_string(),
            unit: value.unit_any().symbol().to_string(),
            magnitude: value.magnitude(),
        }
    }

    /// Returns the amount exactly as written.
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Returns the unit symbol.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the amount as a decimal.
    #[must_use]
    pub const fn magnitude(&self) -> Decimal {
        self.magnitude
    }
}

impl FromStr for MeasurableString {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split(SEPARATOR);
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(amount), Some(unit), None) => Self::new_checked(amount, unit),
            _ => Err(UnitsError::MalformedInput(s.to_string())),
        }
    }
}

impl Display for MeasurableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.amount, self.unit)
    }
}

impl Serialize for MeasurableString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MeasurableString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
