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

//! The two-field shape in which measurable values are persisted.
//!
//! A row holds the amount as a decimal string and the unit as a qualified tag, for example
//! `("1.5", "KG@Weight")`. Storage adapters map these fields onto their own columns.

use measura_core::{
    Serializable,
    correctness::{check_string_max_len, check_valid_string_ascii},
};
use serde::{Deserialize, Serialize};

use crate::{
    enums::UnitFamily,
    error::UnitsError,
    registry,
    types::{Measurable, MeasurableAny},
};

/// Maximum length of a stored quantity amount.
pub const QUANTITY_LENGTH: usize = 16;

/// Maximum length of a stored weight amount.
pub const WEIGHT_LENGTH: usize = 16;

/// A persisted measurable value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurableRow {
    /// The amount as a decimal string.
    pub amount: String,
    /// The qualified unit tag `"<symbol>@<family>"`.
    pub unit_type: String,
}

impl MeasurableRow {
    /// Creates a new [`MeasurableRow`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` or `unit_type` is empty or not ASCII.
    pub fn new_checked<A, T>(amount: A, unit_type: T) -> anyhow::Result<Self>
    where
        A: Into<String>,
        T: Into<String>,
    {
        let (amount, unit_type) = (amount.into(), unit_type.into());
        check_valid_string_ascii(&amount, stringify!(amount))?;
        check_valid_string_ascii(&unit_type, stringify!(unit_type))?;
        Ok(Self { amount, unit_type })
    }

    /// Creates a new [`MeasurableRow`] holding `value`.
    #[must_use]
    pub fn from_measurable<M: Measurable + ?Sized>(value: &M) -> Self {
        Self {
            amount: value.magnitude().to_string(),
            unit_type: value.unit_tag(),
        }
    }

    /// Resolves the row into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `unit_type` is not a valid qualified unit tag.
    /// - `amount` is not a decimal number.
    pub fn to_measurable(&self) -> Result<MeasurableAny, UnitsError> {
        registry::from_qualified(&self.unit_type, &self.amount)
    }

    /// Checks the amount fits the column reserved for its family.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `unit_type` is not a valid qualified unit tag.
    /// - `amount` is longer than the column length.
    pub fn check_column_lengths(&self) -> anyhow::Result<()> {
        let unit = registry::parse_unit_tag(&self.unit_type)?;
        let max_len = match unit.family() {
            UnitFamily::Weight => WEIGHT_LENGTH,
            UnitFamily::Piece | UnitFamily::MetricDimension => QUANTITY_LENGTH,
        };
        check_string_max_len(&self.amount, max_len, stringify!(amount))
    }
}

impl From<&MeasurableAny> for MeasurableRow {
    fn from(value: &MeasurableAny) -> Self {
        Self::from_measurable(value)
    }
}

impl TryFrom<&MeasurableRow> for MeasurableAny {
    type Error = UnitsError;

    fn try_from(row: &MeasurableRow) -> Result<Self, Self::Error> {
        row.to_measurable()
    }
}

impl Serializable for MeasurableRow {}

#[cfg(test)]
mod tests {
    use measura_core::serialization::msgpack::{FromMsgPack, ToMsgPack};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        enums::{MetricDimensionUnit, PieceUnit, WeightUnit},
        types::{MetricDimension, Piece, Weight, stubs::*},
    };

    #[rstest]
    fn test_from_measurable(kg_1: Weight, dozen_5: Piece) {
        let row = MeasurableRow::from_measurable(&kg_1);
        assert_eq!(row.amount, "1");
        assert_eq!(row.unit_type, "KG@Weight");

        let row = MeasurableRow::from(&MeasurableAny::from(dozen_5));
        assert_eq!(row.amount, "5");
        assert_eq!(row.unit_type, "DOZ@Piece");
    }

    #[rstest]
    fn test_round_trip_keeps_unit() {
        let value = MeasurableAny::from(MetricDimension::of(dec!(2.50), MetricDimensionUnit::CM));
        let row = MeasurableRow::from(&value);
        assert_eq!(row.amount, "2.50");
        assert_eq!(row.unit_type, "CM@MetricDimension");

        let restored = MeasurableAny::try_from(&row).unwrap();
        assert_eq!(restored, value);
        assert_eq!(restored.as_text(), "2.50 CM");
    }

    #[rstest]
    fn test_to_measurable_legacy_tag() {
        let row = MeasurableRow::new_checked("3", "T@org.openwms.core.units.api.Weight").unwrap();
        let value = row.to_measurable().unwrap();
        assert_eq!(value, MeasurableAny::from(Weight::of(3, WeightUnit::T)));
        assert_eq!(MeasurableRow::from(&value).unit_type, "T@Weight");
    }

    #[rstest]
    fn test_to_measurable_errors() {
        let row = MeasurableRow::new_checked("FOO", "PC@Piece").unwrap();
        assert!(matches!(row.to_measurable(), Err(UnitsError::InvalidAmount(_))));

        let row = MeasurableRow::new_checked("1", "PC@Unknown").unwrap();
        assert!(matches!(row.to_measurable(), Err(UnitsError::IncompatibleType(_))));

        let row = MeasurableRow::new_checked("1", "PC").unwrap();
        assert!(matches!(row.to_measurable(), Err(UnitsError::MalformedInput(_))));
    }

    #[rstest]
    #[case("", "PC@Piece")]
    #[case("1", "")]
    #[case("1", "µ@Weight")]
    fn test_new_checked_invalid(#[case] amount: &str, #[case] unit_type: &str) {
        assert!(MeasurableRow::new_checked(amount, unit_type).is_err());
    }

    #[rstest]
    fn test_check_column_lengths() {
        let row = MeasurableRow::from_measurable(&Piece::of(12, PieceUnit::PC));
        assert!(row.check_column_lengths().is_ok());

        let row = MeasurableRow::new_checked("12345678901234567", "KG@Weight").unwrap();
        assert!(row.check_column_lengths().is_err());

        let row = MeasurableRow::new_checked("1234567890123456", "KG@Weight").unwrap();
        assert!(row.check_column_lengths().is_ok());
    }

    #[rstest]
    fn test_serializable(kg_1: Weight) {
        let row = MeasurableRow::from_measurable(&kg_1);

        let json = row.to_json_bytes().unwrap();
        assert_eq!(
            String::from_utf8(json.to_vec()).unwrap(),
            r#"{"amount":"1","unit_type":"KG@Weight"}"#
        );
        assert_eq!(MeasurableRow::from_json_bytes(&json).unwrap(), row);

        let msgpack = row.to_msgpack_bytes().unwrap();
        assert_eq!(MeasurableRow::from_msgpack_bytes(&msgpack).unwrap(), row);
    }
}
