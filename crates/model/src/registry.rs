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

//! Resolution of untyped unit names and amounts into typed measurable values.
//!
//! Bare unit names are resolved by scanning the families in a fixed order (piece, weight,
//! metric length) and taking the first family owning the symbol. Since symbols are unique
//! across families the scan order never changes the outcome. Qualified tags of the form
//! `"<symbol>@<family>"` resolve directly against the named family.

use std::str::FromStr;

use measura_core::serialization::parse_decimal;
use rust_decimal::Decimal;

use crate::{
    enums::{MetricDimensionUnit, PieceUnit, UnitFamily, WeightUnit},
    error::UnitsError,
    text::MeasurableString,
    types::MeasurableAny,
    units::{MeasureUnit, QUALIFIER_SEPARATOR, UnitAny, foreign_unit_error},
};

/// All registered families in resolution order.
pub const FAMILIES: [UnitFamily; 3] = [
    UnitFamily::Piece,
    UnitFamily::Weight,
    UnitFamily::MetricDimension,
];

/// Resolves a bare unit symbol against all families.
///
/// # Errors
///
/// Returns an error if no family owns `name`.
pub fn resolve(name: &str) -> Result<UnitAny, UnitsError> {
    FAMILIES
        .iter()
        .find_map(|family| lookup(*family, name))
        .ok_or_else(|| UnitsError::UnsupportedUnit(name.to_string()))
}

/// Resolves a unit symbol within `family`.
///
/// # Errors
///
/// Returns an error if:
/// - `name` is a unit of another family.
/// - `name` is not a unit of any family.
pub fn resolve_in(family: UnitFamily, name: &str) -> Result<UnitAny, UnitsError> {
    lookup(family, name).ok_or_else(|| foreign_unit_error(family, name))
}

fn lookup(family: UnitFamily, name: &str) -> Option<UnitAny> {
    match family {
        UnitFamily::Piece => PieceUnit::from_symbol(name).map(UnitAny::Piece),
        UnitFamily::Weight => WeightUnit::from_symbol(name).map(UnitAny::Weight),
        UnitFamily::MetricDimension => {
            MetricDimensionUnit::from_symbol(name).map(UnitAny::MetricDimension)
        }
    }
}

/// Parses a family tag, accepting both the short and the fully qualified form.
///
/// # Errors
///
/// Returns an error if `tag` names no known family.
pub fn parse_family(tag: &str) -> Result<UnitFamily, UnitsError> {
    UnitFamily::from_str(tag).map_err(|_| UnitsError::IncompatibleType(tag.to_string()))
}

/// Parses a qualified unit tag such as `"KG@Weight"`.
///
/// # Errors
///
/// Returns an error if:
/// - `tag` has no `@` separator.
/// - The family part names no known family.
/// - The unit part is not a unit of that family.
pub fn parse_unit_tag(tag: &str) -> Result<UnitAny, UnitsError> {
    let (name, family) = tag
        .split_once(QUALIFIER_SEPARATOR)
        .ok_or_else(|| UnitsError::MalformedInput(tag.to_string()))?;
    resolve_in(parse_family(family)?, name)
}

/// Builds a value from an amount string and a bare unit symbol.
///
/// # Errors
///
/// Returns an error if:
/// - `amount` is not a decimal number.
/// - `unit` is not a unit of any family.
pub fn get_measurable(amount: &str, unit: &str) -> Result<MeasurableAny, UnitsError> {
    let magnitude =
        parse_decimal(amount).map_err(|_| UnitsError::InvalidAmount(amount.to_string()))?;
    get_measurable_decimal(magnitude, unit)
}

/// Builds a value from a decimal magnitude and a bare unit symbol.
///
/// # Errors
///
/// Returns an error if `unit` is not a unit of any family.
pub fn get_measurable_decimal(
    magnitude: Decimal,
    unit: &str,
) -> Result<MeasurableAny, UnitsError> {
    Ok(MeasurableAny::of(magnitude, resolve(unit)?))
}

/// Builds a value from an amount string and a bare unit symbol, or `None` on any error.
#[must_use]
pub fn get_measurable_opt(amount: &str, unit: &str) -> Option<MeasurableAny> {
    get_measurable(amount, unit)
        .inspect_err(|e| log::debug!("Ignoring unresolvable measurable '{amount} {unit}': {e}"))
        .ok()
}

/// Parses the text form `"<amount> <unit>"`.
///
/// # Errors
///
/// Returns an error if:
/// - `text` does not split into exactly two tokens.
/// - The amount is not a decimal number.
/// - The unit is not a unit of any family.
pub fn parse_measurable(text: &str) -> Result<MeasurableAny, UnitsError> {
    let text = MeasurableString::from_str(text)?;
    get_measurable_decimal(text.magnitude(), text.unit())
}

/// Parses the text form `"<amount> <unit>"`, or `None` on any error.
#[must_use]
pub fn parse_measurable_opt(text: &str) -> Option<MeasurableAny> {
    parse_measurable(text)
        .inspect_err(|e| log::debug!("Ignoring unparsable measurable '{text}': {e}"))
        .ok()
}

/// Builds a value from a qualified unit tag such as `"CM@MetricDimension"` and an amount.
///
/// # Errors
///
/// Returns an error if:
/// - `tag` is not a valid qualified unit tag.
/// - `amount` is not a decimal number.
pub fn from_qualified(tag: &str, amount: &str) -> Result<MeasurableAny, UnitsError> {
    let unit = parse_unit_tag(tag)?;
    let magnitude =
        parse_decimal(amount).map_err(|_| UnitsError::InvalidAmount(amount.to_string()))?;
    Ok(MeasurableAny::of(magnitude, unit))
}
