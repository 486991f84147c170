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

//! The metric length family, from millimeter to meter in steps of ten.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MeasureUnit, UnitAny};
use crate::enums::{MetricDimensionUnit, UnitFamily};

impl MetricDimensionUnit {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::MM => "MM",
            Self::CM => "CM",
            Self::DM => "DM",
            Self::M => "M",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl MeasureUnit for MetricDimensionUnit {
    const FAMILY: UnitFamily = UnitFamily::MetricDimension;
    const ALL: &'static [Self] = &[Self::MM, Self::CM, Self::DM, Self::M];
    const BASE: Self = Self::M;
    const STEP_RATIO: Decimal = dec!(10);
    const TRUNCATES: bool = false;

    fn ordinal(self) -> u8 {
        Self::ordinal(self)
    }

    fn symbol(self) -> &'static str {
        Self::symbol(self)
    }

    fn into_any(self) -> UnitAny {
        UnitAny::MetricDimension(self)
    }

    fn from_any(unit: UnitAny) -> Option<Self> {
        match unit {
            UnitAny::MetricDimension(unit) => Some(unit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::{MetricDimension, stubs::*};

    #[rstest]
    #[case(MetricDimensionUnit::MM, dec!(0.001))]
    #[case(MetricDimensionUnit::CM, dec!(0.01))]
    #[case(MetricDimensionUnit::DM, dec!(0.1))]
    #[case(MetricDimensionUnit::M, dec!(1))]
    fn test_scale_factor(#[case] unit: MetricDimensionUnit, #[case] expected: Decimal) {
        assert_eq!(unit.scale_factor(), expected);
    }

    #[rstest]
    fn test_convert_meter_to_centimeter(meter_1: MetricDimension) {
        let converted = meter_1.convert_to(MetricDimensionUnit::CM);
        assert_eq!(converted.magnitude(), dec!(100));
        assert_eq!(converted.unit(), MetricDimensionUnit::CM);
        assert_eq!(converted, meter_1);
    }

    #[rstest]
    fn test_convert_to_coarser_is_exact() {
        let converted =
            MetricDimension::of(15, MetricDimensionUnit::MM).convert_to(MetricDimensionUnit::CM);
        assert_eq!(converted.magnitude(), dec!(1.5));
    }

    #[rstest]
    fn test_add_uses_one_step_per_ordinal(meter_1: MetricDimension) {
        let sum = meter_1 + MetricDimension::of(5, MetricDimensionUnit::DM);
        assert_eq!(sum.unit(), MetricDimensionUnit::DM);
        assert_eq!(sum.magnitude(), dec!(15));

        let sum = MetricDimension::of(1, MetricDimensionUnit::CM) + meter_1;
        assert_eq!(sum.unit(), MetricDimensionUnit::CM);
        assert_eq!(sum.magnitude(), dec!(101));
    }

    #[rstest]
    fn test_compare_across_units(meter_1: MetricDimension) {
        assert!(meter_1 > MetricDimension::of(99, MetricDimensionUnit::CM));
        assert!(meter_1 < MetricDimension::of(1001, MetricDimensionUnit::MM));
        assert_eq!(meter_1, MetricDimension::of(10, MetricDimensionUnit::DM));
    }

    #[rstest]
    fn test_default_unit_is_meter() {
        let length = MetricDimension::of_base(3);
        assert_eq!(length.unit(), MetricDimensionUnit::M);
        assert_eq!(length.as_text(), "3 M");
    }
}
