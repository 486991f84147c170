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

//! The weight family, from milligram to metric ton in steps of one thousand.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MeasureUnit, UnitAny};
use crate::enums::{UnitFamily, WeightUnit};

impl WeightUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::MG => "MG",
            Self::G => "G",
            Self::KG => "KG",
            Self::T => "T",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl MeasureUnit for WeightUnit {
    const FAMILY: UnitFamily = UnitFamily::Weight;
    const ALL: &'static [Self] = &[Self::MG, Self::G, Self::KG, Self::T];
    const BASE: Self = Self::G;
    const STEP_RATIO: Decimal = dec!(1000);
    const TRUNCATES: bool = false;

    fn ordinal(self) -> u8 {
        Self::ordinal(self)
    }

    fn symbol(self) -> &'static str {
        Self::symbol(self)
    }

    fn into_any(self) -> UnitAny {
        UnitAny::Weight(self)
    }

    fn from_any(unit: UnitAny) -> Option<Self> {
        match unit {
            UnitAny::Weight(unit) => Some(unit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cmp::Ordering, collections::HashSet};

    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::{Weight, stubs::*};

    #[rstest]
    #[case(WeightUnit::MG, dec!(0.001))]
    #[case(WeightUnit::G, dec!(1))]
    #[case(WeightUnit::KG, dec!(1000))]
    #[case(WeightUnit::T, dec!(1000000))]
    fn test_scale_factor(#[case] unit: WeightUnit, #[case] expected: Decimal) {
        assert_eq!(unit.scale_factor(), expected);
    }

    #[rstest]
    #[case(dec!(1), WeightUnit::T, WeightUnit::KG, dec!(1000))]
    #[case(dec!(1), WeightUnit::T, WeightUnit::MG, dec!(1000000000))]
    #[case(dec!(2), WeightUnit::G, WeightUnit::T, dec!(0.000002))]
    #[case(dec!(1500), WeightUnit::G, WeightUnit::KG, dec!(1.5))]
    #[case(dec!(-3), WeightUnit::KG, WeightUnit::G, dec!(-3000))]
    fn test_convert_to(
        #[case] magnitude: Decimal,
        #[case] from: WeightUnit,
        #[case] to: WeightUnit,
        #[case] expected: Decimal,
    ) {
        let converted = Weight::of(magnitude, from).convert_to(to);
        assert_eq!(converted.magnitude(), expected);
        assert_eq!(converted.unit(), to);
    }

    #[rstest]
    fn test_add_uses_finer_unit(kg_1: Weight, gram_1: Weight) {
        let sum = kg_1 + gram_1;
        assert_eq!(sum.unit(), WeightUnit::G);
        assert_eq!(sum.magnitude(), dec!(1001));
    }

    #[rstest]
    fn test_add_small_to_large() {
        let sum = Weight::of(1, WeightUnit::T) + Weight::of(1, WeightUnit::KG);
        assert_eq!(sum.unit(), WeightUnit::KG);
        assert_eq!(sum.magnitude(), dec!(1001));
        assert_eq!(sum, Weight::of(dec!(1.001), WeightUnit::T));
        assert_eq!(format!("{:?}", sum.convert_to(WeightUnit::T)), "Weight(1.001 T)");
    }

    #[rstest]
    fn test_subtract_to_zero(kg_1: Weight) {
        let difference = kg_1 - Weight::of(1000, WeightUnit::G);
        assert!(difference.is_zero());
        assert!(!difference.is_negative());
        assert_eq!(difference.unit(), WeightUnit::G);
    }

    #[rstest]
    fn test_subtract_to_negative(gram_1: Weight, kg_1: Weight) {
        let difference = gram_1 - kg_1;
        assert!(difference.is_negative());
        assert_eq!(difference.magnitude(), dec!(-999));
    }

    #[rstest]
    fn test_equality_across_units(kg_1: Weight) {
        assert_eq!(kg_1, Weight::of(1000, WeightUnit::G));
        assert_eq!(kg_1, Weight::of(dec!(0.001), WeightUnit::T));
        assert_eq!(kg_1, Weight::of(1_000_000, WeightUnit::MG));
        assert_ne!(kg_1, Weight::of(999, WeightUnit::G));
    }

    #[rstest]
    fn test_hash_consistent_with_eq(kg_1: Weight) {
        let mut set = HashSet::new();
        set.insert(kg_1);
        set.insert(Weight::of(1000, WeightUnit::G));
        set.insert(Weight::of(dec!(1000.000), WeightUnit::G));
        set.insert(Weight::of(dec!(0.001), WeightUnit::T));
        assert_eq!(set.len(), 1);

        set.insert(Weight::of(1, WeightUnit::G));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_compare_to(kg_1: Weight, gram_1: Weight) {
        assert_eq!(kg_1.compare_to(Some(&gram_1)), Ordering::Greater);
        assert_eq!(gram_1.compare_to(Some(&kg_1)), Ordering::Less);
        assert_eq!(kg_1.compare_to(Some(&Weight::of(1000, WeightUnit::G))), Ordering::Equal);
        assert_eq!(kg_1.compare_to(None), Ordering::Greater);
    }

    #[rstest]
    fn test_sorting_mixed_units() {
        let mut weights = vec![
            Weight::of(1, WeightUnit::T),
            Weight::of(5, WeightUnit::MG),
            Weight::of(2, WeightUnit::KG),
            Weight::of(-1, WeightUnit::G),
        ];
        weights.sort();
        assert_eq!(
            weights.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["-1 G", "5 MG", "2 KG", "1 T"]
        );
    }
}
