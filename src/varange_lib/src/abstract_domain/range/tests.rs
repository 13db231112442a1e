use super::*;
use crate::abstract_domain::SpecializeByConditional;
use crate::intermediate_representation::{BinOpType, UnOpType};
use crate::prelude::*;
use proptest::prelude::*;

fn int(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(4), true)
}

fn int8(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(8), true)
}

fn uint(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(4), false)
}

fn uchr(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(1), false)
}

fn flt(value: f64) -> Number {
    Number::new_float(value, ByteSize::new(8))
}

fn ri(start: i64, end: i64) -> Range {
    Range::from_intervals(vec![Interval::new(int(start), int(end))])
}

fn rf(start: f64, end: f64) -> Range {
    Range::from_intervals(vec![Interval::new(flt(start), flt(end))])
}

fn ru8(start: i64, end: i64) -> Range {
    Range::from_intervals(vec![Interval::new(uchr(start), uchr(end))])
}

/// The maximal range of 4-byte signed ints.
fn int_top() -> Range {
    ri(i32::MIN as i64, i32::MAX as i64)
}

#[test]
fn normalization_merges_adjacent_intervals() {
    let range = Range::from_intervals(vec![
        Interval::new(int(7), int(10)),
        Interval::new(int(1), int(6)),
    ]);
    assert_eq!(range, ri(1, 10));
    // A gap of two is kept.
    let range = Range::from_intervals(vec![
        Interval::new(int(8), int(10)),
        Interval::new(int(1), int(6)),
    ]);
    assert_eq!(range.len(), 2);
    assert_eq!(range[0], Interval::new(int(1), int(6)));
    // Overlaps are merged to the larger bounds.
    let range = Range::from_intervals(vec![
        Interval::new(int(1), int(6)),
        Interval::new(int(4), int(20)),
    ]);
    assert_eq!(range, ri(1, 20));
}

#[test]
fn normalization_splits_wraparound_intervals() {
    let range = Range::from_intervals(vec![Interval::new(int(5), int(-5))]);
    let expected = Range::from_intervals(vec![
        Interval::new(int(i32::MIN as i64), int(-5)),
        Interval::new(int(5), int(i32::MAX as i64)),
    ]);
    assert_eq!(range, expected);
}

#[test]
fn normalization_deduplicates_nan() {
    let range = Range::from_intervals(vec![
        Interval::new(flt(f64::NAN), flt(1.0)),
        Interval::new(flt(2.0), flt(f64::NAN)),
        Interval::new(flt(5.0), flt(6.0)),
    ]);
    assert_eq!(range.len(), 2);
    assert!(range[0].is_nan());
    assert_eq!(range[1], Interval::new(flt(5.0), flt(6.0)));
}

#[test]
fn normalization_collapses_oversized_ranges() {
    let intervals = (0..16)
        .map(|i| Interval::new(int(i * 10), int(i * 10 + 1)))
        .collect();
    let range = Range::from_intervals(intervals);
    assert_eq!(range, ri(0, 151));
}

#[test]
fn split_by_special_values_isolates_sign_changes() {
    let split = ri(-5, 5).split_by_special_values();
    assert_eq!(split.len(), 2);
    assert_eq!(split[0], Interval::new(int(-5), int(0)));
    assert_eq!(split[1], Interval::new(int(0), int(5)));

    let split = ri(i32::MIN as i64, 5).split_by_special_values();
    assert_eq!(split.len(), 3);
    assert_eq!(split[0], Interval::new(int(i32::MIN as i64), int(i32::MIN as i64)));
    assert_eq!(split[1], Interval::new(int(i32::MIN as i64 + 1), int(0)));
    assert_eq!(split[2], Interval::new(int(0), int(5)));

    // Unsigned ranges pass through unchanged.
    let split = ru8(0, 200).split_by_special_values();
    assert_eq!(split.len(), 1);
}

#[test]
fn split_by_special_values_isolates_infinities() {
    let top = Range::max_range(&flt(0.0));
    let split = top.split_by_special_values();
    assert_eq!(split.len(), 5);
    assert!(split[0].is_nan());
    assert!(split[1].start.is_negative_inf() && split[1].end.is_negative_inf());
    assert_eq!(split[2], Interval::new(flt(0.0).get_min(), flt(0.0)));
    assert_eq!(split[3], Interval::new(flt(0.0), flt(0.0).get_max()));
    assert!(split[4].start.is_positive_inf() && split[4].end.is_positive_inf());
}

#[test]
fn split_by_zero_isolates_the_zero_point() {
    let split = ri(-5, 5).split_by_zero();
    assert_eq!(split.len(), 3);
    assert_eq!(split[0], Interval::new(int(-5), int(-1)));
    assert_eq!(split[1], Interval::new(int(0), int(0)));
    assert_eq!(split[2], Interval::new(int(1), int(5)));

    let split = rf(0.0, 5.0).split_by_zero();
    assert_eq!(split.len(), 2);
    assert_eq!(split[0], Interval::new(flt(0.0), flt(0.0)));
    assert!(split[1].start.gt(&flt(0.0)));
}

#[test]
fn assignment_collapses_overwide_sources() {
    let destination = Range::from(uchr(0));
    assert_eq!(destination.assign(&ri(0, 300)), ru8(0, 255));
    assert_eq!(destination.assign(&ri(0, 300)), Range::max_range(&uchr(0)));
}

#[test]
fn assignment_wraps_at_the_type_limits() {
    let destination = Range::from(uchr(0));
    let wrapped = destination.assign(&ri(250, 260));
    let expected = Range::from_intervals(vec![
        Interval::new(uchr(0), uchr(4)),
        Interval::new(uchr(250), uchr(255)),
    ]);
    assert_eq!(wrapped, expected);
}

#[test]
fn assignment_from_floats_checks_the_limits() {
    let destination = Range::from(int(0));
    assert_eq!(destination.assign(&rf(10.7, 20.7)), ri(10, 20));
    assert_eq!(destination.assign(&rf(1e10, 1e10)), int_top());
    assert_eq!(
        destination.assign(&Range::from(flt(f64::NAN))),
        int_top()
    );
    // Int to float conversion is exact over the int limits.
    let float_destination = Range::from(flt(0.0));
    assert_eq!(float_destination.assign(&ri(1, 5)), rf(1.0, 5.0));
}

#[test]
fn addition_promotes_narrow_types() {
    assert_eq!(ri(1, 5).add_value(&ri(10, 20)), ri(11, 25));
    // unsigned char + unsigned char is computed as int and does not wrap.
    assert_eq!(ru8(200, 250).add_value(&ru8(10, 10)), ri(210, 260));
}

#[test]
fn addition_wraps_at_the_unsigned_limit() {
    let max = Range::from(uint(u32::MAX as i64));
    let one = Range::from(uint(1));
    assert_eq!(max.add_value(&one), Range::from(uint(0)));
}

#[test]
fn subtraction_covers_all_corners() {
    assert_eq!(ri(1, 5).sub_value(&ri(0, 3)), ri(-2, 5));
    assert_eq!(ri(0, 0).sub_value(&ri(1, 1)), ri(-1, -1));
}

#[test]
fn multiplication_uses_quadrant_analysis() {
    assert_eq!(ri(2, 10).mul_value(&ri(3, 4)), ri(6, 40));
    assert_eq!(ri(-3, -2).mul_value(&ri(4, 5)), ri(-15, -8));
    assert_eq!(ri(-3, -2).mul_value(&ri(-5, -4)), ri(8, 15));
    assert_eq!(ri(-2, 2).mul_value(&ri(10, 10)), ri(-20, 20));
}

#[test]
fn multiplication_escapes_on_possible_overflow() {
    let huge = Range::from_intervals(vec![Interval::new(
        int8(i64::MAX / 2),
        int8(i64::MAX),
    )]);
    let eight = Range::from(int8(8));
    let product = huge.mul_value(&eight);
    assert_eq!(product, Range::max_range(&int8(0)));
}

#[test]
fn float_multiplication_propagates_nan() {
    let nan = Range::from(flt(f64::NAN));
    let product = nan.mul_value(&rf(1.0, 2.0));
    assert!(product.contains_nan());
}

#[test]
fn division_by_a_zero_containing_range_escapes() {
    assert_eq!(ri(1, 5).exact_div(&ri(0, 0)), int_top());
    assert_eq!(ri(1, 5).trunc_div(&ri(-1, 1)), int_top());
    assert_eq!(ri(1, 5).trunc_mod(&ri(0, 0)), int_top());
}

#[test]
fn truncated_division_of_ranges() {
    assert_eq!(ri(10, 20).trunc_div(&ri(2, 5)), ri(2, 10));
    assert_eq!(ri(-20, -10).trunc_div(&ri(2, 5)), ri(-10, -2));
    // A point divisor only contributes the quotients of the endpoints.
    let endpoint_quotients = Range::from_intervals(vec![
        Interval::new(int(5), int(5)),
        Interval::new(int(10), int(10)),
    ]);
    assert_eq!(ri(10, 20).exact_div(&ri(2, 2)), endpoint_quotients);
}

#[test]
fn division_of_the_minimum_by_minus_one_escapes() {
    let dividend = ri(i32::MIN as i64, -10);
    assert_eq!(dividend.trunc_div(&ri(-1, -1)), int_top());
    // Without the minimum the endpoint quotients are computed exactly.
    let negated_endpoints = Range::from_intervals(vec![
        Interval::new(int(10), int(10)),
        Interval::new(int(20), int(20)),
    ]);
    assert_eq!(ri(-20, -10).trunc_div(&ri(-1, -1)), negated_endpoints);
}

#[test]
fn remainder_is_bracketed_by_the_dividend_sign() {
    assert_eq!(ri(10, 20).trunc_mod(&ri(7, 7)), ri(0, 20));
    assert_eq!(ri(-20, -10).trunc_mod(&ri(7, 7)), ri(-20, 0));
    assert_eq!(ri(-20, 20).trunc_mod(&ri(7, 7)), ri(-20, 20));
}

#[test]
fn rdiv_produces_ieee_special_values() {
    let by_zero = rf(10.0, 10.0).rdiv(&rf(0.0, 0.0));
    assert!(by_zero.contains_positive_inf());
    assert!(!by_zero.contains_nan());

    let zero_by_zero = rf(0.0, 0.0).rdiv(&rf(0.0, 0.0));
    assert!(zero_by_zero.contains_nan());

    let halves = rf(-10.0, 10.0).rdiv(&rf(2.0, 2.0));
    assert_eq!(halves.get_min(), flt(-5.0));
    assert_eq!(halves.get_max(), flt(5.0));
    assert!(halves.contains_zero());
}

#[test]
fn bitwise_operations_are_exact_only_for_points() {
    assert_eq!(
        Range::from(int(0b1100)).bit_and(&Range::from(int(0b1010))),
        Range::from(int(0b1000))
    );
    assert_eq!(
        Range::from(int(0b1100)).bit_or(&Range::from(int(0b1010))),
        Range::from(int(0b1110))
    );
    assert_eq!(
        Range::from(int(0b1100)).bit_xor(&Range::from(int(0b1010))),
        Range::from(int(0b0110))
    );
    assert_eq!(Range::from(int(0)).bit_not(), Range::from(int(-1)));
    assert_eq!(ri(0, 5).bit_and(&ri(1, 1)), int_top());
    assert_eq!(ri(0, 5).bit_not(), int_top());
}

#[test]
fn shifts_escape_at_the_operand_width() {
    assert_eq!(
        Range::from(int(1)).bit_left_shift(&Range::from(int(4))),
        Range::from(int(16))
    );
    assert_eq!(
        Range::from(int(-8)).bit_right_shift(&Range::from(int(1))),
        Range::from(int(-4))
    );
    // An unsigned char may be shifted by at most 7 bits.
    assert_eq!(
        Range::from(uchr(1)).bit_left_shift(&Range::from(int(7))),
        Range::from(int(128))
    );
    assert_eq!(
        Range::from(uchr(1)).bit_left_shift(&Range::from(int(8))),
        int_top()
    );
    assert_eq!(ri(0, 5).bit_left_shift(&Range::from(int(1))), int_top());
}

#[test]
fn rotations_always_escape() {
    let point = Range::from(int(1));
    assert_eq!(point.bit_left_rotate(&point), int_top());
    assert_eq!(point.bit_right_rotate(&point), int_top());
}

#[test]
fn logical_operations_on_truthiness() {
    assert_eq!(ri(1, 5).logical_not(), Range::from(int(0)));
    assert_eq!(ri(0, 0).logical_not(), Range::from(int(1)));
    assert_eq!(ri(-1, 1).logical_not(), ri(0, 1));
    assert_eq!(ri(1, 5).logical_and(&ri(0, 3)), ri(0, 1));
    assert_eq!(ri(1, 5).logical_and(&ri(1, 3)), Range::from(int(1)));
    assert_eq!(ri(0, 0).logical_and(&ri(1, 3)), Range::from(int(0)));
    assert_eq!(ri(0, 0).logical_or(&ri(1, 3)), Range::from(int(1)));
    assert_eq!(ri(0, 0).logical_or(&ri(0, 0)), Range::from(int(0)));
    assert_eq!(ri(1, 1).logical_xor(&ri(0, 0)), Range::from(int(1)));
    assert_eq!(ri(1, 1).logical_xor(&ri(2, 2)), Range::from(int(0)));
    assert_eq!(ri(0, 1).logical_xor(&ri(0, 0)), ri(0, 1));
}

#[test]
fn equality_comparison_of_ranges() {
    assert_eq!(ri(1, 5).logical_eq(&ri(10, 20)), Range::from(int(0)));
    assert_eq!(ri(5, 5).logical_eq(&ri(5, 5)), Range::from(int(1)));
    assert_eq!(ri(1, 5).logical_eq(&ri(3, 8)), ri(0, 1));
    assert_eq!(ri(5, 5).logical_neq(&ri(5, 5)), Range::from(int(0)));
    assert_eq!(ri(1, 5).logical_neq(&ri(10, 20)), Range::from(int(1)));
    // NaN forces a possible inequality even for identical ranges.
    let nan = Range::from(flt(f64::NAN));
    assert_eq!(nan.logical_eq(&nan), Range::from(int(0)));
}

#[test]
fn ordering_comparisons_of_ranges() {
    assert_eq!(ri(1, 5).logical_lt(&ri(10, 20)), Range::from(int(1)));
    assert_eq!(ri(1, 15).logical_lt(&ri(10, 20)), ri(0, 1));
    assert_eq!(ri(10, 20).logical_lt(&ri(1, 5)), Range::from(int(0)));
    assert_eq!(ri(10, 20).logical_gt(&ri(1, 5)), Range::from(int(1)));
    // A NaN interval contributes a certain false.
    let with_nan = Range::from_intervals(vec![
        Interval::new(flt(f64::NAN), flt(f64::NAN)),
        Interval::new(flt(1.0), flt(2.0)),
    ]);
    assert_eq!(with_nan.logical_lt(&rf(10.0, 20.0)), ri(0, 1));
}

#[test]
fn boundary_sharpening_of_le_and_ge() {
    assert_eq!(ri(1, 5).logical_le(&ri(5, 10)), Range::from(int(1)));
    assert_eq!(ri(5, 10).logical_ge(&ri(1, 5)), Range::from(int(1)));
    assert_eq!(ri(1, 6).logical_le(&ri(5, 10)), ri(0, 1));
    assert_eq!(ri(10, 20).logical_le(&ri(1, 5)), Range::from(int(0)));
    assert_eq!(ri(1, 5).logical_ge(&ri(10, 20)), Range::from(int(0)));
}

#[test]
fn specialization_narrows_the_range() {
    assert_eq!(ri(0, 10).specialize_gt(&ri(5, 5)), ri(6, 10));
    assert_eq!(ri(0, 10).specialize_lt(&ri(5, 5)), ri(0, 4));
    assert_eq!(ri(0, 10).specialize_ge(&ri(5, 5)), ri(5, 10));
    assert_eq!(ri(0, 10).specialize_le(&ri(5, 5)), ri(0, 5));
    assert_eq!(ri(0, 10).specialize_eq(&ri(5, 20)), ri(5, 10));
    assert_eq!(ri(0, 10).specialize_neq(&ri(5, 5)), ri(0, 10));
}

#[test]
fn specialization_never_returns_an_empty_range() {
    // The operands are over-approximations, so even contradictory-looking
    // assumptions keep a usable fallback value.
    assert_eq!(ri(0, 1).specialize_eq(&ri(10, 20)), ri(10, 20));
    assert_eq!(
        ri(0, 1).specialize_gt(&ri(10, 20)),
        ri(11, i32::MAX as i64)
    );
    assert_eq!(
        ri(10, 20).specialize_lt(&ri(0, 1)),
        ri(i32::MIN as i64, 0)
    );
    assert_eq!(
        ri(0, 1).specialize_ge(&ri(10, 20)),
        ri(10, i32::MAX as i64)
    );
    assert_eq!(
        ri(10, 20).specialize_le(&ri(0, 1)),
        ri(i32::MIN as i64, 1)
    );
}

#[test]
fn expansion_widens_away_from_zero() {
    assert_eq!(ri(0, 0).expand(), ri(-1, 1));
    assert_eq!(ri(6, 100).expand(), ri(3, 200));
    assert_eq!(ri(-5, -2).expand(), ri(-10, -1));
    // Doubling past the maximum clamps to the type limit.
    assert_eq!(ri(1, i32::MAX as i64).expand(), ri(-1, i32::MAX as i64));
    // Floats widen straight to the maximal range.
    assert_eq!(rf(1.0, 2.0).expand(), Range::max_range(&flt(0.0)));
}

#[test]
fn union_and_intersection() {
    assert_eq!(ri(1, 6).unite(&ri(7, 10)), ri(1, 10));
    assert_eq!(Range::empty().unite(&ri(1, 2)), ri(1, 2));
    assert_eq!(ri(1, 5).intersect(&ri(3, 10)), ri(3, 5));
    assert_eq!(ri(1, 5).intersect(&ri(5, 9)), ri(5, 5));
    assert!(ri(1, 5).intersect(&ri(10, 20)).is_empty());
    assert!(ri(1, 5).intersect(&Range::empty()).is_empty());
    // NaN intervals never intersect, not even each other.
    let with_nan = Range::from_intervals(vec![
        Interval::new(flt(f64::NAN), flt(f64::NAN)),
        Interval::new(flt(1.0), flt(2.0)),
    ]);
    let intersection = with_nan.intersect(&with_nan);
    assert!(!intersection.contains_nan());
    assert_eq!(intersection, rf(1.0, 2.0));
}

#[test]
fn minimum_and_maximum_of_ranges() {
    assert_eq!(ri(1, 5).min_value(&ri(3, 10)), ri(1, 5));
    assert_eq!(ri(1, 5).max_value(&ri(3, 10)), ri(3, 10));
    assert_eq!(ri(0, 10).min_value(&ri(5, 6)), ri(0, 6));
    assert_eq!(ri(0, 10).max_value(&ri(5, 6)), ri(5, 10));
}

#[test]
fn equality_ignores_nan_only_on_the_left_side() {
    let with_nan = Range::from_intervals(vec![
        Interval::new(flt(f64::NAN), flt(f64::NAN)),
        Interval::new(flt(1.0), flt(2.0)),
    ]);
    let without_nan = Range::from_intervals(vec![
        Interval::new(flt(-9.0), flt(-8.0)),
        Interval::new(flt(1.0), flt(2.0)),
    ]);
    assert!(with_nan == without_nan);
    assert!(without_nan != with_nan);
    assert!(with_nan == with_nan.clone());
}

#[test]
fn global_bounds_skip_leading_nan() {
    let with_nan = Range::from_intervals(vec![
        Interval::new(flt(f64::NAN), flt(f64::NAN)),
        Interval::new(flt(1.0), flt(2.0)),
    ]);
    assert_eq!(with_nan.get_min(), flt(1.0));
    assert_eq!(with_nan.get_max(), flt(2.0));
    assert_eq!(ri(1, 5).get_min(), int(1));
}

#[test]
fn abstract_domain_trait_behavior() {
    use crate::abstract_domain::{AbstractDomain, HasTop};
    assert_eq!(ri(1, 2).merge(&ri(5, 6)), ri(1, 2).unite(&ri(5, 6)));
    let mut range = ri(1, 2);
    range.merge_with(&ri(2, 8));
    assert_eq!(range, ri(1, 8));
    assert_eq!(ri(1, 2).top(), int_top());
    assert!(int_top().is_top());
    assert!(!ri(1, 2).is_top());
    let float_top = Range::max_range(&flt(0.0));
    assert!(float_top.is_top());
    assert!(float_top.contains_nan());
    assert!(float_top.contains_positive_inf());
    assert!(float_top.contains_negative_inf());
}

#[test]
fn conversion_into_numbers_and_intervals() {
    use crate::abstract_domain::{TryToInterval, TryToNumber};
    assert_eq!(Range::from(int(5)).try_to_number().unwrap(), int(5));
    assert!(ri(1, 5).try_to_number().is_err());
    // A NaN point is not a usable concrete value.
    assert!(Range::from(flt(f64::NAN)).try_to_number().is_err());
    let interval = ri(1, 5).try_to_interval().unwrap();
    assert_eq!(interval, Interval::new(int(1), int(5)));
    assert!(int_top().try_to_interval().is_err());
    assert!(Range::empty().try_to_interval().is_err());
}

#[test]
fn operator_dispatch() {
    assert_eq!(ri(1, 5).bin_op(BinOpType::Plus, &ri(1, 1)), ri(2, 6));
    assert_eq!(ri(1, 5).bin_op(BinOpType::Mult, &ri(2, 2)), ri(2, 10));
    assert_eq!(ri(1, 5).bin_op(BinOpType::Lt, &ri(10, 10)), Range::from(int(1)));
    assert_eq!(ri(1, 5).un_op(UnOpType::Minus), ri(-5, -1));
    assert_eq!(ri(-5, 3).un_op(UnOpType::Abs), ri(0, 5));
    assert_eq!(ri(1, 5).un_op(UnOpType::BoolNot), Range::from(int(0)));
    let as_float = ri(1, 5).un_op(UnOpType::IntToFloat);
    assert!(as_float.is_floating_point());
    assert_eq!(as_float.get_min(), Number::new_float(1.0, ByteSize::new(4)));
}

#[test]
fn negation_of_ranges() {
    assert_eq!(ri(1, 5).neg_value(), ri(-5, -1));
    assert_eq!(ri(-5, 5).neg_value(), ri(-5, 5));
    // The minimum point survives negation, the rest is mirrored.
    let with_min = ri(i32::MIN as i64, i32::MIN as i64 + 10);
    let negated = with_min.neg_value();
    assert_eq!(negated.len(), 2);
    assert_eq!(negated.get_min(), int(i32::MIN as i64));
    assert_eq!(negated.get_max(), int(i32::MAX as i64));
    assert_eq!(rf(-2.0, 1.0).neg_value(), rf(-1.0, 2.0));
}

#[test]
fn display_format() {
    let range = Range::from_intervals(vec![
        Interval::new(int(1), int(2)),
        Interval::new(int(5), int(6)),
    ]);
    assert_eq!(format!("{range}"), "[1, 2] v [5, 6]");
    assert_eq!(format!("{}", Range::empty()), "{}");
}

#[test]
fn serde_round_trip() {
    let range = Range::from_intervals(vec![
        Interval::new(int(1), int(5)),
        Interval::new(int(100), int(200)),
    ]);
    let json = serde_json::to_string(&range).unwrap();
    let deserialized: Range = serde_json::from_str(&json).unwrap();
    assert_eq!(range, deserialized);

    let float_range = rf(1.5, 2.5);
    let json = serde_json::to_string(&float_range).unwrap();
    let deserialized: Range = serde_json::from_str(&json).unwrap();
    assert_eq!(float_range, deserialized);
}

proptest! {
    #[test]
    fn normalization_is_idempotent(
        bounds in prop::collection::vec((-1000i64..1000, -1000i64..1000), 1..6)
    ) {
        let intervals = bounds
            .into_iter()
            .map(|(start, end)| Interval::new(int(start), int(end)))
            .collect();
        let range = Range::from_intervals(intervals);
        prop_assert_eq!(range.normalize(), range);
    }

    #[test]
    fn arithmetic_never_produces_an_empty_range(
        a in -100i64..100,
        b in -100i64..100,
        c in -100i64..100,
        d in -100i64..100,
    ) {
        let lhs = ri(a.min(b), a.max(b));
        let rhs = ri(c.min(d), c.max(d));
        prop_assert!(!lhs.add_value(&rhs).is_empty());
        prop_assert!(!lhs.sub_value(&rhs).is_empty());
        prop_assert!(!lhs.mul_value(&rhs).is_empty());
        prop_assert!(!lhs.trunc_div(&rhs).is_empty());
        prop_assert!(!lhs.trunc_mod(&rhs).is_empty());
        prop_assert!(!lhs.neg_value().is_empty());
    }

    #[test]
    fn widening_contains_the_input(a in -1000i64..1000, b in -1000i64..1000) {
        let range = ri(a.min(b), a.max(b));
        let expanded = range.expand();
        prop_assert_eq!(range.unite(&expanded), expanded.clone());
        prop_assert!(expanded.get_min().le(&range.get_min()));
        prop_assert!(expanded.get_max().ge(&range.get_max()));
    }

    #[test]
    fn one_sided_nan_equality(lower in -1000i32..1000, length in 1i32..100) {
        let start = lower as f64;
        let end = start + length as f64;
        let with_nan = Range::from_intervals(vec![
            Interval::new(flt(f64::NAN), flt(f64::NAN)),
            Interval::new(flt(start), flt(end)),
        ]);
        let without_nan = Range::from_intervals(vec![
            Interval::new(flt(start - 10.0), flt(start - 5.0)),
            Interval::new(flt(start), flt(end)),
        ]);
        prop_assert!(with_nan == without_nan);
        prop_assert!(without_nan != with_nan);
    }
}
