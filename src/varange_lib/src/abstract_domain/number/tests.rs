use super::*;

fn int(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(4), true)
}

fn uint(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(4), false)
}

fn chr(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(1), true)
}

fn uchr(value: i64) -> Number {
    Number::new_int(value, ByteSize::new(1), false)
}

fn flt(value: f64) -> Number {
    Number::new_float(value, ByteSize::new(8))
}

#[test]
fn fit_wraps_into_the_declared_width() {
    assert_eq!(Number::new_int(256, ByteSize::new(1), false), uchr(0));
    assert_eq!(Number::new_int(-1, ByteSize::new(1), false), uchr(255));
    assert_eq!(Number::new_int(128, ByteSize::new(1), true), chr(-128));
    assert_eq!(Number::new_int(-129, ByteSize::new(1), true), chr(127));
    assert_eq!(
        Number::new_int(1u64 << 32, ByteSize::new(4), false),
        uint(0)
    );
}

#[test]
fn float_construction_clamps_to_infinity() {
    assert!(Number::new_float(1e39, ByteSize::new(4)).is_positive_inf());
    assert!(Number::new_float(-1e39, ByteSize::new(4)).is_negative_inf());
    assert!(Number::new_float(1e39, ByteSize::new(8)).is_number());
    assert!(Number::new_float(f64::NAN, ByteSize::new(8)).is_nan());
}

#[test]
fn integral_promotion_widens_to_int() {
    let promoted = chr(-5).integral_promotion();
    assert_eq!(promoted.width(), ByteSize::new(4));
    assert!(promoted.is_signed());
    assert_eq!(promoted, int(-5));
    // 4- and 8-byte types are left alone.
    assert_eq!(uint(5).integral_promotion(), uint(5));
}

#[test]
fn promotion_prevents_narrow_wraparound() {
    assert_eq!(chr(127).add_value(&chr(1)), int(128));
    let sum = uchr(255).add_value(&uchr(1));
    assert_eq!(sum, int(256));
    // The wraparound only happens on assignment back to the narrow type.
    assert_eq!(uchr(0).assign(&sum), uchr(0));
}

#[test]
fn usual_arithmetic_conversions_prefer_unsigned() {
    // int + unsigned int: the signed operand converts to unsigned.
    let sum = int(-1).add_value(&uint(1));
    assert!(sum.is_unsigned());
    assert_eq!(sum, uint(0));
    let (first, second) = Number::usual_arithmetic_conversions(&int(-1), &uint(1));
    assert_eq!(first, uint((1u64 << 32) as i64 - 1));
    assert_eq!(second, uint(1));
    // A float operand converts the other side to its type.
    let (first, second) = Number::usual_arithmetic_conversions(&flt(1.5), &int(2));
    assert!(first.is_floating_point() && second.is_floating_point());
    assert_eq!(second, flt(2.0));
}

#[test]
fn float_to_int_assignment_quirks() {
    let int_min = int(i32::MIN as i64);
    assert_eq!(int(0).assign(&flt(f64::NAN)), int_min);
    assert_eq!(int(0).assign(&flt(1e10)), int_min);
    assert_eq!(int(0).assign(&flt(f64::NEG_INFINITY)), int_min);
    assert_eq!(int(0).assign(&flt(100.7)), int(100));
    assert_eq!(int(0).assign(&flt(-100.7)), int(-100));
}

#[test]
fn rdiv_produces_ieee_special_values() {
    assert!(flt(10.0).rdiv(&flt(0.0)).is_positive_inf());
    assert!(flt(-10.0).rdiv(&flt(0.0)).is_negative_inf());
    assert!(flt(10.0).rdiv(&flt(-0.0)).is_negative_inf());
    assert!(flt(0.0).rdiv(&flt(0.0)).is_nan());
    assert!(flt(f64::INFINITY).rdiv(&flt(f64::INFINITY)).is_nan());
}

#[test]
fn truncated_division_rounds_toward_zero() {
    assert_eq!(int(7).trunc_div(&int(-2)), int(-3));
    assert_eq!(int(-7).trunc_div(&int(2)), int(-3));
    assert_eq!(int(7).trunc_mod(&int(-2)), int(1));
    assert_eq!(int(-7).trunc_mod(&int(2)), int(-1));
    assert_eq!(int(10).exact_div(&int(-5)), int(-2));
}

#[test]
fn negation_wraps_the_type_minimum() {
    assert_eq!(int(i32::MIN as i64).neg_value(), int(i32::MIN as i64));
    assert_eq!(int(5).neg_value(), int(-5));
    assert_eq!(-flt(5.0), flt(-5.0));
    // Narrow operands are promoted before negating.
    assert_eq!(chr(-128).neg_value(), int(128));
}

#[test]
fn nan_compares_false_in_every_direction() {
    let nan = flt(f64::NAN);
    assert_ne!(nan, nan);
    assert_ne!(nan, flt(1.0));
    assert!(!nan.lt(&flt(1.0)));
    assert!(!nan.gt(&flt(1.0)));
    assert!(!nan.le(&nan));
    assert!(!nan.ge(&flt(1.0)));
    // NaN is still truthy.
    assert!(nan.to_bool());
}

#[test]
fn float_equality_uses_a_relative_epsilon() {
    assert_eq!(flt(1.0), flt(1.000001));
    assert_ne!(flt(1.0), flt(1.1));
    assert_eq!(flt(1e10), flt(1e10 + 1.0));
    assert_eq!(flt(f64::INFINITY), flt(f64::INFINITY));
    assert_ne!(flt(f64::INFINITY), flt(f64::NEG_INFINITY));
    assert_ne!(flt(f64::INFINITY), flt(1e300));
}

#[test]
fn comparisons_after_conversions() {
    assert!(int(-1).gt(&uint(1)));
    assert!(chr(-1).lt(&int(0)));
    assert!(flt(1.5).gt(&int(1)));
    assert!(int(5).le(&int(5)));
    assert!(int(5).ge(&int(5)));
    assert!(flt(f64::NEG_INFINITY).lt(&flt(0.0)));
}

#[test]
fn bitwise_operations() {
    assert_eq!(int(0b1100).bit_and(&int(0b1010)), int(0b1000));
    assert_eq!(int(0b1100).bit_or(&int(0b1010)), int(0b1110));
    assert_eq!(int(0b1100).bit_xor(&int(0b1010)), int(0b0110));
    assert_eq!(int(-1).bit_and(&int(0xff)), int(0xff));
    // Bitwise not promotes first, so even an unsigned char yields an int.
    assert_eq!(uchr(0).bit_not(), int(-1));
    assert_eq!(int(0).bit_not(), int(-1));
}

#[test]
fn shifts_follow_c_semantics() {
    assert_eq!(int(1).bit_left_shift(&int(10)), int(1024));
    assert_eq!(int(1).bit_left_shift(&int(31)), int(i32::MIN as i64));
    assert_eq!(int(-8).bit_right_shift(&int(1)), int(-4));
    assert_eq!(
        uint((1u64 << 31) as i64).bit_right_shift(&int(31)),
        uint(1)
    );
    // Narrow operands may shift up to the promoted width.
    assert_eq!(chr(1).bit_left_shift(&int(20)), int(1 << 20));
}

#[test]
#[should_panic]
fn shift_by_the_full_width_panics() {
    let _ = int(1).bit_left_shift(&int(32));
}

#[test]
#[should_panic]
fn division_by_zero_panics() {
    let _ = int(1).trunc_div(&int(0));
}

#[test]
fn type_limits_and_predicates() {
    assert!(int(i32::MIN as i64).is_min());
    assert!(int(i32::MAX as i64).is_max());
    assert!(uint(0).is_min());
    assert!(flt(f64::MAX).is_max());
    assert_eq!(int(0).get_min(), int(i32::MIN as i64));
    assert_eq!(uchr(0).get_max(), uchr(255));
    assert_eq!(int(0).get_epsilon(), int(1));
    assert!(flt(0.0).get_epsilon().gt(&flt(0.0)));
    assert!(!int(0).to_bool());
    assert!(int(-3).to_bool());
}

#[test]
fn helper_functions() {
    assert_eq!(abs(&int(-5)), int(5));
    assert_eq!(abs(&int(5)), int(5));
    // The absolute value of the type minimum wraps back to itself.
    assert_eq!(abs(&int(i32::MIN as i64)), int(i32::MIN as i64));
    assert_eq!(min(&int(3), &int(7)), int(3));
    assert_eq!(max(&int(3), &int(7)), int(7));
    assert_eq!(max(&flt(1.0), &flt(f64::INFINITY)), flt(f64::INFINITY));
    let converted = int_to_float(&int(3));
    assert_eq!(converted.width(), ByteSize::new(4));
    assert_eq!(converted, Number::new_float(3.0, ByteSize::new(4)));
}

#[test]
fn logical_operations() {
    assert!(int(3).logical_and(&int(-1)));
    assert!(!int(3).logical_and(&int(0)));
    assert!(int(0).logical_or(&flt(0.5)));
    assert!(int(1).logical_xor(&int(0)));
    assert!(!int(1).logical_xor(&int(2)));
    assert!(int(0).logical_not());
}
