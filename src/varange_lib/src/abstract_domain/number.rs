use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::prelude::*;

/// A single typed scalar value as the analyzed C program sees it.
///
/// An integral value carries its exact magnitude together with the byte width
/// and signedness of its C type. Every operation that produces an integral
/// value re-fits the magnitude into the declared type using modular
/// arithmetic, so fixed-width wraparound behaves exactly as on the analyzed
/// target. A floating-point value carries an `f64` magnitude and the byte
/// width of its C type; magnitudes beyond the finite limits of the type are
/// clamped to the corresponding infinity. NaN and the infinities are ordinary
/// magnitudes, `long double` (16 bytes) is modeled at `f64` precision.
///
/// Binary operations first run the C99 usual arithmetic conversions on both
/// operands, so mixed-type operands behave exactly like in compiled code.
/// All operations are pure: they take their operands by reference and return
/// new values.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum Number {
    /// A value of a fixed-width C integer type.
    Integral {
        /// The exact magnitude of the value. Always inside the limits of the
        /// declared type.
        value: BigInt,
        /// The byte width of the declared type (1, 2, 4 or 8).
        width: ByteSize,
        /// Whether the declared type is signed.
        signed: bool,
    },
    /// A value of a C floating-point type.
    FloatingPoint {
        /// The magnitude of the value.
        value: f64,
        /// The byte width of the declared type (4, 8 or 16).
        width: ByteSize,
    },
}

impl Number {
    /// Create an integral value of the given type.
    ///
    /// The magnitude is re-fitted into the type limits with modular
    /// arithmetic, i.e. out-of-range magnitudes wrap around.
    pub fn new_int<T: Into<BigInt>>(value: T, width: ByteSize, signed: bool) -> Number {
        assert!(
            matches!(u64::from(width), 1 | 2 | 4 | 8),
            "unsupported integral width: {width}"
        );
        let modulus = BigInt::one() << width.as_bit_length();
        let mut value = value.into() % &modulus;
        if value.is_negative() {
            value += &modulus;
        }
        if signed && value > Self::int_max_value(width, signed) {
            value -= &modulus;
        }
        Number::Integral {
            value,
            width,
            signed,
        }
    }

    /// Create a floating-point value of the given type.
    ///
    /// Magnitudes beyond the finite limits of the type are clamped to the
    /// corresponding infinity. NaN and the infinities are kept as given.
    pub fn new_float(value: f64, width: ByteSize) -> Number {
        assert!(
            matches!(u64::from(width), 4 | 8 | 16),
            "unsupported floating-point width: {width}"
        );
        let limit = Self::float_limit(width);
        let value = if value > limit {
            f64::INFINITY
        } else if value < -limit {
            f64::NEG_INFINITY
        } else {
            value
        };
        Number::FloatingPoint { value, width }
    }

    fn int_min_value(width: ByteSize, signed: bool) -> BigInt {
        if signed {
            -(BigInt::one() << (width.as_bit_length() - 1))
        } else {
            BigInt::zero()
        }
    }

    fn int_max_value(width: ByteSize, signed: bool) -> BigInt {
        if signed {
            (BigInt::one() << (width.as_bit_length() - 1)) - 1
        } else {
            (BigInt::one() << width.as_bit_length()) - 1
        }
    }

    fn float_limit(width: ByteSize) -> f64 {
        if u64::from(width) == 4 {
            f32::MAX as f64
        } else {
            f64::MAX
        }
    }

    /// Truncate a finite float toward zero and return the exact result.
    pub fn float_to_int(value: f64) -> BigInt {
        BigInt::from_f64(value.trunc()).unwrap_or_default()
    }

    /// Convert an exact integer magnitude to the nearest `f64`.
    pub fn int_to_float_raw(value: &BigInt) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    /// Get the byte width of the value's type.
    pub fn width(&self) -> ByteSize {
        match self {
            Number::Integral { width, .. } | Number::FloatingPoint { width, .. } => *width,
        }
    }

    /// Get the bit width of the value's type.
    pub fn bit_length(&self) -> usize {
        self.width().as_bit_length()
    }

    /// Get the signedness of the value's type. Panics for floats.
    pub fn sign(&self) -> bool {
        match self {
            Number::Integral { signed, .. } => *signed,
            Number::FloatingPoint { .. } => panic!("sign() called on a floating-point value"),
        }
    }

    /// Get the exact magnitude of an integral value. Panics for floats.
    pub fn get_int(&self) -> &BigInt {
        match self {
            Number::Integral { value, .. } => value,
            Number::FloatingPoint { .. } => panic!("get_int() called on a floating-point value"),
        }
    }

    /// Get the magnitude of a floating-point value. Panics for integers.
    pub fn get_float(&self) -> f64 {
        match self {
            Number::FloatingPoint { value, .. } => *value,
            Number::Integral { .. } => panic!("get_float() called on an integral value"),
        }
    }

    /// Returns whether the value is of an integral type.
    pub fn is_integral(&self) -> bool {
        matches!(self, Number::Integral { .. })
    }

    /// Returns whether the value is of a floating-point type.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, Number::FloatingPoint { .. })
    }

    /// Returns whether the value is of a signed integral type.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Number::Integral {
                signed: true,
                ..
            }
        )
    }

    /// Returns whether the value is of an unsigned integral type.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Number::Integral {
                signed: false,
                ..
            }
        )
    }

    /// Returns whether the value is a floating-point NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::FloatingPoint { value, .. } if value.is_nan())
    }

    /// Returns whether the value is the floating-point positive infinity.
    pub fn is_positive_inf(&self) -> bool {
        matches!(
            self,
            Number::FloatingPoint { value, .. } if value.is_infinite() && value.is_sign_positive()
        )
    }

    /// Returns whether the value is the floating-point negative infinity.
    pub fn is_negative_inf(&self) -> bool {
        matches!(
            self,
            Number::FloatingPoint { value, .. } if value.is_infinite() && value.is_sign_negative()
        )
    }

    /// Returns whether the value is an infinity.
    pub fn is_inf(&self) -> bool {
        self.is_positive_inf() || self.is_negative_inf()
    }

    /// Returns whether the value is an ordinary number,
    /// i.e. neither an infinity nor NaN. True for all integral values.
    pub fn is_number(&self) -> bool {
        !self.is_inf() && !self.is_nan()
    }

    /// Returns whether the value is the minimum of its type.
    pub fn is_min(&self) -> bool {
        match self {
            Number::Integral {
                value,
                width,
                signed,
            } => *value == Self::int_min_value(*width, *signed),
            Number::FloatingPoint { value, width } => *value == -Self::float_limit(*width),
        }
    }

    /// Returns whether the value is the maximum of its type.
    pub fn is_max(&self) -> bool {
        match self {
            Number::Integral {
                value,
                width,
                signed,
            } => *value == Self::int_max_value(*width, *signed),
            Number::FloatingPoint { value, width } => *value == Self::float_limit(*width),
        }
    }

    /// C truthiness of the value. Note that NaN is truthy, since `NaN != 0`.
    pub fn to_bool(&self) -> bool {
        match self {
            Number::Integral { value, .. } => !value.is_zero(),
            Number::FloatingPoint { value, .. } => *value != 0.0,
        }
    }

    /// Get the minimal finite value of the value's type.
    pub fn get_min(&self) -> Number {
        match self {
            Number::Integral { width, signed, .. } => Number::Integral {
                value: Self::int_min_value(*width, *signed),
                width: *width,
                signed: *signed,
            },
            Number::FloatingPoint { width, .. } => Number::FloatingPoint {
                value: -Self::float_limit(*width),
                width: *width,
            },
        }
    }

    /// Get the maximal finite value of the value's type.
    pub fn get_max(&self) -> Number {
        match self {
            Number::Integral { width, signed, .. } => Number::Integral {
                value: Self::int_max_value(*width, *signed),
                width: *width,
                signed: *signed,
            },
            Number::FloatingPoint { width, .. } => Number::FloatingPoint {
                value: Self::float_limit(*width),
                width: *width,
            },
        }
    }

    /// Get the smallest representable step of the value's type:
    /// one for integral types, the smallest positive normal value for floats.
    pub fn get_epsilon(&self) -> Number {
        match self {
            Number::Integral { width, signed, .. } => Number::new_int(1, *width, *signed),
            Number::FloatingPoint { width, .. } => {
                let epsilon = if u64::from(*width) == 4 {
                    f32::MIN_POSITIVE as f64
                } else {
                    f64::MIN_POSITIVE
                };
                Number::FloatingPoint {
                    value: epsilon,
                    width: *width,
                }
            }
        }
    }

    /// Get a NaN of the value's type. Panics for integral values.
    pub fn get_nan(&self) -> Number {
        assert!(self.is_floating_point(), "get_nan() requires a float type");
        Number::FloatingPoint {
            value: f64::NAN,
            width: self.width(),
        }
    }

    /// Get the positive infinity of the value's type. Panics for integral values.
    pub fn get_positive_inf(&self) -> Number {
        assert!(
            self.is_floating_point(),
            "get_positive_inf() requires a float type"
        );
        Number::FloatingPoint {
            value: f64::INFINITY,
            width: self.width(),
        }
    }

    /// Get the negative infinity of the value's type. Panics for integral values.
    pub fn get_negative_inf(&self) -> Number {
        assert!(
            self.is_floating_point(),
            "get_negative_inf() requires a float type"
        );
        Number::FloatingPoint {
            value: f64::NEG_INFINITY,
            width: self.width(),
        }
    }

    /// Apply the C99 integral promotion:
    /// integral types narrower than `int` are converted to 4-byte signed.
    pub fn integral_promotion(&self) -> Number {
        match self {
            Number::Integral { value, width, .. } if *width < ByteSize::new(4) => {
                Number::new_int(value.clone(), ByteSize::new(4), true)
            }
            _ => self.clone(),
        }
    }

    /// Convert the value of `source` into the type of `self`,
    /// mirroring a C assignment.
    ///
    /// Integer destinations re-fit the source magnitude with modular
    /// arithmetic. A float source that does not fit the integer destination
    /// maps to the destination's minimum, matching what compiled code does on
    /// the modeled target; this includes NaN and the infinities.
    pub fn assign(&self, source: &Number) -> Number {
        match (self, source) {
            (Number::Integral { width, signed, .. }, Number::Integral { value, .. }) => {
                Number::new_int(value.clone(), *width, *signed)
            }
            (Number::Integral { width, signed, .. }, Number::FloatingPoint { value, .. }) => {
                let min = Self::int_min_value(*width, *signed);
                let max = Self::int_max_value(*width, *signed);
                if value.is_nan()
                    || *value < Self::int_to_float_raw(&min)
                    || *value > Self::int_to_float_raw(&max)
                {
                    Number::Integral {
                        value: min,
                        width: *width,
                        signed: *signed,
                    }
                } else {
                    Number::new_int(Self::float_to_int(*value), *width, *signed)
                }
            }
            (Number::FloatingPoint { width, .. }, Number::Integral { value, .. }) => {
                Number::new_float(Self::int_to_float_raw(value), *width)
            }
            (Number::FloatingPoint { width, .. }, Number::FloatingPoint { value, .. }) => {
                Number::new_float(*value, *width)
            }
        }
    }

    /// Apply the C99 usual arithmetic conversions to an operand pair and
    /// return the converted pair in the original operand order.
    ///
    /// Afterwards both values have the same type: the wider floating-point
    /// type if a float is involved, otherwise the common integral type after
    /// integral promotion (unsigned wins on equal width, a strictly wider
    /// signed type absorbs an unsigned operand).
    pub fn usual_arithmetic_conversions(lhs: &Number, rhs: &Number) -> (Number, Number) {
        let mut first = lhs.clone();
        let mut second = rhs.clone();
        // Order the pair so the dominating type comes first: float before
        // integral, wider before narrower, unsigned before signed on equal
        // width. The original order is restored before returning.
        let mut swapped = false;
        if first.is_floating_point() && second.is_floating_point() {
            if second.width() > first.width() {
                std::mem::swap(&mut first, &mut second);
                swapped = true;
            }
        } else if first.is_integral() && second.is_integral() {
            if second.width() > first.width()
                || (second.width() == first.width() && first.is_signed() && second.is_unsigned())
            {
                std::mem::swap(&mut first, &mut second);
                swapped = true;
            }
        } else if second.is_floating_point() {
            std::mem::swap(&mut first, &mut second);
            swapped = true;
        }

        if first.is_floating_point() {
            second = first.assign(&second);
        } else {
            first = first.integral_promotion();
            second = second.integral_promotion();
            if first.sign() == second.sign() {
                if first.width() > second.width() {
                    second = first.assign(&second);
                }
            } else if first.is_unsigned() {
                second = first.assign(&second);
            } else if first.width() > second.width() {
                second = first.assign(&second);
            } else {
                first = second.assign(&first);
            }
        }
        if swapped {
            (second, first)
        } else {
            (first, second)
        }
    }

    /// Compute the negation of the value.
    /// Integral operands are promoted first, a signed minimum wraps to itself.
    pub fn neg_value(&self) -> Number {
        match self {
            Number::Integral { .. } => match self.integral_promotion() {
                Number::Integral {
                    value,
                    width,
                    signed,
                } => Number::new_int(-value, width, signed),
                Number::FloatingPoint { .. } => unreachable!(),
            },
            Number::FloatingPoint { value, width } => Number::FloatingPoint {
                value: -value,
                width: *width,
            },
        }
    }

    /// Compute the sum of the two values.
    pub fn add_value(&self, rhs: &Number) -> Number {
        match Number::usual_arithmetic_conversions(self, rhs) {
            (
                Number::Integral {
                    value: lhs,
                    width,
                    signed,
                },
                Number::Integral { value: rhs, .. },
            ) => Number::new_int(lhs + rhs, width, signed),
            (
                Number::FloatingPoint { value: lhs, width },
                Number::FloatingPoint { value: rhs, .. },
            ) => Number::new_float(lhs + rhs, width),
            _ => panic!("mismatched operand kinds after the usual arithmetic conversions"),
        }
    }

    /// Compute the difference of the two values.
    pub fn sub_value(&self, rhs: &Number) -> Number {
        match Number::usual_arithmetic_conversions(self, rhs) {
            (
                Number::Integral {
                    value: lhs,
                    width,
                    signed,
                },
                Number::Integral { value: rhs, .. },
            ) => Number::new_int(lhs - rhs, width, signed),
            (
                Number::FloatingPoint { value: lhs, width },
                Number::FloatingPoint { value: rhs, .. },
            ) => Number::new_float(lhs - rhs, width),
            _ => panic!("mismatched operand kinds after the usual arithmetic conversions"),
        }
    }

    /// Compute the product of the two values.
    pub fn mul_value(&self, rhs: &Number) -> Number {
        match Number::usual_arithmetic_conversions(self, rhs) {
            (
                Number::Integral {
                    value: lhs,
                    width,
                    signed,
                },
                Number::Integral { value: rhs, .. },
            ) => Number::new_int(lhs * rhs, width, signed),
            (
                Number::FloatingPoint { value: lhs, width },
                Number::FloatingPoint { value: rhs, .. },
            ) => Number::new_float(lhs * rhs, width),
            _ => panic!("mismatched operand kinds after the usual arithmetic conversions"),
        }
    }

    /// Compute the floating-point quotient of the two values.
    ///
    /// Follows IEEE-754: `x / ±0` is an infinity for `x != 0`,
    /// `0 / 0` and `Inf / Inf` are NaN. Panics for integral operands.
    pub fn rdiv(&self, rhs: &Number) -> Number {
        match Number::usual_arithmetic_conversions(self, rhs) {
            (
                Number::FloatingPoint { value: lhs, width },
                Number::FloatingPoint { value: rhs, .. },
            ) => Number::new_float(lhs / rhs, width),
            _ => panic!("rdiv requires floating-point operands"),
        }
    }

    /// Compute the quotient of two integral values
    /// where the division is known to have no remainder.
    pub fn exact_div(&self, rhs: &Number) -> Number {
        assert!(
            self.is_integral() && rhs.is_integral(),
            "exact_div requires integral operands"
        );
        self.perform_trunc(rhs, false)
    }

    /// Compute the quotient of two integral values, truncated toward zero.
    /// Panics for a zero divisor.
    pub fn trunc_div(&self, rhs: &Number) -> Number {
        assert!(
            self.is_integral() && rhs.is_integral(),
            "trunc_div requires integral operands"
        );
        self.perform_trunc(rhs, false)
    }

    /// Compute the remainder of the truncated division of two integral
    /// values. The result carries the sign of the dividend.
    /// Panics for a zero divisor.
    pub fn trunc_mod(&self, rhs: &Number) -> Number {
        assert!(
            self.is_integral() && rhs.is_integral(),
            "trunc_mod requires integral operands"
        );
        self.perform_trunc(rhs, true)
    }

    fn perform_trunc(&self, rhs: &Number, modulo: bool) -> Number {
        match Number::usual_arithmetic_conversions(self, rhs) {
            (
                Number::Integral {
                    value: lhs,
                    width,
                    signed,
                },
                Number::Integral { value: rhs, .. },
            ) => {
                assert!(!rhs.is_zero(), "integral division by zero");
                let result = if modulo { lhs % rhs } else { lhs / rhs };
                Number::new_int(result, width, signed)
            }
            _ => panic!("truncated division requires integral operands"),
        }
    }

    /// C logical negation of the value.
    pub fn logical_not(&self) -> bool {
        !self.to_bool()
    }

    /// C logical conjunction of the two values.
    pub fn logical_and(&self, rhs: &Number) -> bool {
        self.to_bool() && rhs.to_bool()
    }

    /// C logical disjunction of the two values.
    pub fn logical_or(&self, rhs: &Number) -> bool {
        self.to_bool() || rhs.to_bool()
    }

    /// Logical exclusive or of the two values.
    pub fn logical_xor(&self, rhs: &Number) -> bool {
        self.to_bool() != rhs.to_bool()
    }

    /// Compute the bitwise complement of an integral value
    /// after integral promotion.
    pub fn bit_not(&self) -> Number {
        assert!(
            self.is_integral(),
            "bitwise operations require integral operands"
        );
        match self.integral_promotion() {
            Number::Integral {
                value,
                width,
                signed,
            } => Number::new_int(!value, width, signed),
            Number::FloatingPoint { .. } => unreachable!(),
        }
    }

    /// Compute the bitwise conjunction of two integral values.
    pub fn bit_and(&self, rhs: &Number) -> Number {
        self.perform_bit_op(rhs, |lhs, rhs| lhs & rhs)
    }

    /// Compute the bitwise disjunction of two integral values.
    pub fn bit_or(&self, rhs: &Number) -> Number {
        self.perform_bit_op(rhs, |lhs, rhs| lhs | rhs)
    }

    /// Compute the bitwise exclusive or of two integral values.
    pub fn bit_xor(&self, rhs: &Number) -> Number {
        self.perform_bit_op(rhs, |lhs, rhs| lhs ^ rhs)
    }

    fn perform_bit_op<F>(&self, rhs: &Number, op: F) -> Number
    where
        F: FnOnce(BigInt, BigInt) -> BigInt,
    {
        assert!(
            self.is_integral() && rhs.is_integral(),
            "bitwise operations require integral operands"
        );
        // BigInt bit operations act on the infinite two's complement
        // representation, which coincides with the fixed-width result
        // after the fit step.
        match Number::usual_arithmetic_conversions(self, rhs) {
            (
                Number::Integral {
                    value: lhs,
                    width,
                    signed,
                },
                Number::Integral { value: rhs, .. },
            ) => Number::new_int(op(lhs, rhs), width, signed),
            _ => unreachable!(),
        }
    }

    /// Compute the left shift of `self` by `rhs` bits.
    ///
    /// Panics for a negative shift amount or an amount that is not smaller
    /// than the bit width of the promoted left operand, mirroring the
    /// undefined-behavior boundaries of the C shift operators.
    pub fn bit_left_shift(&self, rhs: &Number) -> Number {
        self.perform_shift(rhs, true)
    }

    /// Compute the right shift of `self` by `rhs` bits.
    /// The shift is arithmetic for signed operands and logical for unsigned
    /// ones. The same panics as for [`Number::bit_left_shift`] apply.
    pub fn bit_right_shift(&self, rhs: &Number) -> Number {
        self.perform_shift(rhs, false)
    }

    fn perform_shift(&self, rhs: &Number, left: bool) -> Number {
        assert!(
            self.is_integral() && rhs.is_integral(),
            "shifts require integral operands"
        );
        assert!(
            !rhs.get_int().is_negative(),
            "shift amount must be non-negative"
        );
        let lhs = self.integral_promotion();
        let rhs = rhs.integral_promotion();
        let bit_length = BigInt::from(lhs.bit_length());
        assert!(
            rhs.get_int() < &bit_length,
            "shift amount must be smaller than the bit width of the shifted operand"
        );
        let amount = rhs.get_int().to_usize().unwrap();
        match lhs {
            Number::Integral {
                value,
                width,
                signed,
            } => {
                let shifted = if left { value << amount } else { value >> amount };
                Number::new_int(shifted, width, signed)
            }
            Number::FloatingPoint { .. } => unreachable!(),
        }
    }

    /// Strict less-than comparison of the two values.
    /// Always false if an operand is NaN.
    pub fn lt(&self, rhs: &Number) -> bool {
        if self.is_nan() || rhs.is_nan() {
            return false;
        }
        match Number::usual_arithmetic_conversions(self, rhs) {
            (Number::Integral { value: lhs, .. }, Number::Integral { value: rhs, .. }) => lhs < rhs,
            (Number::FloatingPoint { value: lhs, .. }, Number::FloatingPoint { value: rhs, .. }) => {
                lhs < rhs
            }
            _ => unreachable!(),
        }
    }

    /// Strict greater-than comparison of the two values.
    /// Always false if an operand is NaN.
    pub fn gt(&self, rhs: &Number) -> bool {
        if self.is_nan() || rhs.is_nan() {
            return false;
        }
        match Number::usual_arithmetic_conversions(self, rhs) {
            (Number::Integral { value: lhs, .. }, Number::Integral { value: rhs, .. }) => lhs > rhs,
            (Number::FloatingPoint { value: lhs, .. }, Number::FloatingPoint { value: rhs, .. }) => {
                lhs > rhs
            }
            _ => unreachable!(),
        }
    }

    /// Less-or-equal comparison of the two values,
    /// evaluated as `self < rhs || self == rhs`.
    pub fn le(&self, rhs: &Number) -> bool {
        self.lt(rhs) || self == rhs
    }

    /// Greater-or-equal comparison of the two values,
    /// evaluated as `self > rhs || self == rhs`.
    pub fn ge(&self, rhs: &Number) -> bool {
        self.gt(rhs) || self == rhs
    }
}

impl PartialEq for Number {
    /// Equality of the two values after the usual arithmetic conversions.
    ///
    /// NaN never compares equal to anything (including itself), infinities
    /// compare by identity and finite floats with a relative epsilon,
    /// since exact `f64` equality would make values differing only by float
    /// rounding compare unequal.
    fn eq(&self, rhs: &Number) -> bool {
        if self.is_nan() || rhs.is_nan() {
            return false;
        }
        let (lhs, rhs) = Number::usual_arithmetic_conversions(self, rhs);
        match (&lhs, &rhs) {
            (Number::Integral { value: lhs, .. }, Number::Integral { value: rhs, .. }) => {
                lhs == rhs
            }
            (Number::FloatingPoint { value: a, .. }, Number::FloatingPoint { value: b, .. }) => {
                if lhs.is_negative_inf() {
                    rhs.is_negative_inf()
                } else if lhs.is_positive_inf() {
                    rhs.is_positive_inf()
                } else {
                    (a - b).abs() <= 1e-5 * a.abs()
                }
            }
            _ => false,
        }
    }
}

/// Compute the absolute value of a signed integral value.
/// Note that the absolute value of the type minimum wraps back to itself.
pub fn abs(op: &Number) -> Number {
    assert!(op.is_signed(), "abs requires a signed integral operand");
    if op.get_int().is_negative() {
        op.neg_value()
    } else {
        op.clone()
    }
}

/// Convert an integral value to a 4-byte float,
/// rounding to the nearest representable `f32` value.
pub fn int_to_float(op: &Number) -> Number {
    assert!(op.is_integral(), "int_to_float requires an integral operand");
    let value = Number::int_to_float_raw(op.get_int()) as f32;
    Number::new_float(value as f64, ByteSize::new(4))
}

/// The smaller of the two values after the usual arithmetic conversions.
pub fn min(lhs: &Number, rhs: &Number) -> Number {
    let (lhs, rhs) = Number::usual_arithmetic_conversions(lhs, rhs);
    if lhs.le(&rhs) {
        lhs
    } else {
        rhs
    }
}

/// The larger of the two values after the usual arithmetic conversions.
pub fn max(lhs: &Number, rhs: &Number) -> Number {
    let (lhs, rhs) = Number::usual_arithmetic_conversions(lhs, rhs);
    if lhs.ge(&rhs) {
        lhs
    } else {
        rhs
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.neg_value()
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.add_value(&rhs)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.sub_value(&rhs)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.mul_value(&rhs)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integral { value, .. } => write!(formatter, "{value}"),
            Number::FloatingPoint { value, .. } => write!(formatter, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests;
