use super::*;
use crate::abstract_domain::number;
use crate::intermediate_representation::{BinOpType, UnOpType};
use crate::prelude::*;
use num_bigint::BigInt;
use num_traits::{One, Signed};
use std::ops::{Add, Mul, Neg, Sub};

/// Wrap a boolean comparison result into a 4-byte signed value.
fn bool_number(value: bool) -> Number {
    Number::new_int(i64::from(value), ByteSize::new(4), true)
}

/// The `{0}` point interval used for definitely-false comparison results.
fn false_interval() -> Interval {
    let zero = bool_number(false);
    Interval::new(zero.clone(), zero)
}

/// Push the two truth values of `r1 < r2` derived from the global bounds:
/// whether some value of r1 may be below some value of r2 and whether every
/// value of r1 is certainly below every value of r2.
fn push_lt_outcomes(
    result: &mut Vec<Interval>,
    r1_min: &Number,
    r1_max: &Number,
    r2_min: &Number,
    r2_max: &Number,
) {
    let possible = bool_number(r1_min.lt(r2_max));
    let certain = bool_number(r1_max.lt(r2_min));
    result.push(Interval::new(possible.clone(), possible));
    result.push(Interval::new(certain.clone(), certain));
}

impl Range {
    /// Negate every value in the range.
    ///
    /// A signed `(MIN, MIN)` point maps to itself; an interval starting at
    /// the type minimum splits into the minimum point and the negation of
    /// the rest.
    pub fn neg_value(&self) -> Range {
        assert!(!self.is_empty(), "negation of an empty range");
        let mut result = Vec::new();
        if self.is_integral() {
            for interval in self.iter() {
                let x = &interval.start;
                let y = &interval.end;
                if x.is_min() {
                    if y.is_min() {
                        result.push(interval.clone());
                    } else {
                        let one = x.assign(&Number::new_int(1, ByteSize::new(1), true));
                        result.push(Interval::new(x.clone(), x.clone()));
                        result.push(Interval::new(
                            y.neg_value(),
                            x.add_value(&one).neg_value(),
                        ));
                    }
                } else {
                    result.push(Interval::new(y.neg_value(), x.neg_value()));
                }
            }
        } else {
            for interval in self.iter() {
                result.push(Interval::new(
                    interval.end.neg_value(),
                    interval.start.neg_value(),
                ));
            }
        }
        Range::from_intervals(result)
    }

    /// Add the two ranges.
    ///
    /// Computed per pair of special-value-split sub-intervals from a fixed
    /// corner set; the single-sided corners keep the result sound when one
    /// of the sums wraps around the type limits.
    pub fn add_value(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "addition of an empty range"
        );
        let r1 = self.split_by_special_values();
        let r2 = rhs.split_by_special_values();
        let mut result = Vec::new();
        for lhs in r1.iter() {
            for rhs in r2.iter() {
                let x = &lhs.start;
                let y = &lhs.end;
                let z = &rhs.start;
                let w = &rhs.end;
                result.push(Interval::new(x.add_value(z), y.add_value(w)));
                result.push(Interval::new(x.add_value(z), x.add_value(w)));
                result.push(Interval::new(y.add_value(z), y.add_value(w)));
                result.push(Interval::new(z.add_value(x), z.add_value(y)));
                result.push(Interval::new(w.add_value(x), w.add_value(y)));
            }
        }
        Range::from_intervals(result)
    }

    /// Subtract `rhs` from the range, with the same corner-set scheme as
    /// [`Range::add_value`]. The single-point corners guard against bound
    /// inversion when a difference wraps around the type limits.
    pub fn sub_value(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "subtraction of an empty range"
        );
        let r1 = self.split_by_special_values();
        let r2 = rhs.split_by_special_values();
        let mut result = Vec::new();
        for lhs in r1.iter() {
            for rhs in r2.iter() {
                let x = &lhs.start;
                let y = &lhs.end;
                let z = &rhs.start;
                let w = &rhs.end;
                result.push(Interval::new(x.sub_value(z), y.sub_value(z)));
                result.push(Interval::new(x.sub_value(w), y.sub_value(z)));
                result.push(Interval::new(x.sub_value(w), y.sub_value(w)));
                result.push(Interval::new(x.sub_value(z), x.sub_value(z)));
                result.push(Interval::new(x.sub_value(w), x.sub_value(w)));
                result.push(Interval::new(y.sub_value(z), y.sub_value(z)));
                result.push(Interval::new(y.sub_value(w), y.sub_value(w)));
            }
        }
        Range::from_intervals(result)
    }

    /// Multiply the two ranges.
    ///
    /// Integral operands get an exact quadrant analysis on the unbounded
    /// magnitudes: each special-value-split sub-interval is sign-uniform, so
    /// the extremal products are known per quadrant. If their exact span
    /// reaches the modulus of the common type, the fixed-width products
    /// cover everything and the result escapes to the maximal range.
    /// Floating-point multiplication takes plain four-corner bounds.
    pub fn mul_value(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "multiplication of an empty range"
        );
        let r1 = self.split_by_special_values();
        let r2 = rhs.split_by_special_values();
        let mut result = Vec::new();
        if r1.is_integral() && r2.is_integral() {
            for lhs in r1.iter() {
                for rhs in r2.iter() {
                    let x = lhs.start.get_int();
                    let y = lhs.end.get_int();
                    let z = rhs.start.get_int();
                    let w = rhs.end.get_int();
                    let (lower, upper) = match (!x.is_negative(), !z.is_negative()) {
                        (true, true) => (x * z, y * w),
                        (true, false) => (y * z, x * w),
                        (false, true) => (x * w, y * z),
                        (false, false) => (y * w, x * z),
                    };
                    let type_template = lhs.start.mul_value(&rhs.start);
                    let type_min = type_template.get_min();
                    let type_max = type_template.get_max();
                    let scope = type_max.get_int() - type_min.get_int() + BigInt::one();
                    if &upper - &lower >= scope {
                        debug!("product interval spans the whole result type");
                        return Range::max_range(&type_template);
                    }
                    result.push(Interval::new(
                        Number::new_int(lower, type_template.width(), type_template.sign()),
                        Number::new_int(upper, type_template.width(), type_template.sign()),
                    ));
                }
            }
        } else {
            for lhs in r1.iter() {
                for rhs in r2.iter() {
                    let c1 = lhs.start.mul_value(&rhs.start);
                    let c2 = lhs.start.mul_value(&rhs.end);
                    let c3 = lhs.end.mul_value(&rhs.start);
                    let c4 = lhs.end.mul_value(&rhs.end);
                    let lower = number::min(&number::min(&c1, &c2), &number::min(&c3, &c4));
                    let upper = number::max(&number::max(&c1, &c2), &number::max(&c3, &c4));
                    result.push(Interval::new(lower, upper));
                }
            }
        }
        Range::from_intervals(result)
    }

    /// Divide the two floating-point ranges following IEEE-754.
    ///
    /// Both operands are split by special values and by zero, so each
    /// divisor sub-interval is sign-uniform and zero only ever occurs as an
    /// exact `[0, 0]` point; the per-pair corner quotients then cover the
    /// signed-zero, infinity and NaN cases through [`Number::rdiv`].
    pub fn rdiv(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "division of an empty range"
        );
        assert!(
            self.is_floating_point() && rhs.is_floating_point(),
            "rdiv requires floating-point operands"
        );
        let (r1, r2) = Range::usual_arithmetic_conversions(self, rhs);
        let r1 = r1.split_by_special_values().split_by_zero();
        let r2 = r2.split_by_special_values().split_by_zero();
        let mut result = Vec::new();
        for lhs in r1.iter() {
            for rhs in r2.iter() {
                let xw = lhs.start.rdiv(&rhs.end);
                let xz = lhs.start.rdiv(&rhs.start);
                result.push(Interval::new(pick_min(&xw, &xz), pick_max(&xw, &xz)));
                let yw = lhs.end.rdiv(&rhs.end);
                let yz = lhs.end.rdiv(&rhs.start);
                result.push(Interval::new(pick_min(&yw, &yz), pick_max(&yw, &yz)));
            }
        }
        Range::from_intervals(result)
    }

    /// Divide the two integral ranges,
    /// where the division is known to have no remainder.
    pub fn exact_div(&self, rhs: &Range) -> Range {
        self.perform_integral_div(rhs, Number::exact_div)
    }

    /// Divide the two integral ranges, truncating each quotient toward zero.
    pub fn trunc_div(&self, rhs: &Range) -> Range {
        self.perform_integral_div(rhs, Number::trunc_div)
    }

    fn perform_integral_div(&self, rhs: &Range, div: fn(&Number, &Number) -> Number) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "division of an empty range"
        );
        assert!(
            self.is_integral() && rhs.is_integral(),
            "integral division requires integral operands"
        );
        if rhs.contains_zero() {
            debug!("divisor range contains zero");
            return Range::over_approximate_binary_op(self, rhs);
        }
        let (r1, r2) = Range::usual_arithmetic_conversions(self, rhs);
        let r1 = r1.split_by_special_values();
        let r2 = r2.split_by_special_values();
        if r1.is_signed() && r1.contains_integral_min() && r2.contains_integral_minus_one() {
            debug!("possible division of the type minimum by -1");
            return Range::over_approximate_binary_op(&r1, &r2);
        }
        let mut result = Vec::new();
        for lhs in r1.iter() {
            for rhs in r2.iter() {
                let xw = div(&lhs.start, &rhs.end);
                let xz = div(&lhs.start, &rhs.start);
                result.push(Interval::new(pick_min(&xw, &xz), pick_max(&xw, &xz)));
                let yw = div(&lhs.end, &rhs.end);
                let yz = div(&lhs.end, &rhs.start);
                result.push(Interval::new(pick_min(&yw, &yz), pick_max(&yw, &yz)));
            }
        }
        Range::from_intervals(result)
    }

    /// Compute the remainder range of the truncated division of two
    /// integral ranges.
    ///
    /// The image of `%` over an interval is not monotone in the interval
    /// bounds, so each dividend sub-interval contributes the full remainder
    /// bracket of its sign: `(x, 0)` for negative dividends and `(0, y)`
    /// for nonnegative ones.
    pub fn trunc_mod(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "division of an empty range"
        );
        assert!(
            self.is_integral() && rhs.is_integral(),
            "trunc_mod requires integral operands"
        );
        if rhs.contains_zero() {
            debug!("divisor range contains zero");
            return Range::over_approximate_binary_op(self, rhs);
        }
        let (r1, r2) = Range::usual_arithmetic_conversions(self, rhs);
        let r1 = r1.split_by_special_values().split_by_zero();
        let r2 = r2.split_by_special_values().split_by_zero();
        if r1.is_signed() && r1.contains_integral_min() && r2.contains_integral_minus_one() {
            debug!("possible division of the type minimum by -1");
            return Range::over_approximate_binary_op(&r1, &r2);
        }
        let mut result = Vec::new();
        for lhs in r1.iter() {
            let x = &lhs.start;
            let y = &lhs.end;
            let zero = x.assign(&Number::new_int(0, ByteSize::new(1), true));
            if x.lt(&zero) {
                result.push(Interval::new(x.clone(), zero));
            } else {
                result.push(Interval::new(zero, y.clone()));
            }
        }
        Range::from_intervals(result)
    }

    /// Over-approximate the result of a unary operation by the maximal
    /// range of the promoted operand type.
    pub fn over_approximate_unary_op(operand: &Range) -> Range {
        assert!(
            !operand.is_empty() && operand.is_integral(),
            "over-approximation requires a non-empty integral operand"
        );
        let (promoted, _) = Range::usual_arithmetic_conversions(operand, operand);
        Range::max_range(&promoted[0].start)
    }

    /// Over-approximate the result of a binary operation by the maximal
    /// range of the converted common operand type.
    pub fn over_approximate_binary_op(lhs: &Range, rhs: &Range) -> Range {
        assert!(
            !lhs.is_empty() && !rhs.is_empty(),
            "over-approximation of an empty range"
        );
        let (converted, _) = Range::usual_arithmetic_conversions(lhs, rhs);
        Range::max_range(&converted[0].start)
    }

    /// Compute the bitwise complement of the range. Only a single-valued
    /// range yields an exact result.
    pub fn bit_not(&self) -> Range {
        assert!(
            !self.is_empty() && self.is_integral(),
            "bitwise operations require non-empty integral operands"
        );
        if !self.contains_only_single_number() {
            debug!("bitwise complement of a multi-valued range");
            return Range::over_approximate_unary_op(self);
        }
        Range::from(self[0].start.bit_not())
    }

    /// Compute the bitwise conjunction of the two ranges. Only a pair of
    /// single-valued ranges yields an exact result.
    pub fn bit_and(&self, rhs: &Range) -> Range {
        self.perform_bit_op(rhs, Number::bit_and)
    }

    /// Compute the bitwise disjunction of the two ranges. Only a pair of
    /// single-valued ranges yields an exact result.
    pub fn bit_or(&self, rhs: &Range) -> Range {
        self.perform_bit_op(rhs, Number::bit_or)
    }

    /// Compute the bitwise exclusive or of the two ranges. Only a pair of
    /// single-valued ranges yields an exact result.
    pub fn bit_xor(&self, rhs: &Range) -> Range {
        self.perform_bit_op(rhs, Number::bit_xor)
    }

    fn perform_bit_op(&self, rhs: &Range, op: fn(&Number, &Number) -> Number) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "bitwise operation on an empty range"
        );
        assert!(
            self.is_integral() && rhs.is_integral(),
            "bitwise operations require integral operands"
        );
        if !self.contains_only_single_number() || !rhs.contains_only_single_number() {
            debug!("bitwise operation on multi-valued ranges");
            return Range::over_approximate_binary_op(self, rhs);
        }
        Range::from(op(&self[0].start, &rhs[0].start))
    }

    /// Compute the left shift of the range by `rhs` bits. Only a pair of
    /// single-valued ranges with an amount strictly below the left
    /// operand's bit width yields an exact result.
    pub fn bit_left_shift(&self, rhs: &Range) -> Range {
        self.perform_shift(rhs, Number::bit_left_shift)
    }

    /// Compute the right shift of the range by `rhs` bits, with the same
    /// exactness conditions as [`Range::bit_left_shift`].
    pub fn bit_right_shift(&self, rhs: &Range) -> Range {
        self.perform_shift(rhs, Number::bit_right_shift)
    }

    fn perform_shift(&self, rhs: &Range, shift: fn(&Number, &Number) -> Number) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "shift of an empty range"
        );
        assert!(
            self.is_integral() && rhs.is_integral(),
            "shifts require integral operands"
        );
        if !self.contains_only_single_number() || !rhs.contains_only_single_number() {
            debug!("shift with multi-valued operands");
            return Range::over_approximate_binary_op(self, rhs);
        }
        // Shifting by the declared width or more is undefined in C,
        // so such amounts never reach the exact computation.
        let bit_length = Number::new_int(
            self[0].start.bit_length(),
            rhs[0].start.width(),
            true,
        );
        if rhs[0].start.ge(&bit_length) {
            debug!("shift amount may reach the operand's bit width");
            return Range::over_approximate_binary_op(self, rhs);
        }
        Range::from(shift(&self[0].start, &rhs[0].start))
    }

    /// Rotate the bits of the range to the left. Rotations carry no simple
    /// interval pattern, so the result is always over-approximated.
    pub fn bit_left_rotate(&self, rhs: &Range) -> Range {
        debug!("bit rotation is always over-approximated");
        Range::over_approximate_binary_op(self, rhs)
    }

    /// Rotate the bits of the range to the right. Rotations carry no simple
    /// interval pattern, so the result is always over-approximated.
    pub fn bit_right_rotate(&self, rhs: &Range) -> Range {
        debug!("bit rotation is always over-approximated");
        Range::over_approximate_binary_op(self, rhs)
    }

    /// C logical negation of the range,
    /// as a boolean-valued range drawn from `{0}`, `{1}` or `{0, 1}`.
    pub fn logical_not(&self) -> Range {
        assert!(!self.is_empty(), "logical operation on an empty range");
        let mut result = Vec::new();
        if self.contains_false() {
            let one = bool_number(true);
            result.push(Interval::new(one.clone(), one));
        }
        if self.contains_true() {
            result.push(false_interval());
        }
        Range::from_intervals(result)
    }

    /// C logical conjunction of the two ranges.
    pub fn logical_and(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "logical operation on an empty range"
        );
        let mut result = Vec::new();
        if self.contains_true() && rhs.contains_true() {
            let one = bool_number(true);
            result.push(Interval::new(one.clone(), one));
        }
        if self.contains_false() || rhs.contains_false() {
            result.push(false_interval());
        }
        Range::from_intervals(result)
    }

    /// C logical disjunction of the two ranges.
    pub fn logical_or(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "logical operation on an empty range"
        );
        let mut result = Vec::new();
        if self.contains_true() || rhs.contains_true() {
            let one = bool_number(true);
            result.push(Interval::new(one.clone(), one));
        }
        if self.contains_false() && rhs.contains_false() {
            result.push(false_interval());
        }
        Range::from_intervals(result)
    }

    /// Logical exclusive or of the two ranges.
    pub fn logical_xor(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "logical operation on an empty range"
        );
        let mut result = Vec::new();
        if (self.contains_true() && rhs.contains_false())
            || (self.contains_false() && rhs.contains_true())
        {
            let one = bool_number(true);
            result.push(Interval::new(one.clone(), one));
        }
        if (self.contains_true() && rhs.contains_true())
            || (self.contains_false() && rhs.contains_false())
        {
            result.push(false_interval());
        }
        Range::from_intervals(result)
    }

    /// Evaluate `self == rhs` as a boolean-valued range.
    ///
    /// The result is certainly false for disjoint ranges and certainly true
    /// only for two equal single-point ranges; NaN makes equality always
    /// possibly false.
    pub fn logical_eq(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "comparison of an empty range"
        );
        let mut result = Vec::new();
        if self.contains_nan() || rhs.contains_nan() {
            result.push(false_interval());
        }
        if self.len() > 1
            || rhs.len() > 1
            || self[0].start != self[0].end
            || rhs[0].start != rhs[0].end
        {
            result.push(false_interval());
        } else if self[0].start != rhs[0].start {
            result.push(false_interval());
        }
        // Any overlap of non-NaN intervals makes equality possible.
        'overlap: for lhs in self.iter() {
            if lhs.is_nan() {
                continue;
            }
            for rhs in rhs.iter() {
                if rhs.is_nan() {
                    continue;
                }
                if lhs.start.le(&rhs.end) && rhs.start.le(&lhs.end) {
                    let one = bool_number(true);
                    result.push(Interval::new(one.clone(), one));
                    break 'overlap;
                }
            }
        }
        Range::from_intervals(result)
    }

    /// Evaluate `self != rhs` as a boolean-valued range.
    pub fn logical_neq(&self, rhs: &Range) -> Range {
        self.logical_eq(rhs).logical_not()
    }

    /// Evaluate `self < rhs` as a boolean-valued range, from the global
    /// bounds of both ranges. NaN intervals contribute a certain `0`,
    /// since no comparison with NaN holds.
    pub fn logical_lt(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "comparison of an empty range"
        );
        let mut result = Vec::new();
        match (self.contains_nan(), rhs.contains_nan()) {
            (false, false) => push_lt_outcomes(
                &mut result,
                &self[0].start,
                &self.intervals.last().unwrap().end,
                &rhs[0].start,
                &rhs.intervals.last().unwrap().end,
            ),
            (true, true) => {
                result.push(false_interval());
                if self.len() > 1 && rhs.len() > 1 {
                    push_lt_outcomes(
                        &mut result,
                        &self[1].start,
                        &self.intervals.last().unwrap().end,
                        &rhs[1].start,
                        &rhs.intervals.last().unwrap().end,
                    );
                }
            }
            (true, false) => {
                result.push(false_interval());
                if self.len() > 1 {
                    push_lt_outcomes(
                        &mut result,
                        &self[1].start,
                        &self.intervals.last().unwrap().end,
                        &rhs[0].start,
                        &rhs.intervals.last().unwrap().end,
                    );
                }
            }
            (false, true) => {
                result.push(false_interval());
                if rhs.len() > 1 {
                    push_lt_outcomes(
                        &mut result,
                        &self[0].start,
                        &self.intervals.last().unwrap().end,
                        &rhs[1].start,
                        &rhs.intervals.last().unwrap().end,
                    );
                }
            }
        }
        Range::from_intervals(result)
    }

    /// Evaluate `self > rhs` as a boolean-valued range.
    pub fn logical_gt(&self, rhs: &Range) -> Range {
        rhs.logical_lt(self)
    }

    /// Evaluate `self <= rhs` as a boolean-valued range by combining the
    /// `==` and `<` answers. When every value of `self` is provably less
    /// than or equal to every value of `rhs`, the combined `{0, 1}`
    /// sharpens to a certain `{1}`.
    pub fn logical_le(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "comparison of an empty range"
        );
        let eq_range = self.logical_eq(rhs);
        let lt_range = self.logical_lt(rhs);
        let certainly_false = Range::from(bool_number(false));
        let certainly_true = Range::from(bool_number(true));
        let result = if eq_range == certainly_false {
            lt_range
        } else if eq_range == certainly_true || lt_range == certainly_true {
            certainly_true
        } else if lt_range == certainly_false {
            eq_range
        } else if self
            .intervals
            .last()
            .unwrap()
            .end
            .le(&rhs[0].start)
        {
            certainly_true
        } else {
            eq_range
        };
        result.normalize()
    }

    /// Evaluate `self >= rhs` as a boolean-valued range, with the same
    /// sharpening as [`Range::logical_le`].
    pub fn logical_ge(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "comparison of an empty range"
        );
        let eq_range = self.logical_eq(rhs);
        let gt_range = self.logical_gt(rhs);
        let certainly_false = Range::from(bool_number(false));
        let certainly_true = Range::from(bool_number(true));
        let result = if eq_range == certainly_false {
            gt_range
        } else if eq_range == certainly_true || gt_range == certainly_true {
            certainly_true
        } else if gt_range == certainly_false {
            eq_range
        } else if self[0].start.ge(&rhs.intervals.last().unwrap().end) {
            certainly_true
        } else {
            eq_range
        };
        result.normalize()
    }

    /// Compute the absolute value of a signed integral range.
    /// A contained type minimum stays the type minimum, like in
    /// [`number::abs`].
    pub fn abs(&self) -> Range {
        assert!(
            !self.is_empty() && self.is_signed(),
            "abs requires a non-empty signed integral range"
        );
        let split = self.split_by_special_values();
        let mut result = Vec::new();
        for interval in split.iter() {
            let start = number::abs(&interval.start);
            let end = number::abs(&interval.end);
            if start.le(&end) {
                result.push(Interval::new(start, end));
            } else {
                result.push(Interval::new(end, start));
            }
        }
        Range::from_intervals(result)
    }

    /// Convert an integral range to a 4-byte float range.
    pub fn int_to_float(&self) -> Range {
        assert!(
            !self.is_empty() && self.is_integral(),
            "int_to_float requires a non-empty integral range"
        );
        let intervals = self
            .iter()
            .map(|interval| {
                Interval::new(
                    number::int_to_float(&interval.start),
                    number::int_to_float(&interval.end),
                )
            })
            .collect();
        Range::from_intervals(intervals)
    }

    /// Compute the range of `min(a, b)` over all value pairs by a parallel
    /// scan over the sorted interval lists.
    pub fn min_value(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "min of an empty range"
        );
        let (r1, r2) = Range::usual_arithmetic_conversions(self, rhs);
        let mut result = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < r1.len() && j < r2.len() {
            let x = &r1[i].start;
            let y = &r1[i].end;
            let z = &r2[j].start;
            let w = &r2[j].end;
            if x.le(z) && y.le(w) {
                result.push(r1[i].clone());
                i += 1;
            } else if z.le(x) && w.le(y) {
                result.push(r2[j].clone());
                j += 1;
            } else {
                result.push(Interval::new(number::min(x, z), number::min(y, w)));
                if y.lt(w) {
                    i += 1;
                } else {
                    j += 1;
                }
            }
        }
        Range::from_intervals(result)
    }

    /// Compute the range of `max(a, b)` over all value pairs by a parallel
    /// backward scan over the sorted interval lists.
    pub fn max_value(&self, rhs: &Range) -> Range {
        assert!(
            !self.is_empty() && !rhs.is_empty(),
            "max of an empty range"
        );
        let (r1, r2) = Range::usual_arithmetic_conversions(self, rhs);
        let mut result = Vec::new();
        let mut i = r1.len();
        let mut j = r2.len();
        while i > 0 && j > 0 {
            let x = &r1[i - 1].start;
            let y = &r1[i - 1].end;
            let z = &r2[j - 1].start;
            let w = &r2[j - 1].end;
            if x.ge(z) && y.ge(w) {
                result.push(r1[i - 1].clone());
                i -= 1;
            } else if z.ge(x) && w.ge(y) {
                result.push(r2[j - 1].clone());
                j -= 1;
            } else {
                result.push(Interval::new(number::max(x, z), number::max(y, w)));
                if x.lt(z) {
                    j -= 1;
                } else {
                    i -= 1;
                }
            }
        }
        Range::from_intervals(result)
    }

    /// Evaluate a binary operation given by its operator tag.
    pub fn bin_op(&self, op: BinOpType, rhs: &Range) -> Range {
        use BinOpType::*;
        match op {
            Plus => self.add_value(rhs),
            Minus => self.sub_value(rhs),
            Mult => self.mul_value(rhs),
            Rdiv => self.rdiv(rhs),
            ExactDiv => self.exact_div(rhs),
            TruncDiv => self.trunc_div(rhs),
            TruncMod => self.trunc_mod(rhs),
            BitAnd => self.bit_and(rhs),
            BitOr => self.bit_or(rhs),
            BitXor => self.bit_xor(rhs),
            LeftShift => self.bit_left_shift(rhs),
            RightShift => self.bit_right_shift(rhs),
            LeftRotate => self.bit_left_rotate(rhs),
            RightRotate => self.bit_right_rotate(rhs),
            BoolAnd => self.logical_and(rhs),
            BoolOr => self.logical_or(rhs),
            BoolXor => self.logical_xor(rhs),
            Eq => self.logical_eq(rhs),
            Neq => self.logical_neq(rhs),
            Lt => self.logical_lt(rhs),
            Gt => self.logical_gt(rhs),
            Le => self.logical_le(rhs),
            Ge => self.logical_ge(rhs),
            Min => self.min_value(rhs),
            Max => self.max_value(rhs),
        }
    }

    /// Evaluate a unary operation given by its operator tag.
    pub fn un_op(&self, op: UnOpType) -> Range {
        use UnOpType::*;
        match op {
            Minus => self.neg_value(),
            Abs => self.abs(),
            BoolNot => self.logical_not(),
            BitNot => self.bit_not(),
            IntToFloat => self.int_to_float(),
        }
    }
}

impl Neg for Range {
    type Output = Range;

    fn neg(self) -> Range {
        self.neg_value()
    }
}

impl Add for Range {
    type Output = Range;

    fn add(self, rhs: Range) -> Range {
        self.add_value(&rhs)
    }
}

impl Sub for Range {
    type Output = Range;

    fn sub(self, rhs: Range) -> Range {
        self.sub_value(&rhs)
    }
}

impl Mul for Range {
    type Output = Range;

    fn mul(self, rhs: Range) -> Range {
        self.mul_value(&rhs)
    }
}
