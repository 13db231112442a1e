use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::One;

use super::{AbstractDomain, HasTop, TryToInterval, TryToNumber};
use crate::prelude::*;

mod bin_ops;
mod specialization;

/// The maximal number of intervals a normalized range may consist of.
/// Ranges that grow beyond it are collapsed to their bounding interval.
pub const MAX_INTERVALS_IN_RANGE: usize = 15;

/// A closed interval of scalar values, given by its two bounds.
///
/// Both bounds are part of the interval. The bounds are expected to share
/// one type and to satisfy `start <= end`; intervals violating the latter
/// are interpreted as wrapping around the type limits and are split apart
/// during range normalization.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Interval {
    /// The lower bound of the interval.
    pub start: Number,
    /// The upper bound of the interval.
    pub end: Number,
}

impl Interval {
    /// Create a new interval from its bounds.
    pub fn new(start: Number, end: Number) -> Interval {
        Interval { start, end }
    }

    /// Returns whether a bound of the interval is NaN.
    fn is_nan(&self) -> bool {
        self.start.is_nan() || self.end.is_nan()
    }
}

/// An abstract value describing the set of possible values of a scalar
/// variable as a normalized list of closed intervals.
///
/// A normalized range contains no overlapping or directly adjacent
/// intervals, its intervals are sorted by their lower bounds and there are
/// at most [`MAX_INTERVALS_IN_RANGE`] of them. A floating-point range
/// additionally keeps at most one NaN interval, sorted to the front.
/// All operations normalize their result, so every `Range` a caller can
/// observe is normalized. The empty range carries no type and is only used
/// to represent unreachable values.
///
/// Operations whose exact result is not representable (or not worth the
/// precision) over-approximate their result, in the worst case with the
/// maximal range of the result type. They never return an empty range for
/// non-empty operands.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Range {
    intervals: Vec<Interval>,
}

/// The smaller of two bounds; returns `lhs` when the comparison is
/// unordered because of a NaN operand.
fn pick_min(lhs: &Number, rhs: &Number) -> Number {
    if rhs.lt(lhs) {
        rhs.clone()
    } else {
        lhs.clone()
    }
}

/// The larger of two bounds; returns `lhs` when the comparison is
/// unordered because of a NaN operand.
fn pick_max(lhs: &Number, rhs: &Number) -> Number {
    if lhs.lt(rhs) {
        rhs.clone()
    } else {
        lhs.clone()
    }
}

/// Sort NaN intervals to the front, everything else by its bounds.
fn compare_lower_bounds(lhs: &Interval, rhs: &Interval) -> Ordering {
    match (lhs.start.is_nan(), rhs.start.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            if lhs.start.lt(&rhs.start) {
                Ordering::Less
            } else if rhs.start.lt(&lhs.start) {
                Ordering::Greater
            } else if lhs.end.lt(&rhs.end) {
                Ordering::Less
            } else if rhs.end.lt(&lhs.end) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

impl Range {
    /// Create an empty range. The empty range carries no type information
    /// and represents a value that cannot occur at all.
    pub fn empty() -> Range {
        Range {
            intervals: Vec::new(),
        }
    }

    /// Create a range from a list of intervals and normalize it.
    pub fn from_intervals(intervals: Vec<Interval>) -> Range {
        let mut range = Range { intervals };
        range.normalize_in_place();
        range
    }

    /// Get the number of intervals in the range.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns whether the range contains no intervals at all.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over the intervals of the range.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Return a normalized copy of the range. All ranges returned by the
    /// operations of this type are already normalized, so normalization is
    /// idempotent on them.
    pub fn normalize(&self) -> Range {
        let mut result = self.clone();
        result.normalize_in_place();
        result
    }

    fn normalize_in_place(&mut self) {
        if self.intervals.is_empty() {
            return;
        }

        // An interval with a NaN bound collapses to the NaN point
        // and at most one NaN interval is kept.
        let mut deduplicated = Vec::with_capacity(self.intervals.len());
        let mut nan_seen = false;
        for interval in self.intervals.drain(..) {
            if interval.is_nan() {
                if !nan_seen {
                    let nan = if interval.start.is_nan() {
                        interval.start
                    } else {
                        interval.end
                    };
                    deduplicated.push(Interval::new(nan.clone(), nan));
                    nan_seen = true;
                }
            } else {
                deduplicated.push(interval);
            }
        }

        // An interval with `start > end` wraps around the type limits
        // and is split at them.
        let mut split = Vec::with_capacity(deduplicated.len());
        for interval in deduplicated {
            if interval.start.gt(&interval.end) {
                split.push(Interval::new(interval.end.get_min(), interval.end.clone()));
                split.push(Interval::new(interval.start.clone(), interval.start.get_max()));
            } else {
                split.push(interval);
            }
        }

        split.sort_by(compare_lower_bounds);

        // Merge overlapping and epsilon-adjacent neighbors. The first
        // condition also covers neighbors whose `end + epsilon` would
        // wrap at the type maximum.
        let epsilon = if split[0].start.is_floating_point() {
            Number::new_float(0.1, ByteSize::new(8))
        } else {
            Number::new_int(1, ByteSize::new(4), true)
        };
        let mut iter = split.into_iter();
        let mut merged: Vec<Interval> = vec![iter.next().unwrap()];
        for current in iter {
            let previous = merged.last_mut().unwrap();
            if current.start.le(&previous.end)
                || current.start.le(&previous.end.add_value(&epsilon))
            {
                let start = pick_min(&previous.start, &current.start);
                let end = pick_max(&previous.end, &current.end);
                *previous = Interval::new(start, end);
            } else {
                merged.push(current);
            }
        }
        self.intervals = merged;

        if self.intervals.len() > MAX_INTERVALS_IN_RANGE {
            debug!(
                "range exceeds {} intervals, collapsing it to its bounding interval",
                MAX_INTERVALS_IN_RANGE
            );
            self.merge_intervals_in_place();
        }
    }

    /// Collapse the range to the single interval spanned by its outermost
    /// bounds. A floating-point range containing NaN keeps its NaN interval
    /// in addition.
    pub fn merge_intervals(&self) -> Range {
        let mut result = self.clone();
        result.merge_intervals_in_place();
        result
    }

    fn merge_intervals_in_place(&mut self) {
        if self.intervals.len() < 2 {
            return;
        }
        if self.is_floating_point() && self.contains_nan() {
            let nan = self.intervals[0].start.clone();
            let min = self.intervals[1].start.clone();
            let max = self.intervals.last().unwrap().end.clone();
            self.intervals = vec![Interval::new(nan.clone(), nan), Interval::new(min, max)];
        } else {
            let min = self.intervals[0].start.clone();
            let max = self.intervals.last().unwrap().end.clone();
            self.intervals = vec![Interval::new(min, max)];
        }
    }

    /// Split the intervals of the range so that the special values of its
    /// type get isolated or become interval bounds:
    /// the infinities and zero for floats, the type minimum and zero for
    /// signed integers. Afterwards no interval mixes values of different
    /// sign and arithmetic corner cases sit on interval bounds.
    ///
    /// The result is intentionally not normalized, since normalization
    /// would merge the split intervals right back together.
    pub fn split_by_special_values(&self) -> Range {
        let mut result = Vec::new();
        if self.is_floating_point() {
            for interval in self.iter() {
                let x = &interval.start;
                let y = &interval.end;
                let zero = x.assign(&Number::new_int(0, ByteSize::new(1), true));
                if x.is_negative_inf() && y.is_number() && y.lt(&zero) {
                    result.push(Interval::new(x.clone(), x.clone()));
                    result.push(Interval::new(x.get_min(), y.clone()));
                } else if x.is_negative_inf() && y.is_number() && y.ge(&zero) {
                    result.push(Interval::new(x.clone(), x.clone()));
                    result.push(Interval::new(x.get_min(), zero.clone()));
                    result.push(Interval::new(zero, y.clone()));
                } else if x.is_negative_inf() && y.is_positive_inf() {
                    result.push(Interval::new(x.clone(), x.clone()));
                    result.push(Interval::new(x.get_min(), zero.clone()));
                    result.push(Interval::new(zero, x.get_max()));
                    result.push(Interval::new(y.clone(), y.clone()));
                } else if x.is_number() && x.lt(&zero) && y.is_number() && y.ge(&zero) {
                    result.push(Interval::new(x.clone(), zero.clone()));
                    result.push(Interval::new(zero, y.clone()));
                } else if x.is_number() && x.lt(&zero) && y.is_positive_inf() {
                    result.push(Interval::new(x.clone(), zero.clone()));
                    result.push(Interval::new(zero, x.get_max()));
                    result.push(Interval::new(y.clone(), y.clone()));
                } else if x.is_number() && x.ge(&zero) && y.is_positive_inf() {
                    result.push(Interval::new(x.clone(), x.get_max()));
                    result.push(Interval::new(y.clone(), y.clone()));
                } else {
                    result.push(interval.clone());
                }
            }
        } else if self.is_signed() {
            for interval in self.iter() {
                let x = &interval.start;
                let y = &interval.end;
                let zero = x.assign(&Number::new_int(0, ByteSize::new(1), true));
                if x.is_min() && y.is_min() {
                    result.push(interval.clone());
                } else if x.is_min() && y.lt(&zero) {
                    let above_min = Number::new_int(x.get_int() + BigInt::one(), x.width(), x.sign());
                    result.push(Interval::new(x.clone(), x.clone()));
                    result.push(Interval::new(above_min, y.clone()));
                } else if x.is_min() && y.ge(&zero) {
                    let above_min = Number::new_int(x.get_int() + BigInt::one(), x.width(), x.sign());
                    result.push(Interval::new(x.clone(), x.clone()));
                    result.push(Interval::new(above_min, zero.clone()));
                    result.push(Interval::new(zero, y.clone()));
                } else if x.lt(&zero) && y.ge(&zero) {
                    result.push(Interval::new(x.clone(), zero.clone()));
                    result.push(Interval::new(zero, y.clone()));
                } else {
                    result.push(interval.clone());
                }
            }
        } else {
            // Unsigned values have no sign changes and no isolated minimum.
            result = self.intervals.clone();
        }
        Range { intervals: result }
    }

    /// Split the intervals of the range so that zero gets isolated as the
    /// point interval `[0, 0]` and its neighboring bounds are pulled in by
    /// one type epsilon. Intervals not containing zero are left alone.
    ///
    /// Like [`Range::split_by_special_values`], the result is intentionally
    /// not normalized.
    pub fn split_by_zero(&self) -> Range {
        let mut result = Vec::new();
        if self.is_floating_point() {
            for interval in self.iter() {
                let x = &interval.start;
                let y = &interval.end;
                let zero = x.assign(&Number::new_int(0, ByteSize::new(1), true));
                if *x == zero && *y == zero {
                    result.push(Interval::new(zero.clone(), zero));
                } else if *x == zero {
                    result.push(Interval::new(zero.clone(), zero));
                    result.push(Interval::new(x.get_epsilon(), y.clone()));
                } else if *y == zero {
                    result.push(Interval::new(zero.clone(), zero));
                    result.push(Interval::new(x.clone(), y.get_epsilon().neg_value()));
                } else if x.lt(&zero) && zero.lt(y) {
                    result.push(Interval::new(x.clone(), y.get_epsilon().neg_value()));
                    result.push(Interval::new(zero.clone(), zero));
                    result.push(Interval::new(x.get_epsilon(), y.clone()));
                } else {
                    result.push(interval.clone());
                }
            }
        } else {
            for interval in self.iter() {
                let x = &interval.start;
                let y = &interval.end;
                let zero = x.assign(&Number::new_int(0, ByteSize::new(1), true));
                let one = x.assign(&Number::new_int(1, ByteSize::new(1), true));
                let minus_one = x.assign(&Number::new_int(-1, ByteSize::new(1), true));
                if *x == zero && *y == zero {
                    result.push(interval.clone());
                } else if *x == zero {
                    result.push(Interval::new(zero.clone(), zero));
                    result.push(Interval::new(one, y.clone()));
                } else if *y == zero {
                    result.push(Interval::new(zero.clone(), zero));
                    result.push(Interval::new(x.clone(), minus_one));
                } else if x.lt(&zero) && zero.lt(y) {
                    result.push(Interval::new(x.clone(), minus_one));
                    result.push(Interval::new(zero.clone(), zero));
                    result.push(Interval::new(one, y.clone()));
                } else {
                    result.push(interval.clone());
                }
            }
        }
        Range { intervals: result }
    }

    /// Returns whether the range holds values of an integral type.
    pub fn is_integral(&self) -> bool {
        assert!(!self.is_empty(), "type query on an empty range");
        self.intervals[0].start.is_integral()
    }

    /// Returns whether the range holds values of a floating-point type.
    pub fn is_floating_point(&self) -> bool {
        assert!(!self.is_empty(), "type query on an empty range");
        self.intervals[0].start.is_floating_point()
    }

    /// Returns whether the range holds values of a signed integral type.
    pub fn is_signed(&self) -> bool {
        assert!(!self.is_empty(), "type query on an empty range");
        self.intervals[0].start.is_signed()
    }

    /// Returns whether the range holds values of an unsigned integral type.
    pub fn is_unsigned(&self) -> bool {
        assert!(!self.is_empty(), "type query on an empty range");
        self.intervals[0].start.is_unsigned()
    }

    /// Returns whether the two ranges hold values of the same type.
    pub fn has_same_type_as(&self, other: &Range) -> bool {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "type query on an empty range"
        );
        let lhs = &self.intervals[0].start;
        let rhs = &other.intervals[0].start;
        lhs.is_integral() == rhs.is_integral()
            && lhs.width() == rhs.width()
            && (lhs.is_floating_point() || lhs.sign() == rhs.sign())
    }

    /// Returns whether the range contains a NaN value.
    pub fn contains_nan(&self) -> bool {
        self.iter().any(|interval| interval.is_nan())
    }

    /// Returns whether the range contains the positive infinity.
    pub fn contains_positive_inf(&self) -> bool {
        self.iter().any(|interval| interval.end.is_positive_inf())
    }

    /// Returns whether the range contains the negative infinity.
    pub fn contains_negative_inf(&self) -> bool {
        self.iter().any(|interval| interval.start.is_negative_inf())
    }

    /// Returns whether the range contains zero.
    pub fn contains_zero(&self) -> bool {
        assert!(!self.is_empty(), "containment query on an empty range");
        let zero = self.intervals[0]
            .start
            .assign(&Number::new_int(0, ByteSize::new(1), true));
        self.iter().any(|interval| {
            !interval.start.to_bool()
                || !interval.end.to_bool()
                || (interval.start.lt(&zero) && zero.lt(&interval.end))
        })
    }

    /// Returns whether the range contains a truthy value.
    pub fn contains_true(&self) -> bool {
        self.iter()
            .any(|interval| interval.start.to_bool() || interval.end.to_bool())
    }

    /// Returns whether the range contains the falsy value zero.
    pub fn contains_false(&self) -> bool {
        self.contains_zero()
    }

    /// Returns whether the range consists of a single concrete value.
    /// A NaN interval does not count as a single value.
    pub fn contains_only_single_number(&self) -> bool {
        self.len() == 1 && self.intervals[0].start == self.intervals[0].end
    }

    /// Returns whether the range contains the minimum of its integral type.
    /// Expects the range to be split by special values, so a contained
    /// minimum of a signed type is isolated in the first interval.
    pub fn contains_integral_min(&self) -> bool {
        self.is_integral() && self.intervals[0].start.is_min()
    }

    /// Returns whether the range contains the integral value -1.
    pub fn contains_integral_minus_one(&self) -> bool {
        let minus_one = Number::new_int(-1, ByteSize::new(4), true);
        self.iter()
            .any(|interval| interval.start.le(&minus_one) && minus_one.le(&interval.end))
    }

    /// Get the smallest value contained in the range, ignoring NaN.
    pub fn get_min(&self) -> Number {
        assert!(!self.is_empty(), "get_min() called on an empty range");
        if self.intervals[0].is_nan() && self.len() > 1 {
            self.intervals[1].start.clone()
        } else {
            self.intervals[0].start.clone()
        }
    }

    /// Get the largest value contained in the range.
    pub fn get_max(&self) -> Number {
        assert!(!self.is_empty(), "get_max() called on an empty range");
        self.intervals.last().unwrap().end.clone()
    }

    /// Get the maximal range of the type of the given value:
    /// the full interval between the type limits for integral types and
    /// additionally the NaN interval and the infinities for floats.
    pub fn max_range(type_template: &Number) -> Range {
        if type_template.is_integral() {
            Range::from_intervals(vec![Interval::new(
                type_template.get_min(),
                type_template.get_max(),
            )])
        } else {
            Range::from_intervals(vec![
                Interval::new(type_template.get_nan(), type_template.get_nan()),
                Interval::new(
                    type_template.get_negative_inf(),
                    type_template.get_positive_inf(),
                ),
            ])
        }
    }

    /// Apply the C99 usual arithmetic conversions to a pair of ranges and
    /// return the converted pair in the original operand order.
    ///
    /// The common type is determined by the conversion of the two first
    /// bounds; every interval bound is then converted into it.
    pub fn usual_arithmetic_conversions(lhs: &Range, rhs: &Range) -> (Range, Range) {
        assert!(
            !lhs.is_empty() && !rhs.is_empty(),
            "arithmetic conversions require non-empty operands"
        );
        let type_template = lhs.intervals[0].start.mul_value(&rhs.intervals[0].start);
        let convert = |range: &Range| {
            let intervals = range
                .iter()
                .map(|interval| {
                    Interval::new(
                        type_template.assign(&interval.start),
                        type_template.assign(&interval.end),
                    )
                })
                .collect();
            Range::from_intervals(intervals)
        };
        (convert(lhs), convert(rhs))
    }

    /// Convert the values of `source` into the type of `self`,
    /// mirroring a C assignment.
    ///
    /// An integral destination converts each bound with modular arithmetic;
    /// a source interval spanning at least the whole destination type
    /// collapses the result to the maximal range. A floating-point source
    /// whose bounds do not fit an integral destination (including NaN and
    /// the infinities) also yields the maximal range.
    pub fn assign(&self, source: &Range) -> Range {
        if source.is_empty() {
            return Range::empty();
        }
        assert!(!self.is_empty(), "assign() requires a typed destination");
        let type_template = &self.intervals[0].start;
        let mut result = Vec::new();
        if self.is_integral() && source.is_integral() {
            let type_min = type_template.get_min();
            let type_max = type_template.get_max();
            let scope = type_max.get_int() - type_min.get_int() + BigInt::one();
            for interval in source.iter() {
                let span = interval.end.get_int() - interval.start.get_int();
                if span >= scope {
                    debug!("assigned interval spans the whole destination type");
                    return Range::max_range(type_template);
                }
                result.push(Interval::new(
                    type_template.assign(&interval.start),
                    type_template.assign(&interval.end),
                ));
            }
        } else if self.is_floating_point() {
            for interval in source.iter() {
                result.push(Interval::new(
                    type_template.assign(&interval.start),
                    type_template.assign(&interval.end),
                ));
            }
        } else {
            let type_min = type_template.get_min();
            let type_max = type_template.get_max();
            for interval in source.iter() {
                if interval.start.ge(&type_min) && interval.end.le(&type_max) {
                    result.push(Interval::new(
                        type_template.assign(&interval.start),
                        type_template.assign(&interval.end),
                    ));
                } else {
                    debug!("assigned floating-point interval exceeds the destination limits");
                    return Range::max_range(type_template);
                }
            }
        }
        Range::from_intervals(result)
    }

    /// Widen the range for fixpoint iteration: every interval bound moves
    /// roughly twice as far from zero (clamped at the type limits), bounds
    /// near zero shrink toward it and a range containing zero grows to
    /// enclose both neighbors of zero. Floating-point ranges widen directly
    /// to the maximal range.
    ///
    /// The result always contains the input, so repeated widening
    /// terminates at the type limits.
    pub fn expand(&self) -> Range {
        assert!(!self.is_empty(), "expand() called on an empty range");
        if self.is_floating_point() {
            debug!("widening a floating-point range to the maximal range");
            return Range::max_range(&self.intervals[0].start);
        }
        let split = self.split_by_special_values();
        let mut result = Vec::new();
        for interval in split.iter() {
            let x = &interval.start;
            let y = &interval.end;
            let zero = x.assign(&Number::new_int(0, ByteSize::new(1), true));
            let two = Number::new_int(2, x.width(), x.sign());
            if x.lt(&zero) {
                let mut new_start = x.assign(&x.mul_value(&two));
                if new_start.gt(x) {
                    new_start = x.get_min();
                }
                let new_end = x.assign(&y.trunc_div(&two));
                result.push(Interval::new(new_start, new_end));
            } else {
                let new_start = x.assign(&x.trunc_div(&two));
                let mut new_end = x.assign(&y.mul_value(&two));
                if new_end.lt(y) {
                    new_end = y.get_max();
                }
                result.push(Interval::new(new_start, new_end));
            }
        }
        let mut expanded = Range::from_intervals(result);
        if expanded.contains_zero() {
            let start = if expanded.is_signed() {
                Number::new_int(-1, expanded.intervals[0].start.width(), true)
            } else {
                Number::new_int(1, expanded.intervals[0].start.width(), false)
            };
            let end = Number::new_int(1, start.width(), start.sign());
            expanded.intervals.push(Interval::new(start, end));
            expanded.normalize_in_place();
        }
        expanded
    }

    /// Compute the union of the two ranges. Tolerates empty operands.
    pub fn unite(&self, other: &Range) -> Range {
        let mut intervals = self.intervals.clone();
        intervals.extend(other.intervals.iter().cloned());
        Range::from_intervals(intervals)
    }

    /// Compute the intersection of the two ranges.
    /// NaN intervals never intersect anything, since no comparison with NaN
    /// holds. The result may be empty.
    pub fn intersect(&self, other: &Range) -> Range {
        if self.is_empty() || other.is_empty() {
            return Range::empty();
        }
        assert!(
            self.has_same_type_as(other),
            "intersect() requires operands of the same type"
        );
        let mut result = Vec::new();
        for lhs in self.iter() {
            for rhs in other.iter() {
                let x = &lhs.start;
                let y = &lhs.end;
                let z = &rhs.start;
                let w = &rhs.end;
                if z.le(x) && y.le(w) {
                    result.push(lhs.clone());
                } else if x.le(z) && w.le(y) {
                    result.push(rhs.clone());
                } else if x.le(z) && z.le(y) {
                    result.push(Interval::new(z.clone(), y.clone()));
                } else if z.le(x) && x.le(w) {
                    result.push(Interval::new(x.clone(), w.clone()));
                }
            }
        }
        Range::from_intervals(result)
    }
}

impl From<Number> for Range {
    /// Wrap a single value into a point range.
    fn from(value: Number) -> Range {
        Range {
            intervals: vec![Interval::new(value.clone(), value)],
        }
    }
}

impl From<Interval> for Range {
    /// Wrap a single interval into a range and normalize it.
    fn from(interval: Interval) -> Range {
        Range::from_intervals(vec![interval])
    }
}

impl Index<usize> for Range {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }
}

impl PartialEq for Range {
    /// Structural equality of the two ranges.
    ///
    /// Since no comparison with NaN holds, the NaN intervals themselves are
    /// skipped when the left range contains NaN. Note that the guard checks
    /// the left operand on both sides, so a left range with a NaN interval
    /// compares equal to a NaN-free right range of the same length whenever
    /// the interval tails match; this asymmetry is pinned by tests.
    fn eq(&self, other: &Range) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        if !self.contains_nan() && !self.contains_nan() {
            self.intervals == other.intervals
        } else if self.contains_nan() && self.contains_nan() {
            self.intervals[1..] == other.intervals[1..]
        } else {
            false
        }
    }
}

impl AbstractDomain for Range {
    /// Merge the two ranges by uniting them.
    fn merge(&self, other: &Range) -> Range {
        self.unite(other)
    }

    /// Returns whether the range is the maximal range of its type.
    fn is_top(&self) -> bool {
        !self.is_empty() && *self == Range::max_range(&self.intervals[0].start)
    }
}

impl HasTop for Range {
    /// Return the maximal range of the same type as `self`.
    fn top(&self) -> Range {
        assert!(!self.is_empty(), "the empty range carries no type");
        Range::max_range(&self.intervals[0].start)
    }
}

impl TryToNumber for Range {
    /// If the range represents a single concrete value, return it.
    fn try_to_number(&self) -> Result<Number, Error> {
        if self.contains_only_single_number() {
            Ok(self.intervals[0].start.clone())
        } else {
            Err(anyhow!("range does not represent a single concrete value"))
        }
    }
}

impl TryToInterval for Range {
    /// If the range is not empty and not the maximal range of its type,
    /// return the interval between its outermost bounds (ignoring NaN).
    fn try_to_interval(&self) -> Result<Interval, Error> {
        if self.is_empty() {
            Err(anyhow!("the empty range is not covered by an interval"))
        } else if self.is_top() {
            Err(anyhow!("the maximal range carries no bound information"))
        } else {
            Ok(Interval::new(self.get_min(), self.get_max()))
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "[{}, {}]", self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            write!(formatter, "{{}}")
        } else {
            write!(
                formatter,
                "{}",
                self.iter().map(|interval| interval.to_string()).join(" v ")
            )
        }
    }
}

#[cfg(test)]
mod tests;
