use super::*;
use crate::abstract_domain::SpecializeByConditional;
use crate::prelude::*;

impl SpecializeByConditional for Range {
    /// Keep only the part of `self` that may equal a value of `other`.
    ///
    /// When the intersection of the converted operands is empty, the
    /// comparison can still have held at runtime (the ranges are
    /// over-approximations), so the result falls back to `other` converted
    /// into the type of `self`.
    fn specialize_eq(&self, other: &Self) -> Self {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "specialization of an empty range"
        );
        let (lhs, rhs) = Range::usual_arithmetic_conversions(self, other);
        let intersection = lhs.intersect(&rhs);
        if !intersection.is_empty() {
            self.assign(&intersection)
        } else {
            self.assign(other)
        }
    }

    /// The complement of `other` is not representable as a range in any
    /// useful way, so `self` is returned unchanged.
    fn specialize_neq(&self, other: &Self) -> Self {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "specialization of an empty range"
        );
        self.clone()
    }

    /// Keep only the part of `self` that may be below some value of
    /// `other`, i.e. everything below the maximum of `other`.
    fn specialize_lt(&self, other: &Self) -> Self {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "specialization of an empty range"
        );
        let (lhs, rhs) = Range::usual_arithmetic_conversions(self, other);
        let other_max = rhs.get_max();
        let mut result = Vec::new();
        for interval in lhs.iter() {
            if interval.is_nan() {
                // NaN never satisfies the comparison.
                continue;
            }
            let x = &interval.start;
            let y = &interval.end;
            if x.lt(&other_max) && y.lt(&other_max) {
                result.push(interval.clone());
            } else if x.lt(&other_max) {
                result.push(Interval::new(
                    x.clone(),
                    other_max.sub_value(&y.get_epsilon()),
                ));
            }
        }
        if !result.is_empty() {
            return self.assign(&Range { intervals: result });
        }
        // Nothing of the converted range survived the filter; fall back to
        // the bracket below the other range's maximum.
        let other_max = self[0].start.assign(&rhs[rhs.len() - 1].end);
        let epsilon = self[0].start.get_epsilon();
        if self.is_integral() {
            let own_min = self[0].start.get_min();
            let new_max = if other_max.is_min() {
                own_min.clone()
            } else {
                other_max.sub_value(&epsilon)
            };
            Range::from(Interval::new(own_min, new_max))
        } else {
            Range::from(Interval::new(
                self[0].start.get_negative_inf(),
                other_max.sub_value(&epsilon),
            ))
        }
    }

    /// Keep only the part of `self` that may be above some value of
    /// `other`, i.e. everything above the minimum of `other`.
    fn specialize_gt(&self, other: &Self) -> Self {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "specialization of an empty range"
        );
        let (lhs, rhs) = Range::usual_arithmetic_conversions(self, other);
        let other_min = rhs.get_min();
        let mut result = Vec::new();
        for interval in lhs.iter() {
            if interval.is_nan() {
                continue;
            }
            let x = &interval.start;
            let y = &interval.end;
            if x.gt(&other_min) && y.gt(&other_min) {
                result.push(interval.clone());
            } else if y.gt(&other_min) {
                result.push(Interval::new(
                    other_min.add_value(&x.get_epsilon()),
                    y.clone(),
                ));
            }
        }
        if !result.is_empty() {
            return self.assign(&Range { intervals: result });
        }
        let other_min = self[0].start.assign(&rhs[0].start);
        let epsilon = self[0].start.get_epsilon();
        if self.is_integral() {
            let own_max = self[0].start.get_max();
            let new_min = if other_min.is_max() {
                own_max.clone()
            } else {
                other_min.add_value(&epsilon)
            };
            Range::from(Interval::new(new_min, own_max))
        } else {
            Range::from(Interval::new(
                other_min.add_value(&epsilon),
                self[0].start.get_positive_inf(),
            ))
        }
    }

    /// Keep only the part of `self` not above the maximum of `other`.
    fn specialize_le(&self, other: &Self) -> Self {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "specialization of an empty range"
        );
        let (lhs, rhs) = Range::usual_arithmetic_conversions(self, other);
        let other_max = rhs.get_max();
        let mut result = Vec::new();
        for interval in lhs.iter() {
            if interval.is_nan() {
                continue;
            }
            let x = &interval.start;
            let y = &interval.end;
            if x.le(&other_max) && y.le(&other_max) {
                result.push(interval.clone());
            } else if x.le(&other_max) {
                result.push(Interval::new(x.clone(), other_max.clone()));
            }
        }
        if !result.is_empty() {
            return self.assign(&Range { intervals: result });
        }
        let other_max = self[0].start.assign(&rhs[rhs.len() - 1].end);
        Range::from(Interval::new(self[0].start.get_min(), other_max))
    }

    /// Keep only the part of `self` not below the minimum of `other`.
    fn specialize_ge(&self, other: &Self) -> Self {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "specialization of an empty range"
        );
        let (lhs, rhs) = Range::usual_arithmetic_conversions(self, other);
        let other_min = rhs.get_min();
        let mut result = Vec::new();
        for interval in lhs.iter() {
            if interval.is_nan() {
                continue;
            }
            let x = &interval.start;
            let y = &interval.end;
            if x.ge(&other_min) && y.ge(&other_min) {
                result.push(interval.clone());
            } else if y.ge(&other_min) {
                result.push(Interval::new(other_min.clone(), y.clone()));
            }
        }
        if !result.is_empty() {
            return self.assign(&Range { intervals: result });
        }
        let other_min = self[0].start.assign(&rhs[0].start);
        Range::from(Interval::new(other_min, self[0].start.get_max()))
    }
}
