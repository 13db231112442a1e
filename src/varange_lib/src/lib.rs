/*!
A numeric value-range domain for scalar C variables.

The crate computes sound, bounded-precision value ranges for the scalar
variables of an analyzed C program. It models exact fixed-width integer
wraparound, the C99 integer promotions and usual arithmetic conversions,
and the IEEE-754 special values (NaN, the infinities and signed zero).

The two central types live in the [`abstract_domain`] module:
- [`abstract_domain::Number`] represents a single typed scalar value and
  owns all C semantics for one concrete value.
- [`abstract_domain::Range`] represents a normalized set of intervals over
  such values and lifts the full operator suite to interval sets.

A control-flow-graph walker drives the domain through the operator tags
defined in [`intermediate_representation`]:
```
use varange_lib::abstract_domain::{Number, Range};
use varange_lib::intermediate_representation::{BinOpType, ByteSize};

let lhs = Range::from(Number::new_int(250, ByteSize::new(1), false));
let rhs = Range::from(Number::new_int(10, ByteSize::new(1), false));
// The usual arithmetic conversions promote both operands to `int`,
// so the sum does not wrap at the `unsigned char` boundary.
let sum = lhs.bin_op(BinOpType::Plus, &rhs);
assert_eq!(sum, Range::from(Number::new_int(260, ByteSize::new(4), true)));
```

All operations are pure: no operation mutates its operands and the crate
holds no global state, so results only depend on the supplied values.
*/

pub mod abstract_domain;
pub mod intermediate_representation;

/// Convenience imports used throughout the crate.
pub mod prelude {
    pub use serde::{Deserialize, Serialize};

    pub use crate::abstract_domain::{Interval, Number, Range};
    pub use crate::intermediate_representation::ByteSize;
    pub use anyhow::{anyhow, Error};
    pub use log::debug;
}
