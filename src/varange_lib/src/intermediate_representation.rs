//! Basic types shared between the analysis driver and the value domain.
//!
//! The analyzed program reaches the domain as a stream of operations on
//! typed scalar values. This module defines the byte-size type used to
//! describe the width of a C scalar type and the operator tags that the
//! control-flow-graph walker dispatches on.

use crate::prelude::*;
use derive_more::*;
use std::fmt;

/// The size (in bytes) of a C scalar type.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Display,
    From,
    Into,
    Add,
    Sub,
)]
#[serde(transparent)]
pub struct ByteSize(u64);

impl ByteSize {
    /// Create a new `ByteSize` object.
    pub fn new(value: u64) -> ByteSize {
        ByteSize(value)
    }

    /// Convert to the equivalent size in bits.
    pub fn as_bit_length(self) -> usize {
        (self.0 as usize) * 8
    }
}

/// The operator tags of all binary operations on value ranges.
///
/// The arithmetic, bitwise and relational tags mirror the operators of the
/// analyzed C program; `Min` and `Max` correspond to recognized calls of
/// `fmin`-/`fmax`-style builtins.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BinOpType {
    Plus,
    Minus,
    Mult,
    Rdiv,
    ExactDiv,
    TruncDiv,
    TruncMod,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    LeftRotate,
    RightRotate,
    BoolAnd,
    BoolOr,
    BoolXor,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    Min,
    Max,
}

/// The operator tags of all unary operations on value ranges.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum UnOpType {
    Minus,
    Abs,
    BoolNot,
    BitNot,
    IntToFloat,
}

impl fmt::Display for BinOpType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{self:?}")
    }
}

impl fmt::Display for UnOpType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bit_length() {
        assert_eq!(ByteSize::new(4).as_bit_length(), 32);
        assert_eq!(ByteSize::new(1).as_bit_length(), 8);
        assert!(ByteSize::new(2) < ByteSize::new(4));
    }
}
