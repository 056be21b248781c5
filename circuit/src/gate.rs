//! Gate types and their plaintext semantics.

use std::{fmt, str::FromStr};

use crate::errors::GateTypeError;

/// Number of rows in the truth table of a two-input gate.
pub const NROWS: usize = 4;

/// The closed set of two-input gates that can be garbled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateType {
    And,
    Or,
    Xor,
}

impl GateType {
    /// Every gate type, in a fixed order.
    pub const ALL: [GateType; 3] = [GateType::And, GateType::Or, GateType::Xor];

    /// Evaluate the gate in plaintext.
    #[inline]
    pub fn truth(&self, in1: bool, in2: bool) -> bool {
        match self {
            GateType::And => in1 & in2,
            GateType::Or => in1 | in2,
            GateType::Xor => in1 ^ in2,
        }
    }

    /// Output bit of every row, in table index order.
    pub fn truth_table(&self) -> [bool; NROWS] {
        let mut table = [false; NROWS];
        for (i, out) in table.iter_mut().enumerate() {
            let (in1, in2) = row_bits(i);
            *out = self.truth(in1, in2);
        }
        table
    }
}

/// Table index of the input combination `(in1, in2)`: `(in1 << 1) | in2`.
#[inline]
pub fn row_index(in1: bool, in2: bool) -> usize {
    ((in1 as usize) << 1) | in2 as usize
}

/// Inverse of [`row_index`]. Bit 1 of `i` is the first input, bit 0 the second.
#[inline]
pub fn row_bits(i: usize) -> (bool, bool) {
    debug_assert!(i < NROWS, "row index out of range: {}", i);
    (i & 0b10 != 0, i & 0b01 != 0)
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Xor => "XOR",
        };
        f.write_str(name)
    }
}

impl FromStr for GateType {
    type Err = GateTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(GateType::And),
            "or" => Ok(GateType::Or),
            "xor" => Ok(GateType::Xor),
            _ => Err(GateTypeError::Unknown(s.to_string())),
        }
    }
}
