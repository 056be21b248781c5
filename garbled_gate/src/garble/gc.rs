//! Define the wires and the garbled table of a single gate.

use circuit::{GateType, NROWS};
use crypto_core::{new_label, Block, CryptoError};
use rand::{CryptoRng, Rng};

/// The two labels of a wire. `label0` stands for 0, `label1` for 1.
///
/// Which label means which value is known only to whoever holds the `Wire`;
/// the bytes of a label carry no hint of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wire {
    label0: Block,
    label1: Block,
}

impl Wire {
    pub fn new(label0: Block, label1: Block) -> Self {
        debug_assert_ne!(label0, label1, "the two labels of a wire MUST differ");
        Self { label0, label1 }
    }

    /// Draw both labels independently from `rng`.
    pub fn random<R: Rng + CryptoRng>(rng: &mut R) -> Result<Self, CryptoError> {
        let label0 = new_label(rng)?;
        let label1 = new_label(rng)?;
        Ok(Self::new(label0, label1))
    }

    #[inline]
    pub fn label(&self, bit: bool) -> Block {
        if bit {
            self.label1
        } else {
            self.label0
        }
    }

    #[inline]
    pub fn label0(&self) -> Block {
        self.label0
    }

    #[inline]
    pub fn label1(&self) -> Block {
        self.label1
    }

    /// The value `label` stands for on this wire, `None` if it is not one of its labels.
    pub fn decode(&self, label: &Block) -> Option<bool> {
        if *label == self.label0 {
            Some(false)
        } else if *label == self.label1 {
            Some(true)
        } else {
            None
        }
    }
}

/// Key of a table row: the byte-wise XOR of the two input labels.
///
/// NOTE: the labels are used directly as key material, without a key
/// derivation function. This is demonstration-grade garbling and gives no
/// formal hiding guarantee beyond what XOR of two random 16-byte labels
/// offers. It is also symmetric, so the order of `l1` and `l2` does not matter.
#[inline]
pub fn row_key(l1: Block, l2: Block) -> Block {
    l1 ^ l2
}

/// A garbled gate: its type and one ciphertext per input combination.
///
/// `table[i]` encrypts the output label for input bits `(i >> 1, i & 1)`.
/// The rows are NOT permuted, so an evaluator has to try every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarbledGate {
    pub gate_type: GateType,
    pub table: [Vec<u8>; NROWS],
}

impl GarbledGate {
    pub fn new(gate_type: GateType, table: [Vec<u8>; NROWS]) -> Self {
        Self { gate_type, table }
    }
}
