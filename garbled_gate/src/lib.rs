//! Yao garbling of a single two-input gate.
//!
//! The garbler draws two labels per wire, encrypts the output label of every
//! row of the gate's truth table under a key built from that row's input
//! labels, and hands the table to the evaluator. The evaluator, holding one
//! label per input wire, recovers exactly one output label by trial
//! decryption.

pub mod garble;

pub use circuit::GateType;
pub use crypto_core::{Block, CryptoError};
pub use garble::*;

use rand::rngs::OsRng;

/// A fresh wire with both labels drawn from the operating system's entropy source.
pub fn new_wire() -> Result<Wire, CryptoError> {
    Wire::random(&mut OsRng)
}

/// Garble `gate_type` with input wires `in1`, `in2` and output wire `out`,
/// drawing nonces from the operating system's entropy source.
pub fn garble(
    gate_type: GateType,
    in1: &Wire,
    in2: &Wire,
    out: &Wire,
) -> Result<GarbledGate, GeneratorError> {
    ClassicGenerator.garble(&mut OsRng, gate_type, in1, in2, out)
}

/// Recover the output label of `gate` from one label per input wire.
pub fn evaluate(gate: &GarbledGate, l1: Block, l2: Block) -> Result<Block, EvaluatorError> {
    ClassicEvaluator.eval(gate, l1, l2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_round_trip_test() {
        for gate_type in GateType::ALL {
            let in1 = new_wire().unwrap();
            let in2 = new_wire().unwrap();
            let out = new_wire().unwrap();

            let gate = garble(gate_type, &in1, &in2, &out).unwrap();
            for (i, expected) in gate_type.truth_table().iter().enumerate() {
                let (b1, b2) = circuit::row_bits(i);
                let res = evaluate(&gate, in1.label(b1), in2.label(b2)).unwrap();
                assert_eq!(res, out.label(*expected));
            }
        }
    }
}
