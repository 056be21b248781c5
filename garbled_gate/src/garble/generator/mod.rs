pub mod classic_gen;

pub use classic_gen::*;

use super::errors::GeneratorError;
use crate::gc::{GarbledGate, Wire};
use circuit::GateType;
use rand::{CryptoRng, Rng};

pub trait GateGenerator {
    /// Garble a gate with input wires `in1`, `in2` and output wire `out`.
    fn garble<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        gate_type: GateType,
        in1: &Wire,
        in2: &Wire,
        out: &Wire,
    ) -> Result<GarbledGate, GeneratorError>;
}
