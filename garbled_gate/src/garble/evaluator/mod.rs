pub mod classic_eval;

pub use classic_eval::*;

use crate::errors::EvaluatorError;
use crate::gc::GarbledGate;
use crypto_core::Block;

pub trait GateEvaluator {
    /// Evaluate a garbled gate with one label per input wire.
    fn eval(&self, gate: &GarbledGate, l1: Block, l2: Block) -> Result<Block, EvaluatorError>;
}
