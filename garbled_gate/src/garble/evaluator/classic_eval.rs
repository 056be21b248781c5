use crypto_core::{Block, CryptoError, LabelCipher};

use crate::row_key;
use crate::EvaluatorError;
use crate::GarbledGate;
use crate::GateEvaluator;

/// Evaluator for gates produced by `ClassicGenerator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicEvaluator;

impl GateEvaluator for ClassicEvaluator {
    fn eval(&self, gate: &GarbledGate, l1: Block, l2: Block) -> Result<Block, EvaluatorError> {
        let cipher = LabelCipher::new(row_key(l1, l2).as_ref())?;

        // The evaluator cannot tell which row its labels select, so it tries
        // them in order. A failed tag check is the expected outcome for the
        // three rows garbled under other keys.
        for (i, entry) in gate.table.iter().enumerate() {
            match cipher.decrypt(entry) {
                Ok(plaintext) => {
                    log::debug!("eval: {} gate, row[{i}] authenticated", gate.gate_type);
                    return Block::try_from_slice(&plaintext).map_err(|_| {
                        EvaluatorError::InvalidLabel {
                            len: plaintext.len(),
                        }
                    });
                }
                Err(CryptoError::AuthenticationFailed) => {
                    log::trace!("eval: {} gate, row[{i}] rejected", gate.gate_type);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(EvaluatorError::NoMatchingEntry)
    }
}
