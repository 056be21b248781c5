use super::{GateGenerator, GeneratorError};
use crate::{row_key, GarbledGate, Wire};
use circuit::{row_bits, GateType, NROWS};
use crypto_core::encrypt;
use rand::{CryptoRng, Rng};

/// Classic four-row Yao garbling: every row encrypts its output label under
/// the key of its two input labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicGenerator;

impl ClassicGenerator {
    /// Garble row `i` of the table.
    #[inline]
    pub fn row<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        gate_type: GateType,
        i: usize,
        in1: &Wire,
        in2: &Wire,
        out: &Wire,
    ) -> Result<Vec<u8>, GeneratorError> {
        let (a, b) = row_bits(i);
        let key = row_key(in1.label(a), in2.label(b));
        let c = gate_type.truth(a, b);

        let entry = encrypt(rng, key.as_ref(), out.label(c).as_ref())?;
        log::trace!("garble: {gate_type} row[{i}] a={a} b={b} c={c}");
        Ok(entry)
    }
}

impl GateGenerator for ClassicGenerator {
    fn garble<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        gate_type: GateType,
        in1: &Wire,
        in2: &Wire,
        out: &Wire,
    ) -> Result<GarbledGate, GeneratorError> {
        let mut table: [Vec<u8>; NROWS] = Default::default();
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = self.row(rng, gate_type, i, in1, in2, out)?;
        }
        log::debug!("garble: {gate_type} gate, {} table entries", table.len());

        Ok(GarbledGate::new(gate_type, table))
    }
}
