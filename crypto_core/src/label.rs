//! Sampling of wire labels.

use rand_core::{CryptoRng, RngCore};

use crate::{block::LABEL_LEN, Block, CryptoError};

/// Draw a fresh uniformly random label.
///
/// Uses the fallible `try_fill_bytes`, so a broken entropy source surfaces as
/// `CryptoError::RandomnessUnavailable` instead of a panic. There is no retry.
#[inline]
pub fn new_label<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Block, CryptoError> {
    let mut bytes = [0u8; LABEL_LEN];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(Block::new(bytes))
}

/// Draw `num` independent labels.
pub fn new_labels<R: RngCore + CryptoRng>(
    rng: &mut R,
    num: usize,
) -> Result<Vec<Block>, CryptoError> {
    (0..num).map(|_| new_label(rng)).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use std::collections::HashSet;

    /// An RNG whose entropy source is always exhausted.
    pub(crate) struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source exhausted"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_new_labels_distinct() {
        let labels = new_labels(&mut OsRng, 1000).unwrap();
        let set: HashSet<Block> = labels.iter().copied().collect();
        assert_eq!(set.len(), labels.len());
    }

    #[test]
    fn test_broken_rng() {
        let err = new_label(&mut BrokenRng).unwrap_err();
        assert!(matches!(err, CryptoError::RandomnessUnavailable(_)));
    }
}
