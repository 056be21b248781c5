//! A 128-bit block, used as a wire label and as a cipher key.

use std::fmt;
use std::ops::{BitXor, BitXorAssign};

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::errors::CryptoError;

/// Length of a label in bytes.
pub const LABEL_LEN: usize = 16;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Block([u8; LABEL_LEN]);

impl Block {
    #[inline]
    pub const fn new(bytes: [u8; LABEL_LEN]) -> Self {
        Block(bytes)
    }

    /// Build a block from a slice, which must be exactly `LABEL_LEN` bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != LABEL_LEN {
            return Err(CryptoError::InvalidLength {
                expected: LABEL_LEN,
                actual: bytes.len(),
            });
        }
        let mut block = Block::default();
        block.0.copy_from_slice(bytes);
        Ok(block)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; LABEL_LEN] {
        self.0
    }
}

impl BitXor for Block {
    type Output = Block;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Block {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for Block {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a ^= *b;
        }
    }
}

impl AsRef<[u8]> for Block {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Block {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<[u8; LABEL_LEN]> for Block {
    #[inline]
    fn from(bytes: [u8; LABEL_LEN]) -> Self {
        Block(bytes)
    }
}

impl From<Block> for [u8; LABEL_LEN] {
    #[inline]
    fn from(block: Block) -> Self {
        block.0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self)
    }
}

impl Distribution<Block> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Block {
        Block(rng.gen::<[u8; LABEL_LEN]>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor() {
        let x = rand::random::<Block>();
        let y = rand::random::<Block>();
        assert_eq!(x ^ y ^ y, x);
        assert_eq!(x ^ x, Block::default());
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [7u8; LABEL_LEN];
        assert_eq!(Block::try_from_slice(&bytes).unwrap(), Block::new(bytes));

        let err = Block::try_from_slice(&bytes[..15]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidLength {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_display_hex() {
        let block = Block::new(hex_literal());
        assert_eq!(block.to_string(), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(hex::encode(block), block.to_string());
    }

    fn hex_literal() -> [u8; LABEL_LEN] {
        let mut bytes = [0u8; LABEL_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        bytes
    }
}
