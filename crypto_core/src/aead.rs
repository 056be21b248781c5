//! Authenticated encryption of labels with AES-128-GCM.
//!
//! Ciphertexts are laid out as `nonce || payload || tag`. The nonce is drawn
//! fresh for every encryption, so encrypting the same plaintext twice under
//! the same key gives two different ciphertexts.

use aes::Aes128;
use aes_gcm::{
    aead::{generic_array::GenericArray, Aead},
    AesGcm, KeyInit,
};
use cipher::consts::U12;
use rand_core::{CryptoRng, RngCore};

use crate::CryptoError;

/// Key length in bytes. Equal to the label length since keys are built from labels.
pub const KEY_LEN: usize = 16;
/// Nonce length in bytes, prepended to every ciphertext.
pub const NONCE_LEN: usize = 12;
/// GCM tag length in bytes.
pub const TAG_LEN: usize = 16;

type Aes128Gcm = AesGcm<Aes128, U12>;

/// AES-128-GCM keyed once, used for any number of encryptions/decryptions.
pub struct LabelCipher {
    aead: Aes128Gcm,
}

impl LabelCipher {
    /// Initialize the cipher using `key`, which must be `KEY_LEN` bytes.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let aead = Aes128Gcm::new_from_slice(key).map_err(|_| CryptoError::KeySetup {
            expected: KEY_LEN,
            actual: key.len(),
        })?;
        Ok(LabelCipher { aead })
    }

    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let mut nonce = [0u8; NONCE_LEN];
        rng.try_fill_bytes(&mut nonce)?;

        let sealed = self
            .aead
            .encrypt(GenericArray::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::PlaintextTooLong(plaintext.len()))?;

        let mut res = Vec::with_capacity(NONCE_LEN + sealed.len());
        res.extend_from_slice(&nonce);
        res.extend_from_slice(&sealed);
        Ok(res)
    }

    /// Open `ciphertext`; `AuthenticationFailed` if the tag does not verify.
    ///
    /// A ciphertext too short to hold a nonce and a tag can never verify, and
    /// is reported the same way.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < NONCE_LEN + TAG_LEN {
            return Err(CryptoError::AuthenticationFailed);
        }
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);

        self.aead
            .decrypt(GenericArray::from_slice(nonce), sealed)
            .map_err(|_| CryptoError::AuthenticationFailed)
    }
}

/// Encrypt `plaintext` under `key` with a fresh nonce drawn from `rng`.
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    LabelCipher::new(key)?.encrypt(rng, plaintext)
}

/// Decrypt a ciphertext produced by [`encrypt`].
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    LabelCipher::new(key)?.decrypt(ciphertext)
}
