#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The entropy source could not supply bytes. Every label drawn after
    /// this point would be suspect, so callers should abort.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(#[from] rand::Error),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    KeySetup { expected: usize, actual: usize },

    /// Tag verification failed: wrong key, or the ciphertext was altered.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// GCM refuses plaintexts above its length limit.
    #[error("plaintext of {0} bytes is too long to encrypt")]
    PlaintextTooLong(usize),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
