use crypto_core::CryptoError;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    /// No table entry authenticated under the key built from the presented
    /// labels: the labels do not belong to this gate, or the table is corrupted.
    #[error("failed to evaluate gate: no matching table entry")]
    NoMatchingEntry,

    #[error("authenticated plaintext is {len} bytes, not a label")]
    InvalidLabel { len: usize },

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
