#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateTypeError {
    #[error("unknown gate type {0:?}, expected one of AND, OR, XOR")]
    Unknown(String),
}
