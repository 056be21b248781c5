pub mod aead;
pub mod block;
pub mod errors;
pub mod label;

pub use crate::{
    aead::{decrypt, encrypt, LabelCipher, KEY_LEN, NONCE_LEN, TAG_LEN},
    block::{Block, LABEL_LEN},
    errors::CryptoError,
    label::{new_label, new_labels},
};
