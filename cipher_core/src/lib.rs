pub mod crypto;

pub use crypto::cipher_traits::{CipherAlgorithm, Direction};
pub use crypto::error::{CipherError, Result};
