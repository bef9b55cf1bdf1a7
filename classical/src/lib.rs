pub mod crypto;

pub use crypto::caesar::Caesar;
pub use crypto::vigenere::Vigenere;
