pub mod number_theory;
pub mod rsa;

pub use rsa::{derive_keys, RsaKeyPair, RsaService};
