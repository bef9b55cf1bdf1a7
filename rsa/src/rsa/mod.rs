pub mod keygen;
pub mod rsa;

pub use keygen::{derive_keys, derive_keys_with_exponent, RsaKeyPair, DEFAULT_PUBLIC_EXPONENT};
pub use rsa::{DefaultPrimes, RsaService};
