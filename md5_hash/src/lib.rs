pub mod crypto;

pub use crypto::md5::{digest, digest_hex, Md5};
