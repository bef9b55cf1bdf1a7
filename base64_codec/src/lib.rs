pub mod crypto;

pub use crypto::base64::{decode, encode, Base64};
