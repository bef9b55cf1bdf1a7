pub mod cipher_traits;
pub mod error;
pub mod gf256;
pub mod utils;
