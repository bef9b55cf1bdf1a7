pub mod cipher;
pub mod key_schedule;
pub mod sbox;
