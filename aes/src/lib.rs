pub mod rijndael;

pub use rijndael::cipher::{Aes, Block, BLOCK_SIZE};
pub use rijndael::key_schedule::{expand_key, KeySchedule, KeySize};
