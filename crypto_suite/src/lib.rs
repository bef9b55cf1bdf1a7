pub mod algorithm;
pub mod batch;
pub mod config;

pub use algorithm::{run, run_verified, Algorithm, SuiteCipher, Verified};
pub use batch::{run_batch, Job};
pub use config::SuiteConfig;
