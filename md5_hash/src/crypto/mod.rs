pub mod md5;
pub mod md5_tables;
