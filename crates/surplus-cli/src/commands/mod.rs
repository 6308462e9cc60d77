pub mod account;
pub mod browse;
pub mod community;
pub mod donate;
pub mod market;
pub mod utils;
