//! Domain layer of the Surplus food-sharing client.
//!
//! Holds the models, validation rules and the traits (`FoodShareApi`,
//! `SessionStore`, `DonationSource`, `PreviewAllocator`) that the
//! infrastructure and interaction crates implement. Nothing here performs I/O.

pub mod account;
pub mod api;
pub mod browse;
pub mod community;
pub mod config;
pub mod donation;
pub mod error;
pub mod request;
pub mod session;
pub mod wire;

// Re-export common error type
pub use error::{Result, SurplusError, error_message, error_message_from_value};
