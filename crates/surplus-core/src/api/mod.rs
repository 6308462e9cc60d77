//! Remote API contract.
//!
//! # Module Structure
//!
//! - `envelope`: `{status, message, data}` wrapper and paginated lists
//! - `operation`: Every remote operation with its fallback error text
//! - `service`: The `FoodShareApi` trait implemented by transport crates

mod envelope;
mod operation;
mod service;

pub use envelope::{Envelope, EnvelopeStatus, Page};
pub use operation::ApiOperation;
pub use service::FoodShareApi;
