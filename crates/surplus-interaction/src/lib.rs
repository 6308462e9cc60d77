//! HTTP transport for the Surplus client.
//!
//! [`HttpApiClient`] implements `FoodShareApi` over `reqwest`, and
//! [`RemoteDonationSource`] feeds the browse view from `GET /food/available`.

mod client;
mod remote_source;
mod response;

pub use client::HttpApiClient;
pub use remote_source::RemoteDonationSource;
