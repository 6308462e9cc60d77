//! Application layer for Surplus.
//!
//! Use cases that coordinate the domain types with the session store, the
//! HTTP client and the browse data source. Views (the CLI, or any other
//! front-end) drive these headless controllers and render their state.

pub mod app;
pub mod auth_service;
pub mod browse;
pub mod community_service;
pub mod donation_wizard;
pub mod marketplace_service;
pub mod profile_service;

pub use app::SurplusApp;
pub use auth_service::{AuthService, LoginOutcome};
pub use browse::{BrowseController, BrowseState};
pub use community_service::CommunityService;
pub use donation_wizard::{DonationWizard, SubmissionReceipt, WizardStep};
pub use marketplace_service::MarketplaceService;
pub use profile_service::ProfileService;

#[cfg(test)]
pub(crate) mod test_support;
