//! Donation domain module.
//!
//! # Module Structure
//!
//! - `model`: Server-owned donation projections (`Donation`, `DonationStatus`)
//! - `draft`: Wizard-local `DonationDraft` and its value objects
//! - `validation`: Per-step predicates over a draft
//! - `preview`: Local image preview handles and their allocator
//! - `submission`: Conversion of a complete draft into the create-donation payload

mod draft;
mod model;
mod preview;
mod submission;
mod validation;

pub use draft::{
    Category, ContactPreference, DonationDraft, Expiry, ImageAttachment, PickupDay, PickupWindow,
    Quantity, QuantityUnit,
};
pub use model::{Donation, DonationFilters, DonationStatus};
pub use preview::{DefaultPreviewAllocator, PreviewAllocator, PreviewHandle, PreviewRef};
pub use submission::DonationSubmission;
pub use validation::{DraftStep, FieldIssue, check_step, validate_step};
