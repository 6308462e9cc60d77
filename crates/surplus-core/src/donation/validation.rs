//! Per-step validation predicates for the donation wizard.
//!
//! A step transition is only permitted when the predicate of the step being
//! left holds. Predicates never look at fields owned by later steps.

use super::draft::DonationDraft;
use crate::error::{Result, SurplusError};
use serde::{Deserialize, Serialize};

/// Input steps of the donation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStep {
    /// Food details: name, category, quantity, expiry.
    Details,
    /// Pickup address, window and days.
    Pickup,
    /// Final review before submission.
    Review,
}

/// A single failed requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldIssue {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl From<FieldIssue> for SurplusError {
    fn from(issue: FieldIssue) -> Self {
        SurplusError::validation(issue.field, issue.message)
    }
}

fn details_issues(draft: &DonationDraft, issues: &mut Vec<FieldIssue>) {
    if draft.name.trim().is_empty() {
        issues.push(FieldIssue::new("name", "Food name is required"));
    }
    if draft.category.is_none() {
        issues.push(FieldIssue::new("category", "Select a category"));
    }
    if draft.quantity.amount == 0 {
        issues.push(FieldIssue::new("quantity", "Quantity must be a positive number"));
    }
    if draft.expiry.hours > 23 {
        issues.push(FieldIssue::new("expiry", "Expiry hours must be between 0 and 23"));
    } else if draft.expiry.is_zero() {
        issues.push(FieldIssue::new("expiry", "Tell us how long the food stays fresh"));
    }
}

fn pickup_issues(draft: &DonationDraft, issues: &mut Vec<FieldIssue>) {
    let pickup = &draft.pickup;
    if pickup.address.trim().is_empty() {
        issues.push(FieldIssue::new("pickup.address", "Pickup address is required"));
    }
    match (pickup.from_time, pickup.to_time) {
        (Some(from), Some(to)) if from >= to => {
            issues.push(FieldIssue::new(
                "pickup.window",
                "Pickup window must end after it starts",
            ));
        }
        (Some(_), Some(_)) => {}
        _ => issues.push(FieldIssue::new(
            "pickup.window",
            "Pickup window needs a start and end time",
        )),
    }
    if pickup.days.is_empty() {
        issues.push(FieldIssue::new("pickup.days", "Select at least one pickup day"));
    }
}

/// Collects every unmet requirement of `step`.
pub fn check_step(step: DraftStep, draft: &DonationDraft) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    match step {
        DraftStep::Details => details_issues(draft, &mut issues),
        DraftStep::Pickup => pickup_issues(draft, &mut issues),
        DraftStep::Review => {
            details_issues(draft, &mut issues);
            pickup_issues(draft, &mut issues);
        }
    }
    issues
}

/// Fails with the first unmet requirement of `step`.
pub fn validate_step(step: DraftStep, draft: &DonationDraft) -> Result<()> {
    match check_step(step, draft).into_iter().next() {
        Some(issue) => Err(issue.into()),
        None => Ok(()),
    }
}
