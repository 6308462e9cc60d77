//! Three-step donation wizard.
//!
//! `Details -> Pickup -> Review -> Submitted`. Moving forward requires the
//! predicate of the step being left; moving back never validates. Submitting
//! awaits the create-donation call and only reaches `Submitted` on success,
//! so a failed call leaves the draft intact for a retry.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use surplus_core::api::FoodShareApi;
use surplus_core::donation::{
    DefaultPreviewAllocator, Donation, DonationDraft, DonationSubmission, DraftStep, FieldIssue,
    ImageAttachment, PreviewAllocator, PreviewHandle, PreviewRef, check_step, validate_step,
};
use surplus_core::session::SessionContext;
use surplus_core::{Result, SurplusError, error_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Pickup,
    Review,
    /// Confirmation shown after a successful submit.
    Submitted,
}

impl WizardStep {
    fn draft_step(self) -> Option<DraftStep> {
        match self {
            WizardStep::Details => Some(DraftStep::Details),
            WizardStep::Pickup => Some(DraftStep::Pickup),
            WizardStep::Review => Some(DraftStep::Review),
            WizardStep::Submitted => None,
        }
    }
}

/// What the server acknowledged for a submitted donation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub message: String,
    pub donation: Option<Donation>,
}

pub struct DonationWizard {
    step: WizardStep,
    draft: DonationDraft,
    preview: Option<PreviewHandle>,
    allocator: Arc<dyn PreviewAllocator>,
    last_error: Option<String>,
    receipt: Option<SubmissionReceipt>,
}

impl Default for DonationWizard {
    fn default() -> Self {
        Self::new(Arc::new(DefaultPreviewAllocator))
    }
}

impl DonationWizard {
    pub fn new(allocator: Arc<dyn PreviewAllocator>) -> Self {
        Self {
            step: WizardStep::Details,
            draft: DonationDraft::default(),
            preview: None,
            allocator,
            last_error: None,
            receipt: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &DonationDraft {
        &self.draft
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.preview.as_ref().map(PreviewHandle::reference)
    }

    /// Error from the last failed submit, cleared by the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    /// Edits the draft. Image changes made here are synced with the preview.
    pub fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut DonationDraft),
    {
        self.ensure_editable()?;
        let before = self.draft.image.clone();
        f(&mut self.draft);
        if self.draft.image != before {
            self.sync_preview();
        }
        Ok(())
    }

    /// Selects an image, releasing the previous preview first.
    pub fn set_image(&mut self, image: ImageAttachment) -> Result<()> {
        self.ensure_editable()?;
        self.draft.image = Some(image);
        self.sync_preview();
        Ok(())
    }

    pub fn remove_image(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.draft.image = None;
        self.sync_preview();
        Ok(())
    }

    /// Unmet requirements of the current step.
    pub fn issues(&self) -> Vec<FieldIssue> {
        self.step
            .draft_step()
            .map(|step| check_step(step, &self.draft))
            .unwrap_or_default()
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.step, WizardStep::Details | WizardStep::Pickup) && self.issues().is_empty()
    }

    /// Moves one step forward when the current step is complete.
    pub fn next(&mut self) -> Result<WizardStep> {
        let target = match self.step {
            WizardStep::Details => WizardStep::Pickup,
            WizardStep::Pickup => WizardStep::Review,
            WizardStep::Review => {
                return Err(SurplusError::validation("step", "Submit the donation to finish"));
            }
            WizardStep::Submitted => return Err(Self::submitted_error()),
        };
        if let Some(step) = self.step.draft_step() {
            validate_step(step, &self.draft)?;
        }
        tracing::debug!("[Wizard] {:?} -> {:?}", self.step, target);
        self.step = target;
        Ok(target)
    }

    /// Moves one step back without validating.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Review => WizardStep::Pickup,
            WizardStep::Pickup | WizardStep::Details => WizardStep::Details,
            WizardStep::Submitted => WizardStep::Submitted,
        };
        self.step
    }

    /// Submits with today's local date as the expiry anchor.
    pub async fn submit(
        &mut self,
        api: &dyn FoodShareApi,
        session: &SessionContext,
    ) -> Result<&SubmissionReceipt> {
        self.submit_on(api, session, Local::now().date_naive()).await
    }

    /// Submits the draft. On failure the draft, image and step are kept and
    /// the display message is stored in [`last_error`](Self::last_error).
    pub async fn submit_on(
        &mut self,
        api: &dyn FoodShareApi,
        session: &SessionContext,
        today: NaiveDate,
    ) -> Result<&SubmissionReceipt> {
        if self.step != WizardStep::Review {
            return Err(SurplusError::validation(
                "step",
                "Review the donation before submitting",
            ));
        }
        self.last_error = None;

        let outcome = match (DonationSubmission::from_draft(&self.draft, today), session.require()) {
            (Ok(submission), Ok(current)) => {
                session.guard(api.create_donation(&current, &submission).await)
            }
            (Err(err), _) | (_, Err(err)) => Err(err),
        };

        match outcome {
            Ok(envelope) => {
                tracing::info!("[Wizard] Donation '{}' submitted", self.draft.name.trim());
                self.clear_draft();
                self.step = WizardStep::Submitted;
                let receipt: &SubmissionReceipt = self.receipt.insert(SubmissionReceipt {
                    message: envelope.message,
                    donation: envelope.data,
                });
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!("[Wizard] Submit failed: {}", err);
                self.last_error = Some(error_message(&err));
                Err(err)
            }
        }
    }

    /// Leaves the confirmation (or abandons the draft) and starts over.
    pub fn dismiss(&mut self) {
        self.clear_draft();
        self.receipt = None;
        self.last_error = None;
        self.step = WizardStep::Details;
    }

    fn clear_draft(&mut self) {
        self.preview = None;
        self.draft = DonationDraft::default();
    }

    fn sync_preview(&mut self) {
        // release before allocating so two previews never coexist
        self.preview = None;
        if let Some(image) = &self.draft.image {
            self.preview = Some(PreviewHandle::allocate(self.allocator.clone(), image));
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.step == WizardStep::Submitted {
            return Err(Self::submitted_error());
        }
        Ok(())
    }

    fn submitted_error() -> SurplusError {
        SurplusError::validation("step", "Dismiss the confirmation to start a new donation")
    }
}
