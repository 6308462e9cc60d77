//! Create-donation payload built from a complete draft.

use super::draft::{Category, ContactPreference, DonationDraft, ImageAttachment, QuantityUnit};
use super::validation::{DraftStep, validate_step};
use crate::error::{Result, SurplusError};
use chrono::{Days, NaiveDate, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Everything `POST /donations` receives, in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationSubmission {
    pub food_item: String,
    pub quantity: u32,
    pub unit: QuantityUnit,
    pub category: Category,
    pub description: String,
    pub prepared_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
    pub contains_allergens: bool,
    pub pickup_address: String,
    pub pickup_from: NaiveTime,
    pub pickup_to: NaiveTime,
    pub pickup_days: Vec<String>,
    pub contact_preference: ContactPreference,
    pub pickup_notes: String,
    pub image: Option<ImageAttachment>,
}

impl DonationSubmission {
    /// Builds the payload, failing when the draft does not satisfy the
    /// review predicate. `today` anchors the relative expiry.
    pub fn from_draft(draft: &DonationDraft, today: NaiveDate) -> Result<Self> {
        validate_step(DraftStep::Review, draft)?;

        let (Some(category), Some(pickup_from), Some(pickup_to)) = (
            draft.category,
            draft.pickup.from_time,
            draft.pickup.to_time,
        ) else {
            // validate_step already rejected these
            return Err(SurplusError::internal(
                "validated draft is missing category or pickup window",
            ));
        };

        let expiry_date = today
            .checked_add_days(Days::new(u64::from(draft.expiry.whole_days())))
            .ok_or_else(|| SurplusError::validation("expiry", "Expiry is too far away"))?;

        Ok(Self {
            food_item: draft.name.trim().to_string(),
            quantity: draft.quantity.amount,
            unit: draft.quantity.unit,
            category,
            description: draft.description.trim().to_string(),
            prepared_date: draft.prepared_date,
            expiry_date,
            contains_allergens: draft.contains_allergens,
            pickup_address: draft.pickup.address.trim().to_string(),
            pickup_from,
            pickup_to,
            pickup_days: draft.pickup.days.iter().map(|d| d.to_string()).collect(),
            contact_preference: draft.pickup.contact_preference,
            pickup_notes: draft.pickup.notes.trim().to_string(),
            image: draft.image.clone(),
        })
    }

    /// Text fields of the multipart form. The image travels separately as
    /// the `donation_image` part.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("food_item", self.food_item.clone()),
            ("quantity", self.quantity.to_string()),
            ("unit", self.unit.to_string()),
            ("category", self.category.to_string()),
            ("description", self.description.clone()),
            ("expiry_date", self.expiry_date.format(DATE_FORMAT).to_string()),
            ("contains_allergens", self.contains_allergens.to_string()),
            ("pickup_address", self.pickup_address.clone()),
            ("pickup_from", self.pickup_from.format(TIME_FORMAT).to_string()),
            ("pickup_to", self.pickup_to.format(TIME_FORMAT).to_string()),
            ("pickup_days", self.pickup_days.join(",")),
            ("contact_preference", self.contact_preference.to_string()),
            ("pickup_notes", self.pickup_notes.clone()),
        ];
        if let Some(prepared) = self.prepared_date {
            fields.push(("prepared_date", prepared.format(DATE_FORMAT).to_string()));
        }
        fields
    }
}
