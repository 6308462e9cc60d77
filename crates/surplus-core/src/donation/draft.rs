//! DonationDraft: the transient, unsaved donation held by the wizard.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString};

/// Unit attached to a donated quantity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuantityUnit {
    #[default]
    Servings,
    Items,
    Kg,
    Lbs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    /// Cooked meal
    Cooked,
    /// Fresh produce
    Produce,
    Bakery,
    /// Canned goods
    Canned,
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PickupDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContactPreference {
    /// In-app messaging
    #[default]
    App,
    Phone,
    Sms,
    Email,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: u32,
    pub unit: QuantityUnit,
}

/// How long the food stays safe to eat, counted from submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    pub days: u32,
    /// 0-23
    pub hours: u8,
}

impl Expiry {
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0
    }

    /// Whole days until expiry, rounding a partial day up.
    pub fn whole_days(&self) -> u32 {
        if self.hours > 0 {
            self.days.saturating_add(1)
        } else {
            self.days
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupWindow {
    pub address: String,
    pub from_time: Option<NaiveTime>,
    pub to_time: Option<NaiveTime>,
    pub days: BTreeSet<PickupDay>,
    pub contact_preference: ContactPreference,
    pub notes: String,
}

/// A binary image selected for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Wizard-local donation in progress. Never persisted until the final submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationDraft {
    pub image: Option<ImageAttachment>,
    pub name: String,
    pub category: Option<Category>,
    pub description: String,
    pub quantity: Quantity,
    pub prepared_date: Option<NaiveDate>,
    pub expiry: Expiry,
    pub contains_allergens: bool,
    pub pickup: PickupWindow,
}

impl DonationDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn expiry_rounds_partial_days_up() {
        assert_eq!(Expiry { days: 2, hours: 0 }.whole_days(), 2);
        assert_eq!(Expiry { days: 2, hours: 5 }.whole_days(), 3);
        assert_eq!(Expiry { days: 0, hours: 1 }.whole_days(), 1);
        assert!(Expiry::default().is_zero());
    }

    #[test]
    fn enums_parse_from_form_values() {
        assert_eq!(QuantityUnit::from_str("kg").unwrap(), QuantityUnit::Kg);
        assert_eq!(Category::from_str("Produce").unwrap(), Category::Produce);
        assert_eq!(PickupDay::from_str("sat").unwrap(), PickupDay::Sat);
        assert_eq!(ContactPreference::default(), ContactPreference::App);
    }

    #[test]
    fn attachment_extension_is_lowercased() {
        let image = ImageAttachment::new("Lasagna.JPG", "image/jpeg", vec![1, 2, 3]);
        assert_eq!(image.extension().as_deref(), Some("jpg"));
        assert!(format!("{image:?}").contains("len: 3"));
    }

    #[test]
    fn default_draft_is_empty() {
        let mut draft = DonationDraft::default();
        assert!(draft.is_empty());
        draft.name = "Soup".to_string();
        assert!(!draft.is_empty());
    }
}
