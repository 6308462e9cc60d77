//! Account domain model: registration, login and profile payloads.
//!
//! Registration uses the backend's canonical field names (`full_name`,
//! `phone_number`); form-side names are mapped before anything is sent.

use crate::donation::ImageAttachment;
use crate::error::{Result, SurplusError};
use crate::session::Role;
use crate::wire;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

pub const MIN_PASSWORD_LEN: usize = 4;
const PICTURE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

fn required(field: &'static str, value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SurplusError::validation(field, format!("{label} is required")));
    }
    Ok(())
}

/// Registration form as the user fills it in.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Validates the form and maps it onto the wire contract.
    ///
    /// Fails before any network call when a field is missing, the email is
    /// malformed, the password is too short or the confirmation differs.
    pub fn validate(&self) -> Result<Registration> {
        required("name", &self.name, "Full name")?;
        required("email", &self.email, "Email")?;
        required("phone", &self.phone, "Phone number")?;
        required("address", &self.address, "Address")?;
        required("password", &self.password, "Password")?;

        if !is_valid_email(&self.email) {
            return Err(SurplusError::validation("email", "Invalid email format"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SurplusError::validation(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        if self.password != self.confirm_password {
            return Err(SurplusError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }

        Ok(Registration {
            full_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(SurplusError::validation(
                "credentials",
                "Email and password are required",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Identity returned by register and login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl std::fmt::Debug for AuthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthData")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("full_name", &self.full_name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Partial profile update. Only provided fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ProfileUpdate {
    /// Builds an update from form values, treating blank strings as absent.
    pub fn from_form(name: Option<&str>, phone: Option<&str>, address: Option<&str>) -> Self {
        let keep = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            full_name: keep(name),
            phone_number: keep(phone),
            address: keep(address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone_number.is_none() && self.address.is_none()
    }
}

/// Checks a profile picture before upload.
pub fn validate_profile_picture(image: &ImageAttachment) -> Result<()> {
    match image.extension() {
        Some(ext) if PICTURE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(SurplusError::validation(
            "profile_picture",
            "Profile picture must be a PNG, JPG or GIF image",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> RegistrationForm {
        RegistrationForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555".to_string(),
            address: "1 Main".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: Role::Donor,
        }
    }

    #[test]
    fn registration_maps_to_canonical_fields() {
        let registration = jane().validate().unwrap();
        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            value,
            json!({
                "full_name": "Jane",
                "email": "jane@x.com",
                "phone_number": "555",
                "address": "1 Main",
                "password": "secret1",
                "role": "donor"
            })
        );
    }

    #[test]
    fn password_mismatch_short_circuits() {
        let mut form = jane();
        form.confirm_password = "secret2".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = jane();
        form.email = "jane.x.com".to_string();
        assert_eq!(form.validate().unwrap_err().to_string(), "Invalid email format");
        assert!(is_valid_email("a.b-c@food.org"));
    }

    #[test]
    fn debug_never_prints_passwords() {
        let rendered = format!("{:?} {:?}", jane(), Credentials::new("a@b.co", "hunter2"));
        assert!(!rendered.contains("secret1"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn profile_update_skips_blank_fields() {
        let update = ProfileUpdate::from_form(Some("Jane Doe"), Some("  "), None);
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"full_name": "Jane Doe"}));
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn auth_data_accepts_numeric_ids() {
        let data: AuthData =
            serde_json::from_value(json!({"user_id": 7, "role": "ngo", "token": "t"})).unwrap();
        assert_eq!(data.user_id, "7");
        assert_eq!(data.role, Role::Ngo);
    }

    #[test]
    fn picture_extension_is_checked() {
        let ok = ImageAttachment::new("me.jpeg", "image/jpeg", vec![]);
        let bad = ImageAttachment::new("me.bmp", "image/bmp", vec![]);
        assert!(validate_profile_picture(&ok).is_ok());
        assert!(validate_profile_picture(&bad).is_err());
    }
}
