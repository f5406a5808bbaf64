use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use switchyard_core::Timestamped;
use switchyard_core::timestamp::display;
use uuid::Uuid;

/// Address-book entry with its phone numbers, emails and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Contact identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Preferred display name.
    pub display_name: String,
    /// Company name.
    pub company: String,
    /// Job title.
    pub job_title: String,
    /// Where the contact came from, e.g. `manual` or `import`.
    pub source: String,
    /// Identifier in an external system.
    pub external_id: String,
    /// Free-form notes.
    pub notes: String,
    /// Registered phone numbers.
    pub phone_numbers: Vec<ContactPhoneNumber>,
    /// Registered email addresses.
    pub emails: Vec<ContactEmail>,
    /// Attached tags.
    pub tag_ids: Vec<Uuid>,
    /// Creation time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    /// Deletion time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Timestamped for Contact {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}

/// Phone number registered on a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPhoneNumber {
    /// Phone number identifier.
    pub id: Uuid,
    /// Owning contact.
    pub contact_id: Uuid,
    /// Number as entered.
    pub number: String,
    /// Normalized E.164 form.
    pub number_e164: String,
    /// Number type, e.g. `mobile` or `work`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether this is the primary number.
    pub is_primary: bool,
    /// Creation time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
}

/// Email address registered on a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactEmail {
    /// Email identifier.
    pub id: Uuid,
    /// Owning contact.
    pub contact_id: Uuid,
    /// Email address.
    pub address: String,
    /// Email type, e.g. `personal` or `work`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether this is the primary address.
    pub is_primary: bool,
    /// Creation time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
}
