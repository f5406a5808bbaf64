use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::Contact;
use uuid::Uuid;

/// Phone number attached to a contact on create or add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhoneNumberInput {
    /// Number as entered.
    pub number: String,
    /// Normalized E.164 form.
    pub number_e164: String,
    /// Number type, e.g. `mobile`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether this becomes the primary number.
    pub is_primary: bool,
}

/// Email attached to a contact on create or add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailInput {
    /// Email address.
    pub address: String,
    /// Email type, e.g. `work`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether this becomes the primary address.
    pub is_primary: bool,
}

/// Contact creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateContactInput {
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
    /// Origin of the contact.
    pub source: String,
    /// Identifier in an external system.
    pub external_id: String,
    /// Free-form notes.
    pub notes: String,
    /// Initial phone numbers.
    pub phone_numbers: Vec<PhoneNumberInput>,
    /// Initial emails.
    pub emails: Vec<EmailInput>,
    /// Initial tags.
    pub tag_ids: Vec<Uuid>,
}

/// Partial contact update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateContactInput {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Preferred display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Identifier in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Lookup key for finding a contact by phone number or email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactLookup {
    /// Phone number in E.164 form, empty when not searched.
    pub phone_e164: String,
    /// Email address, empty when not searched.
    pub email: String,
}

/// Backend port for the contact address book.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Lists contacts.
    async fn list_contacts(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Contact>>;

    /// Finds one contact by phone number or email.
    async fn lookup_contact(
        &self,
        caller: &CallerIdentity,
        lookup: ContactLookup,
    ) -> AppResult<Contact>;

    /// Creates a contact together with its numbers, emails and tags.
    async fn create_contact(
        &self,
        caller: &CallerIdentity,
        input: CreateContactInput,
    ) -> AppResult<Contact>;

    /// Returns one contact.
    async fn get_contact(&self, caller: &CallerIdentity, contact_id: Uuid) -> AppResult<Contact>;

    /// Applies a partial update.
    async fn update_contact(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        input: UpdateContactInput,
    ) -> AppResult<Contact>;

    /// Deletes one contact.
    async fn delete_contact(&self, caller: &CallerIdentity, contact_id: Uuid)
    -> AppResult<Contact>;

    /// Adds a phone number and returns the updated contact.
    async fn add_contact_phone_number(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        input: PhoneNumberInput,
    ) -> AppResult<Contact>;

    /// Removes a phone number and returns the updated contact.
    async fn remove_contact_phone_number(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        phone_number_id: Uuid,
    ) -> AppResult<Contact>;

    /// Adds an email and returns the updated contact.
    async fn add_contact_email(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        input: EmailInput,
    ) -> AppResult<Contact>;

    /// Removes an email and returns the updated contact.
    async fn remove_contact_email(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        email_id: Uuid,
    ) -> AppResult<Contact>;

    /// Links a tag and returns the updated contact.
    async fn add_contact_tag(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        tag_id: Uuid,
    ) -> AppResult<Contact>;

    /// Unlinks a tag and returns the updated contact.
    async fn remove_contact_tag(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        tag_id: Uuid,
    ) -> AppResult<Contact>;
}
