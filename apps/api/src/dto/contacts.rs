use serde::Deserialize;
use switchyard_application::{
    ContactLookup, CreateContactInput, EmailInput, PhoneNumberInput, UpdateContactInput,
};
use ts_rs::TS;
use uuid::Uuid;

use crate::dispatch::{Input, RawInput};
use crate::error::{ApiError, ApiResult};

/// Phone number entry inside contact payloads.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/contact-phone-number-request.ts"
)]
pub struct ContactPhoneNumberRequest {
    pub number: String,
    pub number_e164: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_primary: bool,
}

/// Email entry inside contact payloads.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/contact-email-request.ts"
)]
pub struct ContactEmailRequest {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_primary: bool,
}

/// Incoming payload for contact creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-contact-request.ts"
)]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub company: String,
    pub job_title: String,
    pub source: String,
    pub external_id: String,
    pub notes: String,
    pub phone_numbers: Vec<ContactPhoneNumberRequest>,
    pub emails: Vec<ContactEmailRequest>,
    #[ts(type = "Array<string>")]
    pub tag_ids: Vec<Uuid>,
}

/// Incoming payload for partial contact updates.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-contact-request.ts"
)]
pub struct UpdateContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub external_id: Option<String>,
    pub notes: Option<String>,
}

/// Incoming payload for linking a tag to a contact.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/add-contact-tag-request.ts"
)]
pub struct AddContactTagRequest {
    #[ts(type = "string")]
    pub tag_id: Uuid,
}

impl From<ContactPhoneNumberRequest> for PhoneNumberInput {
    fn from(value: ContactPhoneNumberRequest) -> Self {
        Self {
            number: value.number,
            number_e164: value.number_e164,
            kind: value.kind,
            is_primary: value.is_primary,
        }
    }
}

impl From<ContactEmailRequest> for EmailInput {
    fn from(value: ContactEmailRequest) -> Self {
        Self {
            address: value.address,
            kind: value.kind,
            is_primary: value.is_primary,
        }
    }
}

impl From<CreateContactRequest> for CreateContactInput {
    fn from(value: CreateContactRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            display_name: value.display_name,
            company: value.company,
            job_title: value.job_title,
            source: value.source,
            external_id: value.external_id,
            notes: value.notes,
            phone_numbers: value
                .phone_numbers
                .into_iter()
                .map(PhoneNumberInput::from)
                .collect(),
            emails: value.emails.into_iter().map(EmailInput::from).collect(),
            tag_ids: value.tag_ids,
        }
    }
}

impl From<UpdateContactRequest> for UpdateContactInput {
    fn from(value: UpdateContactRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            display_name: value.display_name,
            company: value.company,
            job_title: value.job_title,
            external_id: value.external_id,
            notes: value.notes,
        }
    }
}

impl Input for ContactLookup {
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self> {
        let phone_e164 = raw.query_value("phone_e164").unwrap_or_default();
        let email = raw.query_value("email").unwrap_or_default();

        if phone_e164.is_empty() && email.is_empty() {
            return Err(ApiError::MalformedRequest(
                "lookup requires phone_e164 or email".to_owned(),
            ));
        }

        Ok(Self { phone_e164, email })
    }
}
