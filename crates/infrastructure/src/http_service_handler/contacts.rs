use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use switchyard_application::{
    ContactLookup, ContactService, CreateContactInput, EmailInput, PhoneNumberInput,
    UpdateContactInput,
};
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::Contact;
use uuid::Uuid;

use super::{HttpServiceHandler, decode, to_body};

#[async_trait]
impl ContactService for HttpServiceHandler {
    async fn list_contacts(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Contact>> {
        self.fetch_page(caller, "contacts", page).await
    }

    async fn lookup_contact(
        &self,
        caller: &CallerIdentity,
        lookup: ContactLookup,
    ) -> AppResult<Contact> {
        let mut query = Vec::new();
        if !lookup.phone_e164.is_empty() {
            query.push(("phone_e164", lookup.phone_e164.as_str()));
        }
        if !lookup.email.is_empty() {
            query.push(("email", lookup.email.as_str()));
        }

        let response = self
            .send(Method::GET, "contacts/lookup", Some(caller), &query, None)
            .await?;
        decode(response, "contacts/lookup").await
    }

    async fn create_contact(
        &self,
        caller: &CallerIdentity,
        input: CreateContactInput,
    ) -> AppResult<Contact> {
        self.fetch(Method::POST, Some(caller), "contacts", Some(to_body(&input)?))
            .await
    }

    async fn get_contact(&self, caller: &CallerIdentity, contact_id: Uuid) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn update_contact(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        input: UpdateContactInput,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}");
        self.fetch(Method::PUT, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn delete_contact(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }

    async fn add_contact_phone_number(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        input: PhoneNumberInput,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}/phone-numbers");
        self.fetch(Method::POST, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn remove_contact_phone_number(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        phone_number_id: Uuid,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}/phone-numbers/{phone_number_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }

    async fn add_contact_email(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        input: EmailInput,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}/emails");
        self.fetch(Method::POST, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn remove_contact_email(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        email_id: Uuid,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}/emails/{email_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }

    async fn add_contact_tag(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        tag_id: Uuid,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}/tags");
        self.fetch(
            Method::POST,
            Some(caller),
            path.as_str(),
            Some(json!({ "tag_id": tag_id })),
        )
        .await
    }

    async fn remove_contact_tag(
        &self,
        caller: &CallerIdentity,
        contact_id: Uuid,
        tag_id: Uuid,
    ) -> AppResult<Contact> {
        let path = format!("contacts/{contact_id}/tags/{tag_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }
}
