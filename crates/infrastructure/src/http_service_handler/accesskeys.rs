use async_trait::async_trait;
use reqwest::Method;
use switchyard_application::{AccesskeyService, CreateAccesskeyInput, UpdateAccesskeyInput};
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::Accesskey;
use uuid::Uuid;

use super::{HttpServiceHandler, to_body};

#[async_trait]
impl AccesskeyService for HttpServiceHandler {
    async fn list_accesskeys(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Accesskey>> {
        self.fetch_page(caller, "accesskeys", page).await
    }

    async fn create_accesskey(
        &self,
        caller: &CallerIdentity,
        input: CreateAccesskeyInput,
    ) -> AppResult<Accesskey> {
        self.fetch(Method::POST, Some(caller), "accesskeys", Some(to_body(&input)?))
            .await
    }

    async fn get_accesskey(
        &self,
        caller: &CallerIdentity,
        accesskey_id: Uuid,
    ) -> AppResult<Accesskey> {
        let path = format!("accesskeys/{accesskey_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn update_accesskey(
        &self,
        caller: &CallerIdentity,
        accesskey_id: Uuid,
        input: UpdateAccesskeyInput,
    ) -> AppResult<Accesskey> {
        let path = format!("accesskeys/{accesskey_id}");
        self.fetch(Method::PUT, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn delete_accesskey(
        &self,
        caller: &CallerIdentity,
        accesskey_id: Uuid,
    ) -> AppResult<Accesskey> {
        let path = format!("accesskeys/{accesskey_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }
}
