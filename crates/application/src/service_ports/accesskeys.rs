use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::Accesskey;
use uuid::Uuid;

/// Accesskey creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAccesskeyInput {
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
    /// Lifetime in seconds. Zero lets the backend pick its default.
    pub expire: i32,
}

/// Accesskey update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAccesskeyInput {
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
}

/// Backend port for accesskey management.
#[async_trait]
pub trait AccesskeyService: Send + Sync {
    /// Lists accesskeys owned by the caller's customer, oldest first.
    async fn list_accesskeys(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Accesskey>>;

    /// Creates a new accesskey.
    async fn create_accesskey(
        &self,
        caller: &CallerIdentity,
        input: CreateAccesskeyInput,
    ) -> AppResult<Accesskey>;

    /// Returns one accesskey.
    async fn get_accesskey(&self, caller: &CallerIdentity, accesskey_id: Uuid)
    -> AppResult<Accesskey>;

    /// Updates name and detail of one accesskey.
    async fn update_accesskey(
        &self,
        caller: &CallerIdentity,
        accesskey_id: Uuid,
        input: UpdateAccesskeyInput,
    ) -> AppResult<Accesskey>;

    /// Deletes one accesskey and returns it as it stood at delete time.
    async fn delete_accesskey(
        &self,
        caller: &CallerIdentity,
        accesskey_id: Uuid,
    ) -> AppResult<Accesskey>;
}
