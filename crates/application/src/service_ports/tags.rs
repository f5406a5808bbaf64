use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::Tag;
use uuid::Uuid;

/// Tag creation/update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveTagInput {
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
}

/// Backend port for tags.
#[async_trait]
pub trait TagService: Send + Sync {
    /// Lists tags.
    async fn list_tags(&self, caller: &CallerIdentity, page: &PageRequest) -> AppResult<Vec<Tag>>;

    /// Creates a tag.
    async fn create_tag(&self, caller: &CallerIdentity, input: SaveTagInput) -> AppResult<Tag>;

    /// Returns one tag.
    async fn get_tag(&self, caller: &CallerIdentity, tag_id: Uuid) -> AppResult<Tag>;

    /// Updates one tag.
    async fn update_tag(
        &self,
        caller: &CallerIdentity,
        tag_id: Uuid,
        input: SaveTagInput,
    ) -> AppResult<Tag>;

    /// Deletes one tag.
    async fn delete_tag(&self, caller: &CallerIdentity, tag_id: Uuid) -> AppResult<Tag>;
}
