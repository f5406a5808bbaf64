use async_trait::async_trait;
use reqwest::Method;
use switchyard_application::{SaveTagInput, TagService};
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::Tag;
use uuid::Uuid;

use super::{HttpServiceHandler, to_body};

#[async_trait]
impl TagService for HttpServiceHandler {
    async fn list_tags(&self, caller: &CallerIdentity, page: &PageRequest) -> AppResult<Vec<Tag>> {
        self.fetch_page(caller, "tags", page).await
    }

    async fn create_tag(&self, caller: &CallerIdentity, input: SaveTagInput) -> AppResult<Tag> {
        self.fetch(Method::POST, Some(caller), "tags", Some(to_body(&input)?))
            .await
    }

    async fn get_tag(&self, caller: &CallerIdentity, tag_id: Uuid) -> AppResult<Tag> {
        let path = format!("tags/{tag_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn update_tag(
        &self,
        caller: &CallerIdentity,
        tag_id: Uuid,
        input: SaveTagInput,
    ) -> AppResult<Tag> {
        let path = format!("tags/{tag_id}");
        self.fetch(Method::PUT, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn delete_tag(&self, caller: &CallerIdentity, tag_id: Uuid) -> AppResult<Tag> {
        let path = format!("tags/{tag_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }
}
