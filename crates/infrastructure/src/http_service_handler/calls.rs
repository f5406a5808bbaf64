use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use switchyard_application::{CallService, CreateCallInput, TalkInput};
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::{Call, CallCreation};
use uuid::Uuid;

use super::{HttpServiceHandler, to_body};

#[async_trait]
impl CallService for HttpServiceHandler {
    async fn list_calls(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Call>> {
        self.fetch_page(caller, "calls", page).await
    }

    async fn create_calls(
        &self,
        caller: &CallerIdentity,
        input: CreateCallInput,
    ) -> AppResult<CallCreation> {
        self.fetch(Method::POST, Some(caller), "calls", Some(to_body(&input)?))
            .await
    }

    async fn get_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<Call> {
        let path = format!("calls/{call_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn delete_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<Call> {
        let path = format!("calls/{call_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }

    async fn hangup_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<Call> {
        let path = format!("calls/{call_id}/hangup");
        self.fetch(Method::POST, Some(caller), path.as_str(), None)
            .await
    }

    async fn talk_call(
        &self,
        caller: &CallerIdentity,
        call_id: Uuid,
        input: TalkInput,
    ) -> AppResult<()> {
        let path = format!("calls/{call_id}/talk");
        self.command(Method::POST, caller, path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn hold_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()> {
        let path = format!("calls/{call_id}/hold");
        self.command(Method::POST, caller, path.as_str(), None).await
    }

    async fn unhold_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()> {
        let path = format!("calls/{call_id}/hold");
        self.command(Method::DELETE, caller, path.as_str(), None)
            .await
    }

    async fn mute_call(
        &self,
        caller: &CallerIdentity,
        call_id: Uuid,
        direction: String,
    ) -> AppResult<()> {
        let path = format!("calls/{call_id}/mute");
        let body = json!({ "direction": direction });
        self.command(Method::POST, caller, path.as_str(), Some(body))
            .await
    }

    async fn unmute_call(
        &self,
        caller: &CallerIdentity,
        call_id: Uuid,
        direction: String,
    ) -> AppResult<()> {
        let path = format!("calls/{call_id}/mute");
        let body = json!({ "direction": direction });
        self.command(Method::DELETE, caller, path.as_str(), Some(body))
            .await
    }

    async fn start_call_moh(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()> {
        let path = format!("calls/{call_id}/moh");
        self.command(Method::POST, caller, path.as_str(), None).await
    }

    async fn stop_call_moh(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()> {
        let path = format!("calls/{call_id}/moh");
        self.command(Method::DELETE, caller, path.as_str(), None)
            .await
    }

    async fn silence_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()> {
        let path = format!("calls/{call_id}/silence");
        self.command(Method::POST, caller, path.as_str(), None).await
    }

    async fn unsilence_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()> {
        let path = format!("calls/{call_id}/silence");
        self.command(Method::DELETE, caller, path.as_str(), None)
            .await
    }
}
