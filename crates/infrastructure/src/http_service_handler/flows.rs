use async_trait::async_trait;
use reqwest::Method;
use switchyard_application::{ActiveflowService, CreateActiveflowInput, FlowService, SaveFlowInput};
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::{Activeflow, Flow};
use uuid::Uuid;

use super::{HttpServiceHandler, to_body};

#[async_trait]
impl FlowService for HttpServiceHandler {
    async fn list_flows(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Flow>> {
        self.fetch_page(caller, "flows", page).await
    }

    async fn create_flow(&self, caller: &CallerIdentity, input: SaveFlowInput) -> AppResult<Flow> {
        self.fetch(Method::POST, Some(caller), "flows", Some(to_body(&input)?))
            .await
    }

    async fn get_flow(&self, caller: &CallerIdentity, flow_id: Uuid) -> AppResult<Flow> {
        let path = format!("flows/{flow_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn update_flow(
        &self,
        caller: &CallerIdentity,
        flow_id: Uuid,
        input: SaveFlowInput,
    ) -> AppResult<Flow> {
        let path = format!("flows/{flow_id}");
        self.fetch(Method::PUT, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn delete_flow(&self, caller: &CallerIdentity, flow_id: Uuid) -> AppResult<Flow> {
        let path = format!("flows/{flow_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }
}

#[async_trait]
impl ActiveflowService for HttpServiceHandler {
    async fn list_activeflows(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Activeflow>> {
        self.fetch_page(caller, "activeflows", page).await
    }

    async fn create_activeflow(
        &self,
        caller: &CallerIdentity,
        input: CreateActiveflowInput,
    ) -> AppResult<Activeflow> {
        self.fetch(Method::POST, Some(caller), "activeflows", Some(to_body(&input)?))
            .await
    }

    async fn get_activeflow(
        &self,
        caller: &CallerIdentity,
        activeflow_id: Uuid,
    ) -> AppResult<Activeflow> {
        let path = format!("activeflows/{activeflow_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn delete_activeflow(
        &self,
        caller: &CallerIdentity,
        activeflow_id: Uuid,
    ) -> AppResult<Activeflow> {
        let path = format!("activeflows/{activeflow_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }

    async fn stop_activeflow(
        &self,
        caller: &CallerIdentity,
        activeflow_id: Uuid,
    ) -> AppResult<Activeflow> {
        let path = format!("activeflows/{activeflow_id}/stop");
        self.fetch(Method::POST, Some(caller), path.as_str(), None)
            .await
    }
}
