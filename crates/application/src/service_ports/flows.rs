use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::{Action, Activeflow, Flow};
use uuid::Uuid;

/// Flow creation/update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SaveFlowInput {
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
    /// Ordered actions.
    pub actions: Vec<Action>,
}

/// Activeflow start payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateActiveflowInput {
    /// Requested identifier, nil to let the backend assign one.
    pub id: Uuid,
    /// Stored flow to run, nil when `actions` is used.
    pub flow_id: Uuid,
    /// Ad hoc actions.
    pub actions: Vec<Action>,
}

/// Backend port for stored flows.
#[async_trait]
pub trait FlowService: Send + Sync {
    /// Lists flows.
    async fn list_flows(&self, caller: &CallerIdentity, page: &PageRequest)
    -> AppResult<Vec<Flow>>;

    /// Creates a flow.
    async fn create_flow(&self, caller: &CallerIdentity, input: SaveFlowInput) -> AppResult<Flow>;

    /// Returns one flow.
    async fn get_flow(&self, caller: &CallerIdentity, flow_id: Uuid) -> AppResult<Flow>;

    /// Replaces name, detail and actions of one flow.
    async fn update_flow(
        &self,
        caller: &CallerIdentity,
        flow_id: Uuid,
        input: SaveFlowInput,
    ) -> AppResult<Flow>;

    /// Deletes one flow.
    async fn delete_flow(&self, caller: &CallerIdentity, flow_id: Uuid) -> AppResult<Flow>;
}

/// Backend port for running flow instances.
#[async_trait]
pub trait ActiveflowService: Send + Sync {
    /// Lists activeflows.
    async fn list_activeflows(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Activeflow>>;

    /// Starts an activeflow.
    async fn create_activeflow(
        &self,
        caller: &CallerIdentity,
        input: CreateActiveflowInput,
    ) -> AppResult<Activeflow>;

    /// Returns one activeflow.
    async fn get_activeflow(
        &self,
        caller: &CallerIdentity,
        activeflow_id: Uuid,
    ) -> AppResult<Activeflow>;

    /// Deletes one activeflow.
    async fn delete_activeflow(
        &self,
        caller: &CallerIdentity,
        activeflow_id: Uuid,
    ) -> AppResult<Activeflow>;

    /// Stops a running activeflow.
    async fn stop_activeflow(
        &self,
        caller: &CallerIdentity,
        activeflow_id: Uuid,
    ) -> AppResult<Activeflow>;
}
