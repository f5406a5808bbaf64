use serde::Deserialize;
use switchyard_application::{CreateActiveflowInput, SaveFlowInput};
use ts_rs::TS;

use super::payload::{ActionRequest, convert_actions, permissive_id};

/// Incoming payload for flow creation and updates.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-flow-request.ts"
)]
pub struct SaveFlowRequest {
    pub name: String,
    pub detail: String,
    pub actions: Vec<ActionRequest>,
}

/// Incoming payload for starting an activeflow.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-activeflow-request.ts"
)]
pub struct CreateActiveflowRequest {
    pub id: Option<String>,
    pub flow_id: Option<String>,
    pub actions: Vec<ActionRequest>,
}

impl From<SaveFlowRequest> for SaveFlowInput {
    fn from(value: SaveFlowRequest) -> Self {
        Self {
            name: value.name,
            detail: value.detail,
            actions: convert_actions(value.actions),
        }
    }
}

impl From<CreateActiveflowRequest> for CreateActiveflowInput {
    fn from(value: CreateActiveflowRequest) -> Self {
        Self {
            id: permissive_id(value.id.as_deref()),
            flow_id: permissive_id(value.flow_id.as_deref()),
            actions: convert_actions(value.actions),
        }
    }
}
