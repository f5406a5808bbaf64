use serde::Deserialize;
use switchyard_application::{CreateAccesskeyInput, UpdateAccesskeyInput};
use ts_rs::TS;

/// Incoming payload for accesskey creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-accesskey-request.ts"
)]
pub struct CreateAccesskeyRequest {
    pub name: String,
    pub detail: String,
    /// Lifetime in seconds.
    pub expire: i32,
}

/// Incoming payload for accesskey updates.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-accesskey-request.ts"
)]
pub struct UpdateAccesskeyRequest {
    pub name: String,
    pub detail: String,
}

impl From<CreateAccesskeyRequest> for CreateAccesskeyInput {
    fn from(value: CreateAccesskeyRequest) -> Self {
        Self {
            name: value.name,
            detail: value.detail,
            expire: value.expire,
        }
    }
}

impl From<UpdateAccesskeyRequest> for UpdateAccesskeyInput {
    fn from(value: UpdateAccesskeyRequest) -> Self {
        Self {
            name: value.name,
            detail: value.detail,
        }
    }
}
