use serde::Deserialize;
use switchyard_application::SaveTagInput;
use ts_rs::TS;

/// Incoming payload for tag creation and updates.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-tag-request.ts"
)]
pub struct SaveTagRequest {
    pub name: String,
    pub detail: String,
}

impl From<SaveTagRequest> for SaveTagInput {
    fn from(value: SaveTagRequest) -> Self {
        Self {
            name: value.name,
            detail: value.detail,
        }
    }
}
