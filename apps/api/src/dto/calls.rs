use serde::Deserialize;
use switchyard_application::{CreateCallInput, TalkInput};
use switchyard_domain::Address;
use ts_rs::TS;

use super::payload::{ActionRequest, AddressRequest, convert_actions, permissive_id};

/// Incoming payload for outbound calls.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-call-request.ts"
)]
pub struct CreateCallRequest {
    pub flow_id: Option<String>,
    pub actions: Vec<ActionRequest>,
    pub source: AddressRequest,
    pub destinations: Vec<AddressRequest>,
}

/// Incoming payload for text-to-speech on a live call.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/talk-request.ts"
)]
pub struct TalkRequest {
    pub text: String,
    pub gender: String,
    pub language: String,
}

/// Incoming payload for mute and unmute.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/mute-request.ts"
)]
pub struct MuteRequest {
    /// `in`, `out` or `both`.
    pub direction: String,
}

impl From<CreateCallRequest> for CreateCallInput {
    fn from(value: CreateCallRequest) -> Self {
        Self {
            flow_id: permissive_id(value.flow_id.as_deref()),
            actions: convert_actions(value.actions),
            source: value.source.into(),
            destinations: value
                .destinations
                .into_iter()
                .map(Address::from)
                .collect(),
        }
    }
}

impl From<TalkRequest> for TalkInput {
    fn from(value: TalkRequest) -> Self {
        Self {
            text: value.text,
            gender: value.gender,
            language: value.language,
        }
    }
}
