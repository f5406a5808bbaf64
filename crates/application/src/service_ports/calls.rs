use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::{Action, Address, Call, CallCreation};
use uuid::Uuid;

/// Outbound call request.
///
/// Either `flow_id` names a stored flow or `actions` carries an ad hoc one.
/// One destination yields a call, several yield a group call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateCallInput {
    /// Stored flow to execute, nil for ad hoc actions.
    pub flow_id: Uuid,
    /// Ad hoc actions.
    pub actions: Vec<Action>,
    /// Calling party.
    pub source: Address,
    /// Parties to dial.
    pub destinations: Vec<Address>,
}

/// Text-to-speech request played into a live call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TalkInput {
    /// Text or SSML to speak.
    pub text: String,
    /// Voice gender.
    pub gender: String,
    /// BCP 47 language tag.
    pub language: String,
}

/// Backend port for calls and live call control.
#[async_trait]
pub trait CallService: Send + Sync {
    /// Lists calls.
    async fn list_calls(&self, caller: &CallerIdentity, page: &PageRequest)
    -> AppResult<Vec<Call>>;

    /// Starts outbound calls.
    async fn create_calls(
        &self,
        caller: &CallerIdentity,
        input: CreateCallInput,
    ) -> AppResult<CallCreation>;

    /// Returns one call.
    async fn get_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<Call>;

    /// Deletes one call record.
    async fn delete_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<Call>;

    /// Hangs up a live call.
    async fn hangup_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<Call>;

    /// Speaks text into a live call.
    async fn talk_call(
        &self,
        caller: &CallerIdentity,
        call_id: Uuid,
        input: TalkInput,
    ) -> AppResult<()>;

    /// Puts a call on hold.
    async fn hold_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()>;

    /// Releases a call from hold.
    async fn unhold_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()>;

    /// Mutes a call in the given direction (`in`, `out` or `both`).
    async fn mute_call(
        &self,
        caller: &CallerIdentity,
        call_id: Uuid,
        direction: String,
    ) -> AppResult<()>;

    /// Unmutes a call in the given direction.
    async fn unmute_call(
        &self,
        caller: &CallerIdentity,
        call_id: Uuid,
        direction: String,
    ) -> AppResult<()>;

    /// Starts music on hold.
    async fn start_call_moh(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()>;

    /// Stops music on hold.
    async fn stop_call_moh(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()>;

    /// Silences the call audio.
    async fn silence_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()>;

    /// Restores the call audio.
    async fn unsilence_call(&self, caller: &CallerIdentity, call_id: Uuid) -> AppResult<()>;
}
