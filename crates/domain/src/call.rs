use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use switchyard_core::Timestamped;
use switchyard_core::timestamp::display;
use uuid::Uuid;

use crate::{Action, Address};

/// One call leg as reported by the call service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Call {
    /// Call identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Flow executed by the call.
    pub flow_id: Uuid,
    /// Running instance of the flow.
    pub activeflow_id: Uuid,
    /// Call type, e.g. `flow` or `conference`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Master call when this leg was chained.
    pub master_call_id: Uuid,
    /// Group call this leg belongs to.
    pub groupcall_id: Uuid,
    /// Calling party.
    pub source: Address,
    /// Called party.
    pub destination: Address,
    /// Call status, e.g. `ringing` or `progressing`.
    pub status: String,
    /// Action currently executing.
    pub action: Action,
    /// `incoming` or `outgoing`.
    pub direction: String,
    /// Active mute direction, empty when unmuted.
    pub mute_direction: String,
    /// Which side hung up.
    pub hangup_by: String,
    /// Why the call ended.
    pub hangup_reason: String,
    /// When the call started ringing.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_ringing: Option<DateTime<Utc>>,
    /// When the call was answered.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_progressing: Option<DateTime<Utc>>,
    /// When the call ended.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_hangup: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    /// Deletion time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Timestamped for Call {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}

/// Fan-out dial to several destinations that resolves to one answered call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Groupcall {
    /// Group call identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Calling party.
    pub source: Address,
    /// Dialed destinations.
    pub destinations: Vec<Address>,
    /// Legs created so far.
    pub call_ids: Vec<Uuid>,
    /// `ring_all` or `linear`.
    pub ring_method: String,
    /// What happens once one leg answers.
    pub answer_method: String,
    /// Group call status.
    pub status: String,
    /// Creation time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    /// Deletion time.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// Result of an outbound call request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallCreation {
    /// Single-destination calls.
    pub calls: Vec<Call>,
    /// Multi-destination group calls.
    pub groupcalls: Vec<Groupcall>,
}
