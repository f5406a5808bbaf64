use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use switchyard_core::timestamp::display;
use uuid::Uuid;

/// One step of a flow definition.
///
/// `next_id` is the nil identifier when the action simply falls through to
/// the following one. `option` is action-type specific configuration that the
/// gateway treats as opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    /// Action identifier.
    pub id: Uuid,
    /// Identifier of the action to jump to next.
    pub next_id: Uuid,
    /// Action type tag, e.g. `answer` or `talk`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Type-specific options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<Map<String, Value>>,
    /// When a scheduled action should run.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub execute_at: Option<DateTime<Utc>>,
}
