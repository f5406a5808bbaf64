use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use switchyard_core::Timestamped;
use switchyard_core::timestamp::display;
use uuid::Uuid;

use crate::Action;

/// Stored sequence of actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flow {
    /// Flow identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Flow type, e.g. `flow` or `campaign`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
    /// Whether the flow is persisted or was created ad hoc.
    pub persist: bool,
    /// Ordered actions.
    pub actions: Vec<Action>,
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

impl Timestamped for Flow {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}

/// Running instance of a flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activeflow {
    /// Activeflow identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Flow being executed.
    pub flow_id: Uuid,
    /// `running` or `ended`.
    pub status: String,
    /// Kind of resource driving the flow, e.g. `call`.
    pub reference_type: String,
    /// Resource driving the flow.
    pub reference_id: Uuid,
    /// Action currently executing.
    pub current_action: Action,
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

impl Timestamped for Activeflow {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}
