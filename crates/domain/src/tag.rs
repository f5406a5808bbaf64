use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use switchyard_core::Timestamped;
use switchyard_core::timestamp::display;
use uuid::Uuid;

/// Customer-defined label attached to agents, contacts and queues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Tag identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
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

impl Timestamped for Tag {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}
