use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use switchyard_core::Timestamped;
use switchyard_core::timestamp::display;
use uuid::Uuid;

/// Prepaid or postpaid account charged for usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAccount {
    /// Account identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
    /// Account type, e.g. `normal` or `admin`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Remaining balance in USD.
    pub balance: f32,
    /// `prepaid` or `postpaid`.
    pub payment_type: String,
    /// e.g. `credit card`.
    pub payment_method: String,
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

impl Timestamped for BillingAccount {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}

/// One charge against a billing account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Billing {
    /// Billing identifier.
    pub id: Uuid,
    /// Owning customer.
    pub customer_id: Uuid,
    /// Charged account.
    pub account_id: Uuid,
    /// `progressing` or `end`.
    pub status: String,
    /// Kind of billed resource, e.g. `call` or `sms`.
    pub reference_type: String,
    /// Billed resource.
    pub reference_id: Uuid,
    /// Price per billing unit.
    pub cost_per_unit: f32,
    /// Total charged so far.
    pub cost_total: f32,
    /// Number of billed units.
    pub billing_unit_count: f32,
    /// When billing started.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_billing_start: Option<DateTime<Utc>>,
    /// When billing ended.
    #[serde(with = "display", skip_serializing_if = "Option::is_none")]
    pub tm_billing_end: Option<DateTime<Utc>>,
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

impl Timestamped for Billing {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.tm_create
    }
}
