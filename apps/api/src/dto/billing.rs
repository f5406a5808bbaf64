use serde::Deserialize;
use switchyard_application::{
    CreateBillingAccountInput, PaymentInfoInput, UpdateBillingAccountInput,
};
use ts_rs::TS;

/// Incoming payload for billing account creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-billing-account-request.ts"
)]
pub struct CreateBillingAccountRequest {
    pub name: String,
    pub detail: String,
    pub payment_type: String,
    pub payment_method: String,
}

/// Incoming payload for billing account basic info updates.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-billing-account-request.ts"
)]
pub struct UpdateBillingAccountRequest {
    pub name: String,
    pub detail: String,
}

/// Incoming payload for billing account payment info updates.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/payment-info-request.ts"
)]
pub struct PaymentInfoRequest {
    pub payment_type: String,
    pub payment_method: String,
}

/// Incoming payload for forced balance adjustments.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/balance-request.ts"
)]
pub struct BalanceRequest {
    pub balance: f32,
}

impl From<CreateBillingAccountRequest> for CreateBillingAccountInput {
    fn from(value: CreateBillingAccountRequest) -> Self {
        Self {
            name: value.name,
            detail: value.detail,
            payment_type: value.payment_type,
            payment_method: value.payment_method,
        }
    }
}

impl From<UpdateBillingAccountRequest> for UpdateBillingAccountInput {
    fn from(value: UpdateBillingAccountRequest) -> Self {
        Self {
            name: value.name,
            detail: value.detail,
        }
    }
}

impl From<PaymentInfoRequest> for PaymentInfoInput {
    fn from(value: PaymentInfoRequest) -> Self {
        Self {
            payment_type: value.payment_type,
            payment_method: value.payment_method,
        }
    }
}
