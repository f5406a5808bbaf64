use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::{Billing, BillingAccount};
use uuid::Uuid;

/// Billing account creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBillingAccountInput {
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
    /// `prepaid` or `postpaid`.
    pub payment_type: String,
    /// e.g. `credit card`.
    pub payment_method: String,
}

/// Billing account basic info update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateBillingAccountInput {
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
}

/// Billing account payment info update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentInfoInput {
    /// `prepaid` or `postpaid`.
    pub payment_type: String,
    /// e.g. `credit card`.
    pub payment_method: String,
}

/// Backend port for billing accounts and their charges.
#[async_trait]
pub trait BillingService: Send + Sync {
    /// Lists billing accounts.
    async fn list_billing_accounts(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<BillingAccount>>;

    /// Creates a billing account.
    async fn create_billing_account(
        &self,
        caller: &CallerIdentity,
        input: CreateBillingAccountInput,
    ) -> AppResult<BillingAccount>;

    /// Returns one billing account.
    async fn get_billing_account(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
    ) -> AppResult<BillingAccount>;

    /// Deletes one billing account.
    async fn delete_billing_account(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
    ) -> AppResult<BillingAccount>;

    /// Updates name and detail.
    async fn update_billing_account(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        input: UpdateBillingAccountInput,
    ) -> AppResult<BillingAccount>;

    /// Updates payment type and method.
    async fn update_billing_account_payment_info(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        input: PaymentInfoInput,
    ) -> AppResult<BillingAccount>;

    /// Adds to the balance regardless of payment state.
    async fn add_billing_account_balance(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        balance: f32,
    ) -> AppResult<BillingAccount>;

    /// Subtracts from the balance regardless of payment state.
    async fn subtract_billing_account_balance(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        balance: f32,
    ) -> AppResult<BillingAccount>;

    /// Lists individual charges.
    async fn list_billings(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Billing>>;
}
