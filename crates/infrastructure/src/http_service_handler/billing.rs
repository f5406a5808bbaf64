use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use switchyard_application::{
    BillingService, CreateBillingAccountInput, PaymentInfoInput, UpdateBillingAccountInput,
};
use switchyard_core::{AppResult, CallerIdentity, PageRequest};
use switchyard_domain::{Billing, BillingAccount};
use uuid::Uuid;

use super::{HttpServiceHandler, to_body};

#[async_trait]
impl BillingService for HttpServiceHandler {
    async fn list_billing_accounts(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<BillingAccount>> {
        self.fetch_page(caller, "billing_accounts", page).await
    }

    async fn create_billing_account(
        &self,
        caller: &CallerIdentity,
        input: CreateBillingAccountInput,
    ) -> AppResult<BillingAccount> {
        self.fetch(
            Method::POST,
            Some(caller),
            "billing_accounts",
            Some(to_body(&input)?),
        )
        .await
    }

    async fn get_billing_account(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
    ) -> AppResult<BillingAccount> {
        let path = format!("billing_accounts/{account_id}");
        self.fetch(Method::GET, Some(caller), path.as_str(), None)
            .await
    }

    async fn delete_billing_account(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
    ) -> AppResult<BillingAccount> {
        let path = format!("billing_accounts/{account_id}");
        self.fetch(Method::DELETE, Some(caller), path.as_str(), None)
            .await
    }

    async fn update_billing_account(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        input: UpdateBillingAccountInput,
    ) -> AppResult<BillingAccount> {
        let path = format!("billing_accounts/{account_id}");
        self.fetch(Method::PUT, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn update_billing_account_payment_info(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        input: PaymentInfoInput,
    ) -> AppResult<BillingAccount> {
        let path = format!("billing_accounts/{account_id}/payment_info");
        self.fetch(Method::PUT, Some(caller), path.as_str(), Some(to_body(&input)?))
            .await
    }

    async fn add_billing_account_balance(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        balance: f32,
    ) -> AppResult<BillingAccount> {
        let path = format!("billing_accounts/{account_id}/balance_add_force");
        let body = json!({ "balance": balance });
        self.fetch(Method::POST, Some(caller), path.as_str(), Some(body))
            .await
    }

    async fn subtract_billing_account_balance(
        &self,
        caller: &CallerIdentity,
        account_id: Uuid,
        balance: f32,
    ) -> AppResult<BillingAccount> {
        let path = format!("billing_accounts/{account_id}/balance_subtract_force");
        let body = json!({ "balance": balance });
        self.fetch(Method::POST, Some(caller), path.as_str(), Some(body))
            .await
    }

    async fn list_billings(
        &self,
        caller: &CallerIdentity,
        page: &PageRequest,
    ) -> AppResult<Vec<Billing>> {
        self.fetch_page(caller, "billings", page).await
    }
}
