use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use switchyard_application::{AuthService, LoginInput};
use switchyard_core::{AppResult, CallerIdentity};
use uuid::Uuid;

use super::{HttpServiceHandler, to_body};

#[derive(Debug, Deserialize)]
struct IdentityResponse {
    id: Uuid,
    customer_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl HttpServiceHandler {
    async fn verify(&self, path: &str, body: serde_json::Value) -> AppResult<CallerIdentity> {
        let identity: IdentityResponse = self.fetch(Method::POST, None, path, Some(body)).await?;
        CallerIdentity::new(identity.id, identity.customer_id)
    }
}

#[async_trait]
impl AuthService for HttpServiceHandler {
    async fn authenticate_token(&self, token: &str) -> AppResult<CallerIdentity> {
        self.verify("auth/token", json!({ "token": token })).await
    }

    async fn authenticate_accesskey(&self, accesskey: &str) -> AppResult<CallerIdentity> {
        self.verify("auth/accesskey", json!({ "accesskey": accesskey }))
            .await
    }

    async fn login(&self, input: LoginInput) -> AppResult<String> {
        let response: LoginResponse = self
            .fetch(Method::POST, None, "auth/login", Some(to_body(&input)?))
            .await?;
        Ok(response.token)
    }
}
