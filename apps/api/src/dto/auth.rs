use serde::{Deserialize, Serialize};
use switchyard_application::LoginInput;
use ts_rs::TS;

/// Incoming payload for username/password login.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request.ts"
)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session token issued on login.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-response.ts"
)]
pub struct LoginResponse {
    pub username: String,
    pub token: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(value: LoginRequest) -> Self {
        Self {
            username: value.username,
            password: value.password,
        }
    }
}
