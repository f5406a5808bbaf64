use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    /// Response of a live gateway.
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
