use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use switchyard_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_API_PREFIX: &str = "/v1.0";
const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub api_prefix: String,
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub cors_allowed_origin: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_host = optional("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = optional("API_PORT")
            .map(|value| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))
            })
            .transpose()?
            .unwrap_or(3001);

        let backend_url = optional("BACKEND_URL")
            .ok_or_else(|| AppError::Validation("BACKEND_URL is required".to_owned()))?;
        let backend_timeout_ms = optional("BACKEND_TIMEOUT_MS")
            .map(|value| {
                value.trim().parse::<u64>().map_err(|error| {
                    AppError::Validation(format!("invalid BACKEND_TIMEOUT_MS: {error}"))
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_MS);
        if backend_timeout_ms == 0 {
            return Err(AppError::Validation(
                "BACKEND_TIMEOUT_MS must be greater than zero".to_owned(),
            ));
        }

        let api_prefix = normalize_prefix(
            lookup("API_PREFIX")
                .unwrap_or_else(|| DEFAULT_API_PREFIX.to_owned())
                .as_str(),
        );

        Ok(Self {
            api_host,
            api_port,
            api_prefix,
            backend_url,
            backend_timeout: Duration::from_millis(backend_timeout_ms),
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

/// `/v1.0/` and `v1.0` both become `/v1.0`; a blank prefix mounts routes at the root.
fn normalize_prefix(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }

    format!("/{trimmed}")
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
