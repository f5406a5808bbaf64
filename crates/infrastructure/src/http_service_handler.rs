use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use switchyard_core::{AppError, AppResult, CallerIdentity, PageRequest};
use url::Url;

mod accesskeys;
mod auth;
mod billing;
mod calls;
mod contacts;
mod flows;
mod tags;

#[cfg(test)]
mod tests;

const CALLER_ID_HEADER: &str = "X-Caller-Id";
const CUSTOMER_ID_HEADER: &str = "X-Customer-Id";

/// HTTP-based implementation of every backend service port.
///
/// Paths mirror the gateway routes under `/v1` on the backend. Requests are
/// sent once; timeouts come from the supplied client.
pub struct HttpServiceHandler {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpServiceHandler {
    /// Creates a handler forwarding to the backend at `base_url`.
    pub fn new(http_client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let mut base_url = Url::parse(base_url).map_err(|error| {
            AppError::Validation(format!("invalid backend url '{base_url}': {error}"))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "backend url '{base_url}' cannot carry a path"
            )));
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(path.as_str());
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Url> {
        let mut url = self
            .base_url
            .join(format!("v1/{path}").as_str())
            .map_err(|error| AppError::Internal(format!("invalid backend path '{path}': {error}")))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        caller: Option<&CallerIdentity>,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> AppResult<reqwest::Response> {
        let url = self.endpoint(path, query)?;
        tracing::debug!(%method, path, "forwarding request to backend");

        let mut builder = self.http_client.request(method.clone(), url);
        if let Some(caller) = caller {
            builder = builder
                .header(CALLER_ID_HEADER, caller.id().to_string())
                .header(CUSTOMER_ID_HEADER, caller.customer_id().to_string());
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|error| {
            AppError::Internal(format!("backend {method} {path} transport error: {error}"))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());
        Err(status_error(status, &method, path, body.as_str()))
    }

    async fn fetch<T>(
        &self,
        method: Method,
        caller: Option<&CallerIdentity>,
        path: &str,
        body: Option<Value>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, caller, &[], body).await?;
        decode(response, path).await
    }

    async fn fetch_page<T>(
        &self,
        caller: &CallerIdentity,
        path: &str,
        page: &PageRequest,
    ) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let size = page.size().to_string();
        let mut query = vec![("page_size", size.as_str())];
        if !page.token().is_empty() {
            query.push(("page_token", page.token()));
        }

        let response = self
            .send(Method::GET, path, Some(caller), &query, None)
            .await?;
        decode(response, path).await
    }

    async fn command(
        &self,
        method: Method,
        caller: &CallerIdentity,
        path: &str,
        body: Option<Value>,
    ) -> AppResult<()> {
        self.send(method, path, Some(caller), &[], body).await?;
        Ok(())
    }
}

fn to_body<B>(value: &B) -> AppResult<Value>
where
    B: Serialize + ?Sized,
{
    serde_json::to_value(value)
        .map_err(|error| AppError::Internal(format!("failed to encode backend request: {error}")))
}

async fn decode<T>(response: reqwest::Response, path: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    response.json::<T>().await.map_err(|error| {
        AppError::Internal(format!("backend returned an unreadable body for {path}: {error}"))
    })
}

fn status_error(status: StatusCode, method: &Method, path: &str, body: &str) -> AppError {
    let message = format!("backend {method} {path} failed with status {status}: {body}");

    match status {
        StatusCode::BAD_REQUEST => AppError::Validation(message),
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::CONFLICT => AppError::Conflict(message),
        _ => AppError::Internal(message),
    }
}
