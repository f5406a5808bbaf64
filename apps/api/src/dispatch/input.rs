use axum::extract::RawPathParams;
use serde::de::DeserializeOwned;
use switchyard_core::PageRequest;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Raw request parts an endpoint input is bound from.
pub struct RawInput<'a> {
    params: Vec<(&'a str, &'a str)>,
    query: Option<&'a str>,
    body: &'a [u8],
}

impl<'a> RawInput<'a> {
    pub fn new(params: &'a RawPathParams, query: Option<&'a str>, body: &'a [u8]) -> Self {
        Self {
            params: params.iter().collect(),
            query,
            body,
        }
    }

    /// Returns the value of the `position`-th path parameter.
    pub fn param(&self, position: usize) -> ApiResult<&'a str> {
        self.params
            .get(position)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                ApiError::MalformedRequest(format!("missing path parameter #{position}"))
            })
    }

    /// Returns the first value of a query parameter.
    pub fn query_value(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query?.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }
}

/// Typed input of one endpoint, bound before the backend is called.
pub trait Input: Sized + Send + 'static {
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self>;
}

impl Input for PageRequest {
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self> {
        let size = raw.query_value("page_size");
        let token = raw.query_value("page_token");
        Ok(PageRequest::parse(size.as_deref(), token.as_deref()))
    }
}

/// Resource identifier taken from a path segment.
///
/// Unlike identifiers inside payloads, a path identifier must be a real,
/// non-nil UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    fn at(raw: &RawInput<'_>, position: usize) -> ApiResult<Self> {
        let value = raw.param(position)?;
        match Uuid::parse_str(value) {
            Ok(id) if !id.is_nil() => Ok(Self(id)),
            _ => Err(ApiError::MalformedRequest(format!(
                "invalid identifier in path: '{value}'"
            ))),
        }
    }
}

impl Input for ResourceId {
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self> {
        Self::at(raw, 0)
    }
}

impl Input for (ResourceId, ResourceId) {
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self> {
        Ok((ResourceId::at(raw, 0)?, ResourceId::at(raw, 1)?))
    }
}

/// JSON request body. Unknown fields are ignored; a body that is not valid
/// JSON for `T` is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Body<T>(pub T);

impl<T> Body<T>
where
    T: DeserializeOwned,
{
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        serde_json::from_slice(bytes)
            .map(Self)
            .map_err(|error| ApiError::MalformedRequest(format!("invalid request body: {error}")))
    }
}

impl<T> Input for Body<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self> {
        Self::from_bytes(raw.body())
    }
}

impl<T> Input for (ResourceId, Body<T>)
where
    T: DeserializeOwned + Send + 'static,
{
    fn parse(raw: &RawInput<'_>) -> ApiResult<Self> {
        let id = ResourceId::at(raw, 0)?;
        Ok((id, Body::from_bytes(raw.body())?))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use switchyard_core::PageRequest;

    use super::{Body, Input, RawInput, ResourceId};
    use crate::error::ApiError;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Named {
        name: String,
    }

    fn raw<'a>(query: Option<&'a str>, body: &'a [u8]) -> RawInput<'a> {
        RawInput {
            params: Vec::new(),
            query,
            body,
        }
    }

    #[test]
    fn page_request_comes_from_query() -> Result<(), ApiError> {
        let query = Some("page_size=10&page_token=abc%3Adef");
        let page = <PageRequest as Input>::parse(&raw(query, b""))?;
        assert_eq!(page, PageRequest::new(10, "abc:def"));

        let page = <PageRequest as Input>::parse(&raw(Some("page_size=500"), b""))?;
        assert_eq!(page, PageRequest::default());
        Ok(())
    }

    #[test]
    fn body_ignores_unknown_fields_and_defaults_missing_ones() -> Result<(), ApiError> {
        let Body(named) = Body::<Named>::parse(&raw(None, br#"{"other": 1}"#))?;
        assert_eq!(named, Named::default());
        Ok(())
    }

    #[test]
    fn body_rejects_invalid_json() {
        let result = Body::<Named>::parse(&raw(None, b"{\"name\":"));
        assert!(matches!(result, Err(ApiError::MalformedRequest(_))));

        let result = Body::<Named>::parse(&raw(None, br#"{"name": 3}"#));
        assert!(matches!(result, Err(ApiError::MalformedRequest(_))));
    }

    #[test]
    fn missing_path_parameter_is_malformed() {
        let result = ResourceId::parse(&raw(None, b""));
        assert!(matches!(result, Err(ApiError::MalformedRequest(_))));
    }
}
