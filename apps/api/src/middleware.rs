use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const TOKEN_NAME: &str = "token";
const ACCESSKEY_NAME: &str = "accesskey";

/// Credential presented by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Credential {
    Token(String),
    Accesskey(String),
}

/// Verifies the request credential with the backend and attaches the
/// resulting [`switchyard_core::CallerIdentity`] to request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let credential = find_credential(request.headers(), request.uri().query())
        .ok_or_else(|| ApiError::Unauthenticated("no credential presented".to_owned()))?;

    let auth = &state.services.auth;
    let verified = match &credential {
        Credential::Token(token) => auth.authenticate_token(token).await,
        Credential::Accesskey(accesskey) => auth.authenticate_accesskey(accesskey).await,
    };
    let identity = verified.map_err(|error| {
        tracing::warn!(kind = error.kind(), error = %error, "credential verification failed");
        ApiError::Unauthenticated("credential rejected".to_owned())
    })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Token sources win over accesskey sources; within each, header then cookie then query.
fn find_credential(headers: &HeaderMap, query: Option<&str>) -> Option<Credential> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);

    bearer
        .or_else(|| cookie_value(headers, TOKEN_NAME))
        .or_else(|| query_value(query, TOKEN_NAME))
        .map(Credential::Token)
        .or_else(|| {
            cookie_value(headers, ACCESSKEY_NAME)
                .or_else(|| query_value(query, ACCESSKEY_NAME))
                .map(Credential::Accesskey)
        })
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

fn query_value(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use super::{Credential, find_credential};

    fn headers(pairs: &[(header::HeaderName, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(name.clone(), HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn bearer_header_wins() {
        let headers = headers(&[
            (header::AUTHORIZATION, "Bearer header-token"),
            (header::COOKIE, "token=cookie-token"),
        ]);

        assert_eq!(
            find_credential(&headers, Some("token=query-token")),
            Some(Credential::Token("header-token".to_owned()))
        );
    }

    #[test]
    fn falls_back_to_cookie_then_query() {
        let cookie = headers(&[(header::COOKIE, "theme=dark; token=cookie-token")]);
        assert_eq!(
            find_credential(&cookie, Some("token=query-token")),
            Some(Credential::Token("cookie-token".to_owned()))
        );

        assert_eq!(
            find_credential(&HeaderMap::new(), Some("page_size=10&token=query-token")),
            Some(Credential::Token("query-token".to_owned()))
        );
    }

    #[test]
    fn ignores_non_bearer_authorization() {
        let headers = headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert_eq!(find_credential(&headers, None), None);
    }

    #[test]
    fn token_beats_accesskey() {
        let headers = headers(&[(header::COOKIE, "accesskey=key-cookie")]);
        assert_eq!(
            find_credential(&headers, Some("token=query-token")),
            Some(Credential::Token("query-token".to_owned()))
        );
    }

    #[test]
    fn finds_accesskey() {
        let cookie = headers(&[(header::COOKIE, "accesskey=key-cookie")]);
        assert_eq!(
            find_credential(&cookie, Some("accesskey=key-query")),
            Some(Credential::Accesskey("key-cookie".to_owned()))
        );

        assert_eq!(
            find_credential(&HeaderMap::new(), Some("accesskey=key-query")),
            Some(Credential::Accesskey("key-query".to_owned()))
        );
    }

    #[test]
    fn empty_values_do_not_count() {
        let headers = headers(&[(header::COOKIE, "token=")]);
        assert_eq!(find_credential(&headers, Some("accesskey=")), None);
    }
}
