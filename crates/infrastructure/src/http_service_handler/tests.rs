use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use switchyard_application::{
    AccesskeyService, AuthService, CallService, CreateAccesskeyInput, TagService,
};
use switchyard_core::{AppError, CallerIdentity, PageRequest};
use uuid::Uuid;

use super::HttpServiceHandler;

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn spawn_backend(router: Router) -> std::io::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{address}"))
}

fn header(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn caller() -> Result<CallerIdentity, AppError> {
    CallerIdentity::new(
        Uuid::from_u128(0x2a2ec0ba_8004_11ec_aea5_439829c92a7c),
        Uuid::from_u128(0x5e4a0680_804e_11ec_8477_2fea5968d85b),
    )
}

#[tokio::test]
async fn list_forwards_identity_and_page() -> TestResult {
    let router = Router::new().route(
        "/v1/accesskeys",
        get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
            Json(json!([{
                "id": header(&headers, "x-caller-id"),
                "customer_id": header(&headers, "x-customer-id"),
                "detail": query.unwrap_or_default(),
                "tm_create": "2020-09-20 03:23:21.995000",
            }]))
        }),
    );
    let base_url = spawn_backend(router).await?;
    let handler = HttpServiceHandler::new(reqwest::Client::new(), base_url.as_str())?;
    let caller = caller()?;

    let accesskeys = handler
        .list_accesskeys(&caller, &PageRequest::new(10, "2020-09-20T03:23:20.995000Z"))
        .await?;

    assert_eq!(accesskeys.len(), 1);
    assert_eq!(accesskeys[0].id, caller.id());
    assert_eq!(accesskeys[0].customer_id, caller.customer_id());
    assert_eq!(
        accesskeys[0].detail,
        "page_size=10&page_token=2020-09-20T03%3A23%3A20.995000Z"
    );
    assert!(accesskeys[0].tm_create.is_some());
    Ok(())
}

#[tokio::test]
async fn create_posts_input_as_json() -> TestResult {
    let router = Router::new().route(
        "/v1/accesskeys",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "name": body["name"],
                "detail": body["detail"],
                "token": body["expire"].to_string(),
            }))
        }),
    );
    let base_url = spawn_backend(router).await?;
    let handler = HttpServiceHandler::new(reqwest::Client::new(), base_url.as_str())?;

    let accesskey = handler
        .create_accesskey(
            &caller()?,
            CreateAccesskeyInput {
                name: "test name".to_owned(),
                detail: "test detail".to_owned(),
                expire: 86_400_000,
            },
        )
        .await?;

    assert_eq!(accesskey.name, "test name");
    assert_eq!(accesskey.detail, "test detail");
    assert_eq!(accesskey.token, "86400000");
    Ok(())
}

#[tokio::test]
async fn maps_backend_statuses_to_error_kinds() -> TestResult {
    let router = Router::new()
        .route(
            "/v1/tags/{id}",
            get(|Path(id): Path<Uuid>| async move {
                if id.is_nil() {
                    (StatusCode::BAD_REQUEST, "bad id")
                } else {
                    (StatusCode::NOT_FOUND, "no such tag")
                }
            }),
        )
        .route(
            "/v1/calls/{id}/hold",
            post(|| async { (StatusCode::BAD_GATEWAY, "call manager down") }),
        );
    let base_url = spawn_backend(router).await?;
    let handler = HttpServiceHandler::new(reqwest::Client::new(), base_url.as_str())?;
    let caller = caller()?;

    let missing = handler.get_tag(&caller, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let invalid = handler.get_tag(&caller, Uuid::nil()).await;
    assert!(matches!(invalid, Err(AppError::Validation(_))));

    let outage = handler.hold_call(&caller, Uuid::new_v4()).await;
    assert!(matches!(outage, Err(AppError::Internal(_))));
    Ok(())
}

#[tokio::test]
async fn authenticate_token_builds_caller_identity() -> TestResult {
    let router = Router::new().route(
        "/v1/auth/token",
        post(|Json(body): Json<Value>| async move {
            if body["token"] == "valid" {
                (
                    StatusCode::OK,
                    Json(json!({
                        "id": "2a2ec0ba-8004-11ec-aea5-439829c92a7c",
                        "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
                    })),
                )
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({})))
            }
        }),
    );
    let base_url = spawn_backend(router).await?;
    let handler = HttpServiceHandler::new(reqwest::Client::new(), base_url.as_str())?;

    let identity = handler.authenticate_token("valid").await?;
    assert_eq!(identity, caller()?);

    let rejected = handler.authenticate_token("stale").await;
    assert!(matches!(rejected, Err(AppError::Unauthorized(_))));
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_internal() -> TestResult {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    drop(listener);

    let handler =
        HttpServiceHandler::new(reqwest::Client::new(), format!("http://{address}").as_str())?;
    let result = handler.get_call(&caller()?, Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::Internal(_))));
    Ok(())
}

#[test]
fn rejects_unusable_base_url() {
    let result = HttpServiceHandler::new(reqwest::Client::new(), "mailto:ops@example.com");
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = HttpServiceHandler::new(reqwest::Client::new(), "not a url");
    assert!(matches!(result, Err(AppError::Validation(_))));
}
