//! Table-driven request dispatch.
//!
//! Every resource endpoint runs the same sequence: read the caller identity,
//! bind the typed input, call one backend operation, write the reply. A
//! [`Route`] describes an endpoint by its method, path, input type, backend
//! operation and reply shape; the sequence itself lives only in [`route`].

mod input;

use std::future::Future;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{RawPathParams, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodFilter, MethodRouter, on};
use serde::Serialize;
use switchyard_application::ServiceHandler;
use switchyard_core::{AppResult, CallerIdentity, ListEnvelope, PageRequest, Timestamped};

pub use input::{Body, Input, RawInput, ResourceId};

use crate::error::ApiError;
use crate::identity::Caller;
use crate::state::AppState;

/// One entry of the route table.
pub struct Route {
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

/// Builds an endpoint that binds `I`, runs `operation` and writes the
/// result with `reply`.
pub fn route<I, O, F, Fut>(
    method: MethodFilter,
    path: &'static str,
    reply: fn(O) -> Response,
    operation: F,
) -> Route
where
    I: Input,
    O: Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<O>> + Send + 'static,
{
    let handler = move |State(state): State<AppState>,
                        Caller(caller): Caller,
                        params: RawPathParams,
                        RawQuery(query): RawQuery,
                        body: Bytes| {
        let operation = operation.clone();
        async move {
            let input = match I::parse(&RawInput::new(&params, query.as_deref(), &body)) {
                Ok(input) => input,
                Err(error) => {
                    tracing::warn!(
                        route = path,
                        kind = error.kind(),
                        error = %error,
                        "request rejected"
                    );
                    return error.into_response();
                }
            };

            match operation(state.services, caller, input).await {
                Ok(output) => reply(output),
                Err(error) => {
                    tracing::warn!(
                        route = path,
                        kind = error.kind(),
                        error = %error,
                        "backend operation failed"
                    );
                    ApiError::from(error).into_response()
                }
            }
        }
    };

    Route {
        path,
        handler: on(method, handler),
    }
}

/// `GET` list endpoint replying with a [`ListEnvelope`].
pub fn list<T, F, Fut>(path: &'static str, operation: F) -> Route
where
    T: Serialize + Timestamped + Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, PageRequest) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<Vec<T>>> + Send + 'static,
{
    route(MethodFilter::GET, path, envelope::<T>, operation)
}

/// `GET` endpoint replying with one resource.
pub fn get<I, T, F, Fut>(path: &'static str, operation: F) -> Route
where
    I: Input,
    T: Serialize + Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    route(MethodFilter::GET, path, ok::<T>, operation)
}

/// `POST` endpoint replying `200` with the resulting resource.
pub fn post<I, T, F, Fut>(path: &'static str, operation: F) -> Route
where
    I: Input,
    T: Serialize + Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    route(MethodFilter::POST, path, ok::<T>, operation)
}

/// `POST` endpoint replying `201` with the created resource.
pub fn create<I, T, F, Fut>(path: &'static str, operation: F) -> Route
where
    I: Input,
    T: Serialize + Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    route(MethodFilter::POST, path, created::<T>, operation)
}

/// `PUT` endpoint replying with the updated resource.
pub fn put<I, T, F, Fut>(path: &'static str, operation: F) -> Route
where
    I: Input,
    T: Serialize + Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    route(MethodFilter::PUT, path, ok::<T>, operation)
}

/// `DELETE` endpoint replying with the resource as it stood at delete time.
pub fn delete<I, T, F, Fut>(path: &'static str, operation: F) -> Route
where
    I: Input,
    T: Serialize + Send + 'static,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    route(MethodFilter::DELETE, path, ok::<T>, operation)
}

/// Control endpoint replying `200` with an empty body.
pub fn command<I, F, Fut>(method: MethodFilter, path: &'static str, operation: F) -> Route
where
    I: Input,
    F: Fn(ServiceHandler, CallerIdentity, I) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = AppResult<()>> + Send + 'static,
{
    route(method, path, empty, operation)
}

fn envelope<T>(items: Vec<T>) -> Response
where
    T: Serialize + Timestamped,
{
    Json(ListEnvelope::build(items)).into_response()
}

fn ok<T>(value: T) -> Response
where
    T: Serialize,
{
    (StatusCode::OK, Json(value)).into_response()
}

fn created<T>(value: T) -> Response
where
    T: Serialize,
{
    (StatusCode::CREATED, Json(value)).into_response()
}

fn empty(_: ()) -> Response {
    StatusCode::OK.into_response()
}
