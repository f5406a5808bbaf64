//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_service_handler;

pub use http_service_handler::HttpServiceHandler;
