//! HTTP request handlers.
//!
//! Handlers extract request data, call into the service layer and convert results and
//! errors into HTTP responses. Each handler carries a `#[utoipa::path]` annotation that
//! feeds the OpenAPI document served by the router.

pub mod search;
pub mod species;
