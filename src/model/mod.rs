//! Data transfer objects shared by the HTTP API and its consumers.

pub mod api;
pub mod search;
pub mod species;
