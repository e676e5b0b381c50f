//! Server application models and type definitions.
//!
//! Application state shared with HTTP handlers, database model type aliases, and the
//! conversions from database models into API transfer objects.

pub mod app;
pub mod db;
