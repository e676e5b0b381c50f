//! Server application core modules.
//!
//! This module contains all server-side functionality for Aquadex: HTTP routing, the species
//! lookup store, the free-text query interpreter, response phrasing, configuration, database
//! startup and sample data seeding.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
