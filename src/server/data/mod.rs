//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries against the two species tables. They know nothing
//! about name matching or phrasing; they load rows and insert seed records.

pub mod species;
