//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories: [`species`] answers direct
//! lookups and listings, [`search`] answers free-text questions on top of it.

pub mod search;
pub mod species;
