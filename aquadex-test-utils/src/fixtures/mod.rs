//! Test fixture modules for database record creation.
//!
//! - `species` - Fish and plant species records

pub mod species;
