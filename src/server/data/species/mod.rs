//! Repositories for the fish and plant species tables.
//!
//! Both tables are reference data: rows are inserted by the seeder and only read afterwards.

pub mod fish;
pub mod plant;
