//! `SeaORM` Entity definitions for the aquarium species tables.

pub mod prelude;

pub mod fish_species;
pub mod plant_species;
