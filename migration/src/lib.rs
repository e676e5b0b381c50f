pub use sea_orm_migration::prelude::*;

mod m20250614_000001_fish_species;
mod m20250614_000002_plant_species;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250614_000001_fish_species::Migration),
            Box::new(m20250614_000002_plant_species::Migration),
        ]
    }
}
