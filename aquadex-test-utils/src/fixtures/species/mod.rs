//! Species fixture utilities.
//!
//! Methods for inserting fish and plant records into the test database, and factory
//! functions for creating in-memory model instances.

pub mod factory;

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Fixture helper for inserting species records.
pub struct SpeciesFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a fish species built by [`factory::mock_fish`].
    pub async fn insert_mock_fish(
        &self,
        name: &str,
    ) -> Result<entity::fish_species::Model, DbErr> {
        self.insert_fish(factory::mock_fish(name)).await
    }

    /// Insert a plant species built by [`factory::mock_plant`].
    pub async fn insert_mock_plant(
        &self,
        name: &str,
    ) -> Result<entity::plant_species::Model, DbErr> {
        self.insert_plant(factory::mock_plant(name)).await
    }

    /// Insert a fish species as given; the model's `id` is ignored and assigned by the database.
    pub async fn insert_fish(
        &self,
        fish: entity::fish_species::Model,
    ) -> Result<entity::fish_species::Model, DbErr> {
        entity::fish_species::ActiveModel {
            name: ActiveValue::Set(fish.name),
            description: ActiveValue::Set(fish.description),
            habitat_temp: ActiveValue::Set(fish.habitat_temp),
            habitat_ph: ActiveValue::Set(fish.habitat_ph),
            diet: ActiveValue::Set(fish.diet),
            compatibility: ActiveValue::Set(fish.compatibility),
            min_tank_size_gal: ActiveValue::Set(fish.min_tank_size_gal),
            plant_needs: ActiveValue::Set(fish.plant_needs),
            filter_recommendation: ActiveValue::Set(fish.filter_recommendation),
            image_url: ActiveValue::Set(fish.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Insert a plant species as given; the model's `id` is ignored and assigned by the database.
    pub async fn insert_plant(
        &self,
        plant: entity::plant_species::Model,
    ) -> Result<entity::plant_species::Model, DbErr> {
        entity::plant_species::ActiveModel {
            name: ActiveValue::Set(plant.name),
            description: ActiveValue::Set(plant.description),
            care_level: ActiveValue::Set(plant.care_level),
            lighting: ActiveValue::Set(plant.lighting),
            co2_needed: ActiveValue::Set(plant.co2_needed),
            placement: ActiveValue::Set(plant.placement),
            growth_rate: ActiveValue::Set(plant.growth_rate),
            image_url: ActiveValue::Set(plant.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
