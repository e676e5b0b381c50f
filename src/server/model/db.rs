//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate, plus their
//! conversions into the API transfer objects in [`crate::model::species`].

use crate::model::species::{FishSpeciesDto, PlantSpeciesDto, SpeciesDto};

/// Type alias for a fish species database model.
///
/// # Fields (from `entity::fish_species::Model`)
/// - `id` - Primary key
/// - `name` - Display name, unique regardless of letter case
/// - `description` - Free-text description
/// - `habitat_temp` / `habitat_ph` - Preferred water parameters
/// - `diet`, `compatibility`, `plant_needs`, `filter_recommendation` - Care notes
/// - `min_tank_size_gal` - Minimum tank size in gallons
/// - `image_url` - Picture of the species
pub type FishSpeciesModel = entity::fish_species::Model;

/// Type alias for a plant species database model.
///
/// # Fields (from `entity::plant_species::Model`)
/// - `id` - Primary key
/// - `name` - Display name, unique regardless of letter case
/// - `description` - Free-text description
/// - `care_level`, `lighting`, `co2_needed`, `placement`, `growth_rate` - Care notes
/// - `image_url` - Picture of the species
pub type PlantSpeciesModel = entity::plant_species::Model;

impl From<FishSpeciesModel> for FishSpeciesDto {
    fn from(model: FishSpeciesModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            habitat_temp: model.habitat_temp,
            habitat_ph: model.habitat_ph,
            diet: model.diet,
            compatibility: model.compatibility,
            min_tank_size_gal: model.min_tank_size_gal,
            plant_needs: model.plant_needs,
            filter_recommendation: model.filter_recommendation,
            image_url: model.image_url,
        }
    }
}

impl From<PlantSpeciesModel> for PlantSpeciesDto {
    fn from(model: PlantSpeciesModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            care_level: model.care_level,
            lighting: model.lighting,
            co2_needed: model.co2_needed,
            placement: model.placement,
            growth_rate: model.growth_rate,
            image_url: model.image_url,
        }
    }
}

impl From<FishSpeciesModel> for SpeciesDto {
    fn from(model: FishSpeciesModel) -> Self {
        Self::Fish(model.into())
    }
}

impl From<PlantSpeciesModel> for SpeciesDto {
    fn from(model: PlantSpeciesModel) -> Self {
        Self::Plant(model.into())
    }
}
