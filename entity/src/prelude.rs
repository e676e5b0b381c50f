pub use super::fish_species::Entity as FishSpecies;
pub use super::plant_species::Entity as PlantSpecies;
