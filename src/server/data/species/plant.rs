//! Repository for the plant species table.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::PlantSpeciesModel;

/// A plant species to be inserted by the seeder.
#[derive(Debug, Clone, Default)]
pub struct NewPlantSpecies {
    /// Display name, unique per table regardless of letter case
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// How demanding the plant is to keep
    pub care_level: Option<String>,
    /// Light the plant needs
    pub lighting: Option<String>,
    /// Whether CO2 injection is needed
    pub co2_needed: Option<String>,
    /// Where in the tank the plant goes
    pub placement: Option<String>,
    /// How fast the plant grows
    pub growth_rate: Option<String>,
    /// Picture of the species
    pub image_url: Option<String>,
}

/// Queries against the plant species table
pub struct PlantSpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlantSpeciesRepository<'a, C> {
    /// Creates a new instance of [`PlantSpeciesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts plant species, skipping any whose name already exists
    ///
    /// Name uniqueness is enforced by the table, so repeating the same insert never
    /// produces duplicate rows.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    /// - `Err(DbErr)` - Database operation failed
    pub async fn create_many_ignoring_existing(
        &self,
        species: Vec<NewPlantSpecies>,
    ) -> Result<u64, DbErr> {
        if species.is_empty() {
            return Ok(0);
        }

        let species = species
            .into_iter()
            .map(|p| entity::plant_species::ActiveModel {
                name: ActiveValue::Set(p.name),
                description: ActiveValue::Set(p.description),
                care_level: ActiveValue::Set(p.care_level),
                lighting: ActiveValue::Set(p.lighting),
                co2_needed: ActiveValue::Set(p.co2_needed),
                placement: ActiveValue::Set(p.placement),
                growth_rate: ActiveValue::Set(p.growth_rate),
                image_url: ActiveValue::Set(p.image_url),
                ..Default::default()
            });

        entity::prelude::PlantSpecies::insert_many(species)
            .on_conflict(
                OnConflict::column(entity::plant_species::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Returns `(id, name)` of every plant species in table order
    pub async fn get_names(&self) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::PlantSpecies::find()
            .select_only()
            .column(entity::plant_species::Column::Id)
            .column(entity::plant_species::Column::Name)
            .order_by_asc(entity::plant_species::Column::Id)
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Returns `(id, name, description, image_url)` of every plant species in table order
    pub async fn get_summaries(
        &self,
    ) -> Result<Vec<(i32, String, Option<String>, Option<String>)>, DbErr> {
        entity::prelude::PlantSpecies::find()
            .select_only()
            .column(entity::plant_species::Column::Id)
            .column(entity::plant_species::Column::Name)
            .column(entity::plant_species::Column::Description)
            .column(entity::plant_species::Column::ImageUrl)
            .order_by_asc(entity::plant_species::Column::Id)
            .into_tuple::<(i32, String, Option<String>, Option<String>)>()
            .all(self.db)
            .await
    }

    /// Returns the full record with the given id, if it exists
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlantSpeciesModel>, DbErr> {
        entity::prelude::PlantSpecies::find_by_id(id)
            .one(self.db)
            .await
    }
}
