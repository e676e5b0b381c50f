//! Repository for the fish species table.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::FishSpeciesModel;

/// A fish species to be inserted by the seeder.
#[derive(Debug, Clone, Default)]
pub struct NewFishSpecies {
    /// Display name, unique per table regardless of letter case
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Preferred water temperature range
    pub habitat_temp: Option<String>,
    /// Preferred pH range
    pub habitat_ph: Option<String>,
    /// What the fish eats
    pub diet: Option<String>,
    /// How the fish gets along with tank mates
    pub compatibility: Option<String>,
    /// Minimum tank size in gallons
    pub min_tank_size_gal: Option<i32>,
    /// Recommended planting
    pub plant_needs: Option<String>,
    /// Recommended filtration
    pub filter_recommendation: Option<String>,
    /// Picture of the species
    pub image_url: Option<String>,
}

/// Queries against the fish species table
pub struct FishSpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FishSpeciesRepository<'a, C> {
    /// Creates a new instance of [`FishSpeciesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts fish species, skipping any whose name already exists
    ///
    /// Name uniqueness is enforced by the table, so repeating the same insert never
    /// produces duplicate rows.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    /// - `Err(DbErr)` - Database operation failed
    pub async fn create_many_ignoring_existing(
        &self,
        species: Vec<NewFishSpecies>,
    ) -> Result<u64, DbErr> {
        if species.is_empty() {
            return Ok(0);
        }

        let species = species
            .into_iter()
            .map(|f| entity::fish_species::ActiveModel {
                name: ActiveValue::Set(f.name),
                description: ActiveValue::Set(f.description),
                habitat_temp: ActiveValue::Set(f.habitat_temp),
                habitat_ph: ActiveValue::Set(f.habitat_ph),
                diet: ActiveValue::Set(f.diet),
                compatibility: ActiveValue::Set(f.compatibility),
                min_tank_size_gal: ActiveValue::Set(f.min_tank_size_gal),
                plant_needs: ActiveValue::Set(f.plant_needs),
                filter_recommendation: ActiveValue::Set(f.filter_recommendation),
                image_url: ActiveValue::Set(f.image_url),
                ..Default::default()
            });

        entity::prelude::FishSpecies::insert_many(species)
            .on_conflict(
                OnConflict::column(entity::fish_species::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Returns `(id, name)` of every fish species in table order
    pub async fn get_names(&self) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::FishSpecies::find()
            .select_only()
            .column(entity::fish_species::Column::Id)
            .column(entity::fish_species::Column::Name)
            .order_by_asc(entity::fish_species::Column::Id)
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Returns `(id, name, description, image_url)` of every fish species in table order
    pub async fn get_summaries(
        &self,
    ) -> Result<Vec<(i32, String, Option<String>, Option<String>)>, DbErr> {
        entity::prelude::FishSpecies::find()
            .select_only()
            .column(entity::fish_species::Column::Id)
            .column(entity::fish_species::Column::Name)
            .column(entity::fish_species::Column::Description)
            .column(entity::fish_species::Column::ImageUrl)
            .order_by_asc(entity::fish_species::Column::Id)
            .into_tuple::<(i32, String, Option<String>, Option<String>)>()
            .all(self.db)
            .await
    }

    /// Returns the full record with the given id, if it exists
    pub async fn get_by_id(&self, id: i32) -> Result<Option<FishSpeciesModel>, DbErr> {
        entity::prelude::FishSpecies::find_by_id(id)
            .one(self.db)
            .await
    }
}
