//! Species lookup service.
//!
//! Lists the records of a category and resolves loosely typed names to a single record
//! using the strategies in [`matching`].

pub mod matching;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::species::{Category, SpeciesDto, SpeciesSummaryDto},
    server::{
        data::species::{fish::FishSpeciesRepository, plant::PlantSpeciesRepository},
        error::Error,
        service::species::matching::{resolve, MatchStrategy, NameIndex},
    },
};

/// Service answering direct species lookups and listings.
pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    /// Creates a new instance of [`SpeciesService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every record of a category, sorted by name ignoring letter case.
    ///
    /// Only the id, name, description and image are returned.
    pub async fn list(&self, category: Category) -> Result<Vec<SpeciesSummaryDto>, Error> {
        let rows = match category {
            Category::Fish => FishSpeciesRepository::new(self.db).get_summaries().await?,
            Category::Plant => PlantSpeciesRepository::new(self.db).get_summaries().await?,
        };

        let mut summaries: Vec<SpeciesSummaryDto> = rows
            .into_iter()
            .map(|(id, name, description, image_url)| SpeciesSummaryDto {
                id,
                name,
                description,
                image_url,
            })
            .collect();

        summaries.sort_by_cached_key(|s| s.name.to_lowercase());

        Ok(summaries)
    }

    /// Finds at most one record of `category` matching `name`.
    ///
    /// Tries each [`MatchStrategy`] in [`MatchStrategy::ORDERED`] order; the first hit wins.
    ///
    /// # Returns
    /// - `Ok(Some(SpeciesDto))` - A record matched
    /// - `Ok(None)` - No strategy matched
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find(&self, category: Category, name: &str) -> Result<Option<SpeciesDto>, Error> {
        self.find_with(category, name, &MatchStrategy::ORDERED).await
    }

    /// Same as [`Self::find`] with an explicit strategy order.
    pub async fn find_with(
        &self,
        category: Category,
        name: &str,
        strategies: &[MatchStrategy],
    ) -> Result<Option<SpeciesDto>, Error> {
        let index = self.name_index(category).await?;

        let Some((strategy, id)) = resolve(name, category, &index, strategies) else {
            tracing::debug!(name = %name, category = %category, "No species matched");

            return Ok(None);
        };

        tracing::debug!(
            name = %name,
            category = %category,
            strategy = ?strategy,
            id = id,
            "Matched species"
        );

        let record = match category {
            Category::Fish => FishSpeciesRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(SpeciesDto::from),
            Category::Plant => PlantSpeciesRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(SpeciesDto::from),
        };

        Ok(record)
    }

    async fn name_index(&self, category: Category) -> Result<NameIndex, Error> {
        let names = match category {
            Category::Fish => FishSpeciesRepository::new(self.db).get_names().await?,
            Category::Plant => PlantSpeciesRepository::new(self.db).get_names().await?,
        };

        Ok(NameIndex::new(names))
    }
}
