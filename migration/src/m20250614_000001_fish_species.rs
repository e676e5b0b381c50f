use sea_orm_migration::{prelude::*, schema::*};

/// Species names are unique regardless of letter case
static NOCASE: &str = "COLLATE NOCASE";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FishSpecies::Table)
                    .if_not_exists()
                    .col(pk_auto(FishSpecies::Id))
                    .col(string_uniq(FishSpecies::Name).extra(NOCASE))
                    .col(text_null(FishSpecies::Description))
                    .col(string_null(FishSpecies::HabitatTemp))
                    .col(string_null(FishSpecies::HabitatPh))
                    .col(text_null(FishSpecies::Diet))
                    .col(text_null(FishSpecies::Compatibility))
                    .col(integer_null(FishSpecies::MinTankSizeGal))
                    .col(text_null(FishSpecies::PlantNeeds))
                    .col(text_null(FishSpecies::FilterRecommendation))
                    .col(string_null(FishSpecies::ImageUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FishSpecies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FishSpecies {
    Table,
    Id,
    Name,
    Description,
    HabitatTemp,
    HabitatPh,
    Diet,
    Compatibility,
    MinTankSizeGal,
    PlantNeeds,
    FilterRecommendation,
    ImageUrl,
}
