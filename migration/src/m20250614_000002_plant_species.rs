use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlantSpecies::Table)
                    .if_not_exists()
                    .col(pk_auto(PlantSpecies::Id))
                    .col(string_uniq(PlantSpecies::Name).extra("COLLATE NOCASE"))
                    .col(text_null(PlantSpecies::Description))
                    .col(string_null(PlantSpecies::CareLevel))
                    .col(string_null(PlantSpecies::Lighting))
                    .col(string_null(PlantSpecies::Co2Needed))
                    .col(string_null(PlantSpecies::Placement))
                    .col(string_null(PlantSpecies::GrowthRate))
                    .col(string_null(PlantSpecies::ImageUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlantSpecies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlantSpecies {
    Table,
    Id,
    Name,
    Description,
    CareLevel,
    Lighting,
    Co2Needed,
    Placement,
    GrowthRate,
    ImageUrl,
}
