use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fish_species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub habitat_temp: Option<String>,
    pub habitat_ph: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub diet: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub compatibility: Option<String>,
    pub min_tank_size_gal: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub plant_needs: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub filter_recommendation: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
