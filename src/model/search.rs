use serde::{Deserialize, Serialize};

use crate::model::species::{Category, SpeciesDto};

/// Body of a free-text search request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SearchRequestDto {
    /// The question as typed by the user, e.g. "what do guppies eat?"
    #[serde(default)]
    pub query: String,
}

/// What kind of answer a [`SearchResponseDto`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum SearchResponseType {
    FishSpecies,
    PlantSpecies,
    Error,
    GeneralInfo,
}

impl From<Category> for SearchResponseType {
    fn from(category: Category) -> Self {
        match category {
            Category::Fish => Self::FishSpecies,
            Category::Plant => Self::PlantSpecies,
        }
    }
}

/// Answer to a free-text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SearchResponseDto {
    #[serde(rename = "type")]
    pub response_type: SearchResponseType,
    /// The matched record, absent when nothing matched
    pub data: Option<SpeciesDto>,
    /// Natural language reply to display to the user
    pub message: String,
}
