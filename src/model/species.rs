use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of species record the service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Category {
    Fish,
    Plant,
}

impl Category {
    /// Word some stored display names end with, e.g. "Betta Fish"
    pub fn canonical_suffix(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Plant => "plant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_suffix())
    }
}

/// Listing entry for a species, without any care attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SpeciesSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FishSpeciesDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Preferred water temperature range, e.g. "72-78°F (22-26°C)"
    pub habitat_temp: Option<String>,
    /// Preferred pH range, e.g. "6.8-7.8"
    pub habitat_ph: Option<String>,
    pub diet: Option<String>,
    pub compatibility: Option<String>,
    pub min_tank_size_gal: Option<i32>,
    /// Planting recommendations for the tank this fish lives in
    pub plant_needs: Option<String>,
    pub filter_recommendation: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlantSpeciesDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub care_level: Option<String>,
    pub lighting: Option<String>,
    pub co2_needed: Option<String>,
    pub placement: Option<String>,
    pub growth_rate: Option<String>,
    pub image_url: Option<String>,
}

/// A full species record of either category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum SpeciesDto {
    Fish(FishSpeciesDto),
    Plant(PlantSpeciesDto),
}

impl SpeciesDto {
    /// Category of the record
    pub fn category(&self) -> Category {
        match self {
            Self::Fish(_) => Category::Fish,
            Self::Plant(_) => Category::Plant,
        }
    }

    /// Display name of the record
    pub fn name(&self) -> &str {
        match self {
            Self::Fish(fish) => &fish.name,
            Self::Plant(plant) => &plant.name,
        }
    }

    /// Free-text description, if the record has one
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Fish(fish) => fish.description.as_deref(),
            Self::Plant(plant) => plant.description.as_deref(),
        }
    }
}
