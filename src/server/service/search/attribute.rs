//! Attributes a query can ask about, and the phrases that trigger them.

use std::fmt;

/// A named field of a species record that a query can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// What the species eats
    Diet,
    /// Preferred water temperature and pH
    Habitat,
    /// How the species gets along with tank mates
    Compatibility,
    /// Minimum tank size in gallons
    MinTankSizeGal,
    /// Recommended planting
    PlantNeeds,
    /// Recommended filtration
    FilterRecommendation,
    /// How demanding the plant is to keep
    CareLevel,
    /// Light the plant needs
    Lighting,
    /// Whether CO2 injection is needed
    Co2Needed,
    /// Where in the tank the plant goes
    Placement,
    /// How fast the plant grows
    GrowthRate,
}

/// Trigger phrases per attribute. Earlier rows take precedence when a query mentions several.
pub static DETAIL_TRIGGERS: [(Attribute, &[&str]); 11] = [
    (Attribute::Diet, &["diet", "eat", "food"]),
    (Attribute::Habitat, &["habitat", "water", "temperature", "ph"]),
    (
        Attribute::Compatibility,
        &["compatible", "compatibility", "other fish"],
    ),
    (Attribute::MinTankSizeGal, &["tank size", "size of tank"]),
    (Attribute::PlantNeeds, &["plants", "plantation"]),
    (Attribute::FilterRecommendation, &["filter", "filtering"]),
    (Attribute::CareLevel, &["care level", "care"]),
    (Attribute::Lighting, &["lighting"]),
    (Attribute::Co2Needed, &["co2"]),
    (Attribute::Placement, &["placement"]),
    (Attribute::GrowthRate, &["growth rate", "growth"]),
];

impl Attribute {
    /// Field name of the attribute on a species record
    pub fn key(self) -> &'static str {
        match self {
            Self::Diet => "diet",
            Self::Habitat => "habitat",
            Self::Compatibility => "compatibility",
            Self::MinTankSizeGal => "min_tank_size_gal",
            Self::PlantNeeds => "plant_needs",
            Self::FilterRecommendation => "filter_recommendation",
            Self::CareLevel => "care_level",
            Self::Lighting => "lighting",
            Self::Co2Needed => "co2_needed",
            Self::Placement => "placement",
            Self::GrowthRate => "growth_rate",
        }
    }

    /// Human readable form of the key, e.g. "min tank size gal"
    pub fn label(self) -> String {
        self.key().replace('_', " ")
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Finds the first attribute whose trigger occurs in `text`.
///
/// Returns the attribute together with the trigger that matched it.
pub fn detect(text: &str) -> Option<(Attribute, &'static str)> {
    DETAIL_TRIGGERS.iter().find_map(|(attribute, triggers)| {
        triggers
            .iter()
            .find(|trigger| text.contains(*trigger))
            .map(|trigger| (*attribute, *trigger))
    })
}
