//! Sample species shipped with the service.
//!
//! Seeding is idempotent: species whose name already exists in their table are skipped, so
//! the seeder can run on every startup.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::species::{
        fish::{FishSpeciesRepository, NewFishSpecies},
        plant::{NewPlantSpecies, PlantSpeciesRepository},
    },
    error::Error,
};

/// Number of rows inserted by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Fish species inserted
    pub fish: u64,
    /// Plant species inserted
    pub plants: u64,
}

/// Inserts the sample fish and plant species, skipping names that already exist.
///
/// # Returns
/// - `Ok(SeedReport)` - Number of new rows per table, zero when already seeded
/// - `Err(Error::DbErr)` - Database operation failed
pub async fn seed_sample_data<C: ConnectionTrait>(db: &C) -> Result<SeedReport, Error> {
    let fish = FishSpeciesRepository::new(db)
        .create_many_ignoring_existing(sample_fish())
        .await?;
    let plants = PlantSpeciesRepository::new(db)
        .create_many_ignoring_existing(sample_plants())
        .await?;

    tracing::info!(fish = fish, plants = plants, "Seeded sample species");

    Ok(SeedReport { fish, plants })
}

/// Sample fish species
pub fn sample_fish() -> Vec<NewFishSpecies> {
    vec![
        NewFishSpecies {
            name: "Betta Fish".to_string(),
            description: Some(
                "Known for their vibrant colors and flowing fins, Betta fish (Siamese fighting fish) are popular but require specific care. They are often kept alone."
                    .to_string(),
            ),
            habitat_temp: Some("75-80°F (24-27°C)".to_string()),
            habitat_ph: Some("6.5-7.5".to_string()),
            diet: Some("Carnivore (pellets, bloodworms, brine shrimp)".to_string()),
            compatibility: Some(
                "Aggressive towards other Bettas and fish with long fins; generally best kept alone in their own tank."
                    .to_string(),
            ),
            min_tank_size_gal: Some(5),
            plant_needs: Some(
                "Live plants like Anubias, Java Fern; floating plants for cover".to_string(),
            ),
            filter_recommendation: Some(
                "Sponge filter or small hang-on-back filter with gentle flow".to_string(),
            ),
            image_url: Some("https://example.com/betta.jpg".to_string()),
        },
        NewFishSpecies {
            name: "Guppy".to_string(),
            description: Some(
                "Small, colorful, and active livebearers, Guppies are excellent for beginners. They breed easily."
                    .to_string(),
            ),
            habitat_temp: Some("72-78°F (22-26°C)".to_string()),
            habitat_ph: Some("6.8-7.8".to_string()),
            diet: Some("Omnivore (flakes, brine shrimp, daphnia)".to_string()),
            compatibility: Some(
                "Peaceful; compatible with most community fish of similar size and temperament."
                    .to_string(),
            ),
            min_tank_size_gal: Some(10),
            plant_needs: Some(
                "Heavily planted tanks (e.g., Anacharis, Guppy Grass) provide cover for fry."
                    .to_string(),
            ),
            filter_recommendation: Some(
                "Hang-on-back filter or internal filter suitable for tank size".to_string(),
            ),
            image_url: Some("https://example.com/guppy.jpg".to_string()),
        },
        NewFishSpecies {
            name: "Neon Tetra".to_string(),
            description: Some(
                "Brightly colored, schooling fish that are peaceful and add a pop of color to community tanks."
                    .to_string(),
            ),
            habitat_temp: Some("72-76°F (22-24°C)".to_string()),
            habitat_ph: Some("6.0-7.0".to_string()),
            diet: Some("Omnivore (micro-pellets, flakes, frozen foods)".to_string()),
            compatibility: Some(
                "Peaceful; must be kept in schools of 6 or more; compatible with other peaceful community fish."
                    .to_string(),
            ),
            min_tank_size_gal: Some(20),
            plant_needs: Some(
                "Densely planted tanks with open swimming areas (e.g., Cryptocoryne, Java Moss)."
                    .to_string(),
            ),
            filter_recommendation: Some(
                "Can tolerate various filters, but prefer gentle flow from sponge or internal filter."
                    .to_string(),
            ),
            image_url: Some("https://example.com/neon_tetra.jpg".to_string()),
        },
    ]
}

/// Sample plant species
pub fn sample_plants() -> Vec<NewPlantSpecies> {
    vec![
        NewPlantSpecies {
            name: "Java Fern".to_string(),
            description: Some(
                "A hardy and easy-to-care-for plant, ideal for beginners. It attaches to wood or rocks."
                    .to_string(),
            ),
            care_level: Some("Easy".to_string()),
            lighting: Some("Low to Medium".to_string()),
            co2_needed: Some("No".to_string()),
            placement: Some("Midground/Attached to decor".to_string()),
            growth_rate: Some("Slow".to_string()),
            image_url: Some("https://example.com/java_fern.jpg".to_string()),
        },
        NewPlantSpecies {
            name: "Anubias Nana".to_string(),
            description: Some(
                "Another very hardy and low-maintenance plant, known for its thick leaves. Attaches to surfaces."
                    .to_string(),
            ),
            care_level: Some("Easy".to_string()),
            lighting: Some("Low to Medium".to_string()),
            co2_needed: Some("No".to_string()),
            placement: Some("Foreground/Midground/Attached to decor".to_string()),
            growth_rate: Some("Slow".to_string()),
            image_url: Some("https://example.com/anubias_nana.jpg".to_string()),
        },
        NewPlantSpecies {
            name: "Anacharis".to_string(),
            description: Some(
                "A fast-growing, excellent oxygenator that can be floated or planted. Great for new tanks."
                    .to_string(),
            ),
            care_level: Some("Easy".to_string()),
            lighting: Some("Medium to High".to_string()),
            co2_needed: Some("No (benefits from it)".to_string()),
            placement: Some("Background/Floating".to_string()),
            growth_rate: Some("Fast".to_string()),
            image_url: Some("https://example.com/anacharis.jpg".to_string()),
        },
    ]
}
