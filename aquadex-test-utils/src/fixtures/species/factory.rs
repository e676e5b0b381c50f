/// Create a mock fish species with default test values.
///
/// Every optional attribute is populated; set fields to `None` to test missing values.
///
/// # Arguments
/// - `name` - Display name of the species
pub fn mock_fish(name: &str) -> entity::fish_species::Model {
    entity::fish_species::Model {
        id: 0,
        name: name.to_string(),
        description: Some(format!("{} is a test fish.", name)),
        habitat_temp: Some("72-78°F (22-26°C)".to_string()),
        habitat_ph: Some("6.5-7.5".to_string()),
        diet: Some("Omnivore".to_string()),
        compatibility: Some("Peaceful".to_string()),
        min_tank_size_gal: Some(10),
        plant_needs: Some("Live plants".to_string()),
        filter_recommendation: Some("Sponge filter".to_string()),
        image_url: Some("https://example.com/fish.jpg".to_string()),
    }
}

/// Create a mock plant species with default test values.
///
/// # Arguments
/// - `name` - Display name of the species
pub fn mock_plant(name: &str) -> entity::plant_species::Model {
    entity::plant_species::Model {
        id: 0,
        name: name.to_string(),
        description: Some(format!("{} is a test plant.", name)),
        care_level: Some("Easy".to_string()),
        lighting: Some("Low".to_string()),
        co2_needed: Some("No".to_string()),
        placement: Some("Midground".to_string()),
        growth_rate: Some("Slow".to_string()),
        image_url: Some("https://example.com/plant.jpg".to_string()),
    }
}
