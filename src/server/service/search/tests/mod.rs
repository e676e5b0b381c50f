use aquadex_test_utils::prelude::*;

use crate::{
    model::{
        search::{SearchResponseDto, SearchResponseType},
        species::SpeciesDto,
    },
    server::{
        error::{species::SpeciesError, Error},
        seed::seed_sample_data,
        service::search::SearchService,
    },
};

async fn seeded() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_species_tables().build().await?;
    seed_sample_data(&test.db).await.unwrap();

    Ok(test)
}

async fn ask(test: &TestContext, query: &str) -> SearchResponseDto {
    SearchService::new(&test.db).search(query).await.unwrap()
}

/// Expect a plural name with a diet question to answer with the singular record's diet
#[tokio::test]
async fn answers_diet_of_plural_name() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "what is the diet of guppies").await;

    assert_eq!(response.response_type, SearchResponseType::FishSpecies);
    assert_eq!(
        response.data.as_ref().map(SpeciesDto::name),
        Some("Guppy")
    );
    assert_eq!(
        response.message,
        "Guppy are Omnivore (flakes, brine shrimp, daphnia)."
    );

    Ok(())
}

/// Expect a plant question without an attribute to answer with the description
#[tokio::test]
async fn describes_plant_without_attribute() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "tell me about Java Fern").await;

    assert_eq!(response.response_type, SearchResponseType::PlantSpecies);
    assert!(matches!(response.data, Some(SpeciesDto::Plant(_))));
    assert_eq!(
        response.message,
        "Java Fern: A hardy and easy-to-care-for plant, ideal for beginners. It attaches to wood or rocks."
    );

    Ok(())
}

/// Expect the tank size phrasing for a plural fish name
#[tokio::test]
async fn answers_tank_size() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "tank size for neon tetras").await;

    assert_eq!(response.response_type, SearchResponseType::FishSpecies);
    assert_eq!(
        response.message,
        "The minimum tank size for Neon Tetra is 20 gallons."
    );

    Ok(())
}

/// Expect the canonical suffix to be completed for the habitat phrasing
#[tokio::test]
async fn answers_habitat_with_suffix_completion() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "betta habitat?").await;

    assert_eq!(
        response.data.as_ref().map(SpeciesDto::name),
        Some("Betta Fish")
    );
    assert_eq!(
        response.message,
        "Betta Fish prefer temperatures of 75-80°F (24-27°C) and a pH of 6.5-7.5."
    );

    Ok(())
}

/// Expect plant attribute phrasings
#[tokio::test]
async fn answers_plant_attribute() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "Anacharis CO2").await;

    assert_eq!(response.response_type, SearchResponseType::PlantSpecies);
    assert_eq!(response.message, "For Anacharis, CO2 is No (benefits from it).");

    Ok(())
}

/// Expect a fish attribute asked of a plant to be reported as unknown
#[tokio::test]
async fn reports_attribute_of_other_category() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "java fern diet").await;

    assert_eq!(response.response_type, SearchResponseType::PlantSpecies);
    assert_eq!(
        response.message,
        "I don't have specific information about 'diet' for Java Fern."
    );

    Ok(())
}

/// Expect an error-type answer for an unknown name
#[tokio::test]
async fn answers_unknown_name_with_error_type() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "xyzzy habitat").await;

    assert_eq!(response.response_type, SearchResponseType::Error);
    assert!(response.data.is_none());
    assert!(response.message.contains("I couldn't find information for"));
    assert_eq!(
        response.message,
        "I couldn't find information for 'Xyzzy'. Please try another name or phrase."
    );

    Ok(())
}

/// Expect the normalized query in the answer when no name could be extracted
#[tokio::test]
async fn answers_with_query_when_no_name_extracted() -> Result<(), TestError> {
    let test = seeded().await?;

    let response = ask(&test, "What is the?").await;

    assert_eq!(response.response_type, SearchResponseType::Error);
    assert_eq!(
        response.message,
        "I couldn't find information for 'what is the'. Please try another name or phrase."
    );

    Ok(())
}

/// Expect blank queries to be rejected before any lookup
#[tokio::test]
async fn rejects_blank_query() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let service = SearchService::new(&test.db);

    for query in ["", "   ", "\t\n"] {
        let result = service.search(query).await;

        assert!(matches!(
            result,
            Err(Error::SpeciesError(SpeciesError::EmptyQuery))
        ));
    }

    Ok(())
}

/// Expect Error when the species tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = SearchService::new(&test.db).search("guppy diet").await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
