//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Methods can be chained together, with all operations queued and executed during the final
//! `build()` call.

use migration::{Migrator, MigratorTrait};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory database with tables and species fixtures, then hands back a
/// [`TestContext`].
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    include_species_tables: bool,

    // Database fixtures to insert
    fish: Vec<String>,
    plants: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create both species tables by running the real migrations.
    ///
    /// Migrations are used rather than entity definitions so that the tables carry the
    /// case-insensitive name collation the service relies on.
    pub fn with_species_tables(mut self) -> Self {
        self.include_species_tables = true;
        self
    }

    /// Insert a mock fish species with the given name during `build()`.
    pub fn with_mock_fish(mut self, name: impl Into<String>) -> Self {
        self.fish.push(name.into());
        self
    }

    /// Insert a mock plant species with the given name during `build()`.
    pub fn with_mock_plant(mut self, name: impl Into<String>) -> Self {
        self.plants.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Runs migrations if species tables were requested
    /// 2. Inserts fish fixtures, then plant fixtures, in the order they were added
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_species_tables {
            Migrator::up(&setup.db, None).await?;
        }

        // 2. Insert database fixtures
        for name in self.fish {
            setup.species().insert_mock_fish(&name).await?;
        }

        for name in self.plants {
            setup.species().insert_mock_plant(&name).await?;
        }

        Ok(setup)
    }
}
