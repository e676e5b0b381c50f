//! Database connection and sample data setup run before the server starts.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::Error, seed};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Insert the sample species when enabled by configuration
pub async fn seed_sample_data(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_sample_data {
        tracing::info!("Sample data seeding disabled");

        return Ok(());
    }

    seed::seed_sample_data(db).await?;

    Ok(())
}
