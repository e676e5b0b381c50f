//! Application state.

use sea_orm::DatabaseConnection;

/// State shared by every HTTP handler.
///
/// The connection pool handle is the only resource a request needs; each query borrows a
/// connection from it for the duration of the query.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the species database
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
