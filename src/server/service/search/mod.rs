//! Free-text species search.
//!
//! Interprets a natural language query with [`interpreter`], looks the candidate name up
//! through [`SpeciesService`] and phrases the answer with [`phrasing`].

pub mod attribute;
pub mod interpreter;
pub mod phrasing;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::search::{SearchResponseDto, SearchResponseType},
    server::{
        error::{species::SpeciesError, Error},
        service::{search::interpreter::interpret, species::SpeciesService},
    },
};

/// Service answering free-text questions about species.
pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of [`SearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Answers a free-text query.
    ///
    /// Queries that name no known species are answered with an error-type response rather
    /// than an `Err`.
    ///
    /// # Returns
    /// - `Ok(SearchResponseDto)` - Answer for a matched species, or an error-type answer
    /// - `Err(Error::SpeciesError(SpeciesError::EmptyQuery))` - Query is empty after trimming
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn search(&self, query: &str) -> Result<SearchResponseDto, Error> {
        if query.trim().is_empty() {
            return Err(SpeciesError::EmptyQuery.into());
        }

        let interpretation = interpret(query);

        tracing::debug!(
            query = %interpretation.normalized,
            category = %interpretation.category,
            name = ?interpretation.name,
            attribute = ?interpretation.attribute,
            "Interpreted search query"
        );

        let record = match &interpretation.name {
            Some(name) => {
                SpeciesService::new(self.db)
                    .find(interpretation.category, name)
                    .await?
            }
            None => None,
        };

        let Some(record) = record else {
            let subject = interpretation
                .name
                .as_deref()
                .unwrap_or(&interpretation.normalized);

            return Ok(SearchResponseDto {
                response_type: SearchResponseType::Error,
                data: None,
                message: format!(
                    "I couldn't find information for '{}'. Please try another name or phrase.",
                    subject
                ),
            });
        };

        let message = phrasing::describe(&record, interpretation.attribute);

        Ok(SearchResponseDto {
            response_type: record.category().into(),
            data: Some(record),
            message,
        })
    }
}
