/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The store refused the row because a required column was missing or
    /// violated a constraint.
    #[error("repository.invalid_input")]
    InvalidInput,
    /// The store could not be reached or failed the statement.
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn invalid_input() -> Self {
        RepositoryError::InvalidInput
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
