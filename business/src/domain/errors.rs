/// Failures reported by output ports backed by storage.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The requested row does not exist.
    #[error("repository.not_found")]
    NotFound,
    /// A stored row could not be mapped back into the domain.
    #[error("repository.persistence")]
    Persistence,
    /// The database driver reported a failure.
    #[error("repository.database_error")]
    DatabaseError,
}
