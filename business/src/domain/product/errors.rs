/// Errors raised by the product use cases.
/// Messages are code-style identifiers so the web layer can forward them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
