use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::Category;

/// Output port for product storage.
///
/// `get_by_id` reports a missing row as `RepositoryError::NotFound`;
/// `save` inserts or fully replaces the row with the same id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
