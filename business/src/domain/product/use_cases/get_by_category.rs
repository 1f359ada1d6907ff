use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Category;

pub struct GetProductsByCategoryParams {
    pub category: Category,
}

/// Lists the products of one category. An empty category is not an error.
#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError>;
}
