use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::Category;

/// Row of the `products` table. The category is stored as its integer code.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: i32,
    pub image_url: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let category = Category::from_code(self.category).map_err(|e| {
            tracing::error!(product_id = %self.id, error = %e, "stored product has an unknown category");
            RepositoryError::Persistence
        })?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            category,
            self.image_url,
        ))
    }
}

impl From<&Product> for ProductEntity {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            category: product.category.code(),
            image_url: product.image_url.clone(),
        }
    }
}
