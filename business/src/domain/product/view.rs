use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::model::Product;
use super::value_objects::Category;

/// Read projection of a product returned by single-product lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: Category,
    pub image_url: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image_url: product.image_url,
        }
    }
}
