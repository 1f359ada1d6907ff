use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::value_objects::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: Category,
    pub image_url: String,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: Category,
    pub image_url: String,
}

impl Product {
    /// Builds a product that has never been stored, assigning it a fresh id.
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            category: props.category,
            image_url: props.image_url,
        }
    }

    /// Constructor for data already persisted in the repository, or for a full
    /// replacement of a stored product under its existing id.
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        category: Category,
        image_url: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category,
            image_url,
        }
    }
}
