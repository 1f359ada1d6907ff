use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Category;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "product query failed");
    RepositoryError::DatabaseError
}

fn into_domain_list(entities: Vec<ProductEntity>) -> Result<Vec<Product>, RepositoryError> {
    entities.into_iter().map(ProductEntity::into_domain).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, category, image_url FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        into_domain_list(entities)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, category, image_url FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, category, image_url FROM products WHERE category = $1 ORDER BY name",
        )
        .bind(category.code())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        into_domain_list(entities)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from(product);

        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, category, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                category = EXCLUDED.category,
                image_url = EXCLUDED.image_url"#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(&entity.price)
        .bind(entity.category)
        .bind(&entity.image_url)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
