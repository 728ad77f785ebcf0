use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::error::ErrorKind;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Constraint violations mean the row itself was unacceptable; anything else
/// is the store failing.
fn map_write_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error
        && matches!(
            db_error.kind(),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation
        )
    {
        tracing::warn!("Product row rejected by the database: {}", db_error);
        return RepositoryError::InvalidInput;
    }
    map_read_error(error)
}

fn map_read_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {}", error);
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, owner_id, title, description, seller, price, quantity, image_url, created_at, updated_at FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, owner_id, title, description, seller, price, quantity, image_url, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn add_product(&self, product: &Product) -> Result<ProductId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO products (owner_id, title, description, seller, price, quantity, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id"#,
        )
        .bind(product.owner_id.as_str())
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.seller)
        .bind(&product.price)
        .bind(product.quantity)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(ProductId::new(id))
    }

    async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                title = $2,
                description = $3,
                seller = $4,
                price = $5,
                quantity = $6,
                image_url = $7,
                updated_at = $8
            WHERE id = $1
            RETURNING id, owner_id, title, description, seller, price, quantity, image_url, created_at, updated_at"#,
        )
        .bind(product.id.value())
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.seller)
        .bind(&product.price)
        .bind(product.quantity)
        .bind(&product.image_url)
        .bind(product.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn buy_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                quantity = quantity - 1,
                updated_at = $2
            WHERE id = $1 AND quantity > 0
            RETURNING id, owner_id, title, description, seller, price, quantity, image_url, created_at, updated_at"#,
        )
        .bind(id.value())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
