//! The product data-access service.
//!
//! Owns the PostgreSQL pool and issues exactly one statement per operation
//! (bulk delete issues two). Storage errors are returned untouched so the
//! HTTP layer can surface them verbatim.

use crate::domain::pagination::Page;
use crate::domain::product::{Product, ProductPayload};
use crate::infra::config::DbConfig;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub const CREATE_PRODUCTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id SERIAL,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL DEFAULT 0.00,
    CONSTRAINT products_pkey PRIMARY KEY (id)
)";

/// Service handling every read and write of the `products` table.
#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    /// Connects to the database, checks it answers, and creates the table if missing.
    pub async fn connect(config: &DbConfig) -> anyhow::Result<Self> {
        tracing::info!(host = %config.host, port = config.port, "connecting to database");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(config.connect_options())
            .await
            .with_context(|| {
                format!("failed to connect to database at {}:{}", config.host, config.port)
            })?;

        let service = Self::from_pool(pool);
        service.ping().await.context("database ping failed")?;
        service
            .ensure_schema()
            .await
            .context("failed to create products table")?;

        tracing::info!("successfully connected to database");
        Ok(service)
    }

    /// Wraps an existing pool without touching the database.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_PRODUCTS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Fetches one product. A missing id yields `sqlx::Error::RowNotFound`.
    pub async fn get_product(&self, id: i32) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_products(&self, page: Page) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products
             ORDER BY id
             LIMIT $1 OFFSET $2",
        )
        .bind(page.count)
        .bind(page.start)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts a product and echoes the submitted values with the new id.
    /// The stored price is rounded to cents; fetch the row to see it.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, sqlx::Error> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, price) VALUES ($1, $2::NUMERIC(10,2)) RETURNING id",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(payload.clone().into_product(id))
    }

    /// Overwrites name and price for `id`. Touching zero rows is not an error;
    /// the submitted values are echoed back with the id either way.
    pub async fn update_product(
        &self,
        id: i32,
        payload: ProductPayload,
    ) -> Result<Product, sqlx::Error> {
        sqlx::query("UPDATE products SET name = $1, price = $2::NUMERIC(10,2) WHERE id = $3")
            .bind(&payload.name)
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(payload.into_product(id))
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Removes every product and restarts the id sequence at 1.
    pub async fn delete_all_products(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;
        sqlx::query("ALTER SEQUENCE products_id_seq RESTART WITH 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count_products(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
    }
}
