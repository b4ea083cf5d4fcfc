use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::price::model::Price;
use business::domain::price::repository::PriceRepository;
use business::domain::price::value_objects::{BrandId, ProductId};

use super::entity::PriceEntity;

pub struct PriceRepositoryPostgres {
    pool: PgPool,
}

impl PriceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceRepository for PriceRepositoryPostgres {
    async fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<Price>, RepositoryError> {
        tracing::debug!(
            "Finding candidate prices for productId={}, brandId={}",
            product_id,
            brand_id
        );

        let entities = sqlx::query_as::<_, PriceEntity>(
            "SELECT id, brand_id, start_date, end_date, price_list, product_id, priority, price, curr FROM prices WHERE product_id = $1 AND brand_id = $2 ORDER BY priority DESC, price_list ASC",
        )
        .bind(product_id.value())
        .bind(brand_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Price catalog query failed: {}", e);
            RepositoryError::DatabaseError
        })?;

        let prices = entities
            .into_iter()
            .map(|entity| {
                let id = entity.id;
                entity.into_domain().map_err(|e| {
                    tracing::error!("Stored price {} is invalid: {}", id, e);
                    RepositoryError::Persistence
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Found {} candidate prices", prices.len());

        Ok(prices)
    }
}
