use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::price::model::Price;
use business::domain::price::repository::PriceRepository;
use business::domain::price::value_objects::{BrandId, ProductId};

use super::seed::{SeedError, reference_prices};

/// Price catalog held in process memory. Used when no database is configured
/// and as a storage-free collaborator in tests.
#[derive(Default)]
pub struct InMemoryPriceRepository {
    prices: Vec<Price>,
}

impl InMemoryPriceRepository {
    pub fn new(prices: Vec<Price>) -> Self {
        Self { prices }
    }

    /// Catalog preloaded with the reference tariffs.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(reference_prices()?))
    }
}

#[async_trait]
impl PriceRepository for InMemoryPriceRepository {
    async fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<Price>, RepositoryError> {
        let candidates: Vec<Price> = self
            .prices
            .iter()
            .filter(|p| p.product_id() == product_id && p.brand_id() == brand_id)
            .cloned()
            .collect();

        tracing::debug!(
            "Found {} candidate prices for productId={}, brandId={}",
            candidates.len(),
            product_id,
            brand_id
        );

        Ok(candidates)
    }
}
