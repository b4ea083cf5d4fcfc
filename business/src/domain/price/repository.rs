use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Price;
use super::value_objects::{BrandId, ProductId};

/// Price catalog port.
///
/// Returns every stored price of the product/brand pair, whatever its validity
/// window; time filtering and priority selection belong to the resolver.
#[async_trait]
pub trait PriceRepository: Send + Sync {
    async fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> Result<Vec<Price>, RepositoryError>;
}
