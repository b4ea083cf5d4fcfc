use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::Price;
use crate::domain::price::query::PriceQuery;
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::resolver::resolve;
use crate::domain::price::use_cases::get_applicable::{
    GetApplicablePriceParams, GetApplicablePriceUseCase,
};

pub struct GetApplicablePriceUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetApplicablePriceUseCase for GetApplicablePriceUseCaseImpl {
    async fn execute(&self, params: GetApplicablePriceParams) -> Result<Price, PriceError> {
        let query = PriceQuery::new(params.application_date, params.product_id, params.brand_id)?;

        self.logger.info(&format!("Getting price for {}", query));

        let candidates = self
            .repository
            .find_candidates(query.product_id(), query.brand_id())
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Price catalog lookup failed for {}: {}", query, e));
            })?;

        self.logger.debug(&format!(
            "Resolving among {} candidate prices for {}",
            candidates.len(),
            query
        ));

        let price = resolve(&query, candidates)
            .inspect_err(|e| self.logger.warn(&format!("No price found: {}", e)))?;

        self.logger.debug(&format!(
            "Found applicable price: priceList={}, priority={}, price={}",
            price.price_list_id(),
            price.priority(),
            price.amount()
        ));

        Ok(price)
    }
}
