use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::Price;

pub struct GetApplicablePriceParams {
    pub application_date: NaiveDateTime,
    pub product_id: i32,
    pub brand_id: i32,
}

#[async_trait]
pub trait GetApplicablePriceUseCase: Send + Sync {
    async fn execute(&self, params: GetApplicablePriceParams) -> Result<Price, PriceError>;
}
