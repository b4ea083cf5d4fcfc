use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use sqlx::FromRow;

use business::domain::price::errors::PriceValidationError;
use business::domain::price::model::{NewPriceProps, Price};

/// Row of the `prices` table.
#[derive(Debug, FromRow)]
pub struct PriceEntity {
    pub id: i64,
    pub brand_id: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub price_list: i32,
    pub product_id: i32,
    pub priority: i32,
    pub price: BigDecimal,
    pub curr: String,
}

impl PriceEntity {
    /// Rows go through the same validation as any other price; a row that
    /// breaks an invariant is reported instead of being served.
    pub fn into_domain(self) -> Result<Price, PriceValidationError> {
        Price::new(NewPriceProps {
            product_id: self.product_id,
            brand_id: self.brand_id,
            price_list_id: self.price_list,
            start_date: self.start_date,
            end_date: self.end_date,
            amount: self.price,
            currency: self.curr.trim().to_string(),
            priority: self.priority,
        })
    }
}
