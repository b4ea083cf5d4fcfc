use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

use business::domain::price::errors::PriceValidationError;
use business::domain::price::model::{NewPriceProps, Price};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// brand, start, end, price list, product, priority, amount, currency
const FIXTURE: [(i32, &str, &str, i32, i32, i32, &str, &str); 4] = [
    (1, "2020-06-14 00:00:00", "2020-12-31 23:59:59", 1, 35455, 0, "35.50", "EUR"),
    (1, "2020-06-14 15:00:00", "2020-06-14 18:30:00", 2, 35455, 1, "25.45", "EUR"),
    (1, "2020-06-15 00:00:00", "2020-06-15 11:00:00", 3, 35455, 1, "30.50", "EUR"),
    (1, "2020-06-15 16:00:00", "2020-12-31 23:59:59", 4, 35455, 1, "38.95", "EUR"),
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed.invalid_date")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("seed.invalid_amount")]
    InvalidAmount(#[from] bigdecimal::ParseBigDecimalError),
    #[error("seed.invalid_price")]
    InvalidPrice(#[from] PriceValidationError),
}

/// Reference tariffs for product 35455 of brand 1, the same rows the SQL
/// migration inserts.
pub fn reference_prices() -> Result<Vec<Price>, SeedError> {
    FIXTURE
        .iter()
        .map(
            |&(brand_id, start, end, price_list_id, product_id, priority, amount, currency)|
             -> Result<Price, SeedError> {
                Ok(Price::new(NewPriceProps {
                    product_id,
                    brand_id,
                    price_list_id,
                    start_date: NaiveDateTime::parse_from_str(start, DATE_FORMAT)?,
                    end_date: NaiveDateTime::parse_from_str(end, DATE_FORMAT)?,
                    amount: BigDecimal::from_str(amount)?,
                    currency: currency.to_string(),
                    priority,
                })?)
            },
        )
        .collect()
}
